//! Utility Functions and Cross-Cutting Concerns
//!
//! This module provides utility functions and macros used throughout the banner:
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **agent**: user agent classification into OS family, OS version and browser
//! - **page_env**: one-shot capture of the ambient page environment (locale,
//!   user agent, standalone display mode)
//!
//! The agent classifier is pure string matching so it can be unit tested
//! without a browser; page_env is the only place that touches the live window.

pub mod agent;
pub mod console_macros;
pub mod page_env;

pub use agent::*;
pub use page_env::*;
