//! Deep Link Launch Heuristic
//!
//! Attempting to open a native app from a web page has no success callback:
//! navigating to a custom URI either hands the user off to the app or does
//! nothing at all. This module races the hand-off signal (the document going
//! hidden) against a bounded timer; if the timer wins while the page is
//! still visible, the deep link is presumed dead and the user goes to the
//! store instead.
//!
//! - **env**: scheduling/visibility/navigation environment, with the gloo
//!   timer implementation for the browser
//! - **heuristic**: the launch attempt state machine

pub mod env;
pub mod heuristic;


pub use env::*;
pub use heuristic::*;
