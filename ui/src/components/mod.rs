//! Banner Presentation
//!
//! - **banner_view**: markup assembly and DOM insertion/removal of the
//!   banner element, plus gesture wiring
//! - **host**: Dioxus component that mounts the banner from a host app

pub mod banner_view;

#[cfg(feature = "web")]
pub mod host;

pub use banner_view::*;

#[cfg(feature = "web")]
pub use host::*;
