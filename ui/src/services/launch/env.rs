//! Launch Attempt Environment
//!
//! Everything a launch attempt observes or effects goes through this trait:
//! the clock, page visibility, navigation, and the two timer primitives.
//! The heuristic is a pure state machine over it, which is what lets the
//! tests drive simulated time instead of waiting on a real clock.

use gloo_timers::callback::{Interval, Timeout};

use crate::console_error;

pub trait LaunchEnv {
    type TimerHandle;

    /// Current time in milliseconds. Only ever used for differences.
    fn now_ms(&self) -> f64;

    /// Current page-visibility predicate.
    fn is_document_hidden(&self) -> bool;

    /// Full-page navigation side effect.
    fn navigate_to(&self, url: &str);

    fn set_timeout(&self, ms: u32, callback: Box<dyn FnOnce()>) -> Self::TimerHandle;

    fn set_interval(&self, ms: u32, callback: Box<dyn FnMut()>) -> Self::TimerHandle;

    fn clear_timer(&self, handle: Self::TimerHandle);
}

/// Browser environment over gloo timers and the live document.
pub struct BrowserEnv;

pub enum BrowserTimer {
    Interval(Interval),
    Timeout(Timeout),
}

impl LaunchEnv for BrowserEnv {
    type TimerHandle = BrowserTimer;

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn is_document_hidden(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|document| document.hidden())
            .unwrap_or(false)
    }

    fn navigate_to(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            console_error!("[Launch] Navigation to {} failed: {:?}", url, err);
        }
    }

    fn set_timeout(&self, ms: u32, callback: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(ms, callback))
    }

    fn set_interval(&self, ms: u32, callback: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(ms, callback))
    }

    fn clear_timer(&self, handle: BrowserTimer) {
        // Dropping a gloo timer clears the underlying browser timer.
        drop(handle);
    }
}
