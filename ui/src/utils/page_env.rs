//! Page Environment Capture
//!
//! One-shot capture of the ambient facts the banner needs from the page:
//! the classified user agent, the store language derived from the browser
//! locale, and whether the page runs in a standalone/home-screen display
//! mode. Captured once at mount so everything downstream works on explicit,
//! immutable inputs.

use web_sys::window;

use crate::console_debug;
use crate::utils::agent::{classify, AgentInfo};

/// Store language used when the browser reports no usable locale.
pub const FALLBACK_STORE_LANGUAGE: &str = "us";

/// Ambient page facts, captured once at banner mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEnvironment {
    pub agent: AgentInfo,
    /// Two-letter store language derived from the browser locale.
    pub store_language: String,
    /// True when running as a PWA/home-screen app.
    pub standalone: bool,
}

impl PageEnvironment {
    pub fn capture() -> Self {
        let user_agent = window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();
        let agent = classify(&user_agent);
        let store_language = detected_store_language();
        let standalone = is_standalone_display();

        console_debug!(
            "[PageEnvironment] os={:?} major={:?} browser={:?} lang={} standalone={}",
            agent.os_family,
            agent.os_major,
            agent.browser,
            store_language,
            standalone
        );

        Self {
            agent,
            store_language,
            standalone,
        }
    }
}

/// Check if running as a PWA/Home Screen App
pub fn is_standalone_display() -> bool {
    // Standalone display mode covers both iOS home screen apps and installed
    // PWAs; navigator.standalone is the legacy iOS-only signal.
    js_sys::eval(
        r#"(window.matchMedia('(display-mode: standalone)').matches ||
            window.navigator.standalone === true ||
            window.matchMedia('(display-mode: fullscreen)').matches)"#,
    )
    .ok()
    .and_then(|value| value.as_bool())
    .unwrap_or(false)
}

/// Store language from the live browser locale.
pub fn detected_store_language() -> String {
    window()
        .and_then(|w| w.navigator().language())
        .map(|tag| store_language_from_tag(&tag))
        .unwrap_or_else(|| FALLBACK_STORE_LANGUAGE.to_owned())
}

/// Last two characters of a locale tag ("en-US" -> "US"), falling back to
/// [`FALLBACK_STORE_LANGUAGE`] for tags shorter than two characters.
pub fn store_language_from_tag(tag: &str) -> String {
    let chars: Vec<char> = tag.chars().collect();
    if chars.len() >= 2 {
        chars[chars.len() - 2..].iter().collect()
    } else {
        FALLBACK_STORE_LANGUAGE.to_owned()
    }
}
