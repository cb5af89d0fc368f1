//! Platform Profiles and Resolution
//!
//! Per-platform differences (meta tag names, icon fallback order, store URL
//! templates) are data on a three-variant enum, selected once at resolution
//! time. Resolution itself is classification plus one policy exception: iOS
//! Safari ships its own app banner from iOS 6 on, so this one defers to it.

use crate::services::config::BannerConfig;
use crate::utils::agent::{AgentInfo, BrowserKind, OsFamily};

/// A supported banner platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    Windows,
}

impl Platform {
    /// Stable key used for theme class names.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Windows => "windows",
        }
    }

    /// Name of the page meta tag holding the app id.
    pub fn app_meta(&self) -> &'static str {
        match self {
            Platform::Ios => "apple-itunes-app",
            Platform::Android => "google-play-app",
            Platform::Windows => "msApplication-ID",
        }
    }

    /// Icon link rel candidates, most preferred first.
    pub fn icon_rels(&self) -> &'static [&'static str] {
        match self {
            Platform::Ios => &["apple-touch-icon-precomposed", "apple-touch-icon"],
            Platform::Android => &[
                "android-touch-icon",
                "apple-touch-icon-precomposed",
                "apple-touch-icon",
            ],
            Platform::Windows => &[
                "windows-touch-icon",
                "apple-touch-icon-precomposed",
                "apple-touch-icon",
            ],
        }
    }

    /// Store URL for an app id. The language segment only applies to the
    /// App Store.
    pub fn store_link(&self, app_id: &str, language: &str) -> String {
        match self {
            Platform::Ios => format!("https://itunes.apple.com/{language}/app/id{app_id}"),
            Platform::Android => {
                format!("http://play.google.com/store/apps/details?id={app_id}")
            }
            Platform::Windows => format!("http://www.windowsphone.com/s?appid={app_id}"),
        }
    }
}

/// Outcome of platform resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformSupport {
    Supported(Platform),
    /// iOS Safari 6+ shows the OS-native app banner; this one stands down.
    NativePrompt,
    Unsupported,
}

/// Resolve the banner platform from the configuration and the classified
/// user agent. A forced platform wins unconditionally; the native-banner
/// policy still applies on top of it.
pub fn resolve(config: &BannerConfig, agent: &AgentInfo) -> PlatformSupport {
    let platform = if let Some(forced) = config.force {
        Some(forced)
    } else {
        match agent.os_family {
            OsFamily::WindowsPhone => Some(Platform::Windows),
            OsFamily::Ios => Some(Platform::Ios),
            OsFamily::Android => Some(Platform::Android),
            OsFamily::Other => None,
        }
    };

    let Some(platform) = platform else {
        return PlatformSupport::Unsupported;
    };

    if platform == Platform::Ios
        && agent.browser == BrowserKind::MobileSafari
        && agent.os_major.is_some_and(|major| major >= 6)
        && !config.force_on_ios
    {
        return PlatformSupport::NativePrompt;
    }

    PlatformSupport::Supported(platform)
}
