//! Banner Configuration
//!
//! The full configuration surface of the banner, resolved once before
//! anything runs and never mutated afterwards. Every field has a default so
//! host pages only override what they need.

use std::fmt;
use std::rc::Rc;

use crate::services::platform::Platform;

/// Host-supplied producer for the deep link used by a launch attempt.
pub type DeepLinkProducer = Rc<dyn Fn() -> Option<String>>;

/// Where the banner element is inserted relative to the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPosition {
    /// Overlay at the end of the body.
    #[default]
    Append,
    /// In-flow before the page content.
    Prepend,
}

/// One label per supported platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformLabels {
    pub ios: String,
    pub android: String,
    pub windows: String,
}

impl PlatformLabels {
    pub fn uniform(label: &str) -> Self {
        Self {
            ios: label.to_owned(),
            android: label.to_owned(),
            windows: label.to_owned(),
        }
    }

    pub fn for_platform(&self, platform: Platform) -> &str {
        match platform {
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
            Platform::Windows => &self.windows,
        }
    }
}

/// Banner configuration. Construct with struct update syntax over
/// [`BannerConfig::default`].
#[derive(Clone)]
pub struct BannerConfig {
    /// Days the banner stays hidden after the user closes it.
    pub days_hidden: u32,
    /// Days the banner stays hidden after the user taps install.
    pub days_reminder: u32,
    /// Language code for the App Store link; detected from the browser
    /// locale when unset.
    pub app_store_language: Option<String>,
    /// App name shown on the banner.
    pub title: String,
    /// Author line shown under the title.
    pub author: String,
    /// Text for the install button.
    pub button: String,
    /// Per-platform store name labels.
    pub store_text: PlatformLabels,
    /// Per-platform price labels.
    pub price_text: PlatformLabels,
    /// Force a single visual theme instead of the resolved platform's.
    pub theme: Option<Platform>,
    /// Full path to an icon image, overriding page link rels.
    pub icon: Option<String>,
    /// Force a platform for emulation/testing.
    pub force: Option<Platform>,
    pub itunes_app_id: Option<String>,
    pub play_app_id: Option<String>,
    pub ms_app_id: Option<String>,
    pub position: InsertPosition,
    /// Deep link used when no producer is configured or it yields nothing.
    pub fallback_link: Option<String>,
    /// Producer for the deep link opened by a launch attempt.
    pub link: Option<DeepLinkProducer>,
    /// Show the banner on iOS Safari even though the OS has its own banner.
    pub force_on_ios: bool,
    /// Debug sessions never persist suppression records.
    pub debug: bool,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            days_hidden: 15,
            days_reminder: 90,
            app_store_language: None,
            title: String::new(),
            author: String::new(),
            button: "OPEN".to_owned(),
            store_text: PlatformLabels {
                ios: "On the App Store".to_owned(),
                android: "In Google Play".to_owned(),
                windows: "In the Windows Store".to_owned(),
            },
            price_text: PlatformLabels::uniform("FREE"),
            theme: None,
            icon: None,
            force: None,
            itunes_app_id: None,
            play_app_id: None,
            ms_app_id: None,
            position: InsertPosition::Append,
            fallback_link: None,
            link: None,
            force_on_ios: false,
            debug: false,
        }
    }
}

impl BannerConfig {
    /// Explicit app id for a platform, when configured and non-empty.
    pub fn app_id_override(&self, platform: Platform) -> Option<&str> {
        let id = match platform {
            Platform::Ios => &self.itunes_app_id,
            Platform::Android => &self.play_app_id,
            Platform::Windows => &self.ms_app_id,
        };
        id.as_deref().filter(|id| !id.is_empty())
    }

    /// Deep link for a launch attempt: producer result first, then the
    /// fallback link. Empty strings count as absent.
    pub fn native_app_link(&self) -> Option<String> {
        self.link
            .as_ref()
            .and_then(|producer| producer())
            .filter(|link| !link.is_empty())
            .or_else(|| self.fallback_link.clone().filter(|link| !link.is_empty()))
    }
}

impl PartialEq for BannerConfig {
    fn eq(&self, other: &Self) -> bool {
        let link_eq = match (&self.link, &other.link) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        link_eq
            && self.days_hidden == other.days_hidden
            && self.days_reminder == other.days_reminder
            && self.app_store_language == other.app_store_language
            && self.title == other.title
            && self.author == other.author
            && self.button == other.button
            && self.store_text == other.store_text
            && self.price_text == other.price_text
            && self.theme == other.theme
            && self.icon == other.icon
            && self.force == other.force
            && self.itunes_app_id == other.itunes_app_id
            && self.play_app_id == other.play_app_id
            && self.ms_app_id == other.ms_app_id
            && self.position == other.position
            && self.fallback_link == other.fallback_link
            && self.force_on_ios == other.force_on_ios
            && self.debug == other.debug
    }
}

impl fmt::Debug for BannerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BannerConfig")
            .field("days_hidden", &self.days_hidden)
            .field("days_reminder", &self.days_reminder)
            .field("app_store_language", &self.app_store_language)
            .field("title", &self.title)
            .field("author", &self.author)
            .field("button", &self.button)
            .field("theme", &self.theme)
            .field("icon", &self.icon)
            .field("force", &self.force)
            .field("itunes_app_id", &self.itunes_app_id)
            .field("play_app_id", &self.play_app_id)
            .field("ms_app_id", &self.ms_app_id)
            .field("position", &self.position)
            .field("fallback_link", &self.fallback_link)
            .field("link", &self.link.as_ref().map(|_| "<producer>"))
            .field("force_on_ios", &self.force_on_ios)
            .field("debug", &self.debug)
            .finish()
    }
}
