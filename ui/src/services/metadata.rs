//! Page Metadata Access
//!
//! App id and icon resolution from page-level annotations. The document is
//! consumed through the [`PageMetadata`] trait so resolution logic tests
//! against a fake page; [`DocumentMetadata`] queries the live DOM.

use web_sys::Document;

use crate::services::config::BannerConfig;
use crate::services::errors::{BannerError, BannerResult};
use crate::services::platform::Platform;

/// Read-only view of the page-level key/value annotations the banner uses.
pub trait PageMetadata {
    /// Content of the single `<meta name=...>` tag, when present.
    fn meta_content(&self, name: &str) -> Option<String>;
    /// Href of the single `<link rel=...>` tag, when present.
    fn link_href(&self, rel: &str) -> Option<String>;
}

/// Live-document implementation of [`PageMetadata`].
pub struct DocumentMetadata {
    document: Document,
}

impl DocumentMetadata {
    pub fn new() -> BannerResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| BannerError::DocumentUnavailable {
                context: "metadata lookup".to_owned(),
            })?;
        Ok(Self { document })
    }
}

impl PageMetadata for DocumentMetadata {
    fn meta_content(&self, name: &str) -> Option<String> {
        self.document
            .query_selector(&format!("meta[name=\"{name}\"]"))
            .ok()
            .flatten()
            .and_then(|element| element.get_attribute("content"))
    }

    fn link_href(&self, rel: &str) -> Option<String> {
        self.document
            .query_selector(&format!("link[rel=\"{rel}\"]"))
            .ok()
            .flatten()
            .and_then(|element| element.get_attribute("href"))
    }
}

/// Resolve the target app id: explicit configuration wins, then the
/// platform's meta tag. `Ok(None)` means no id anywhere, which suppresses
/// the banner entirely; a present-but-malformed meta tag is a hard error.
pub fn resolve_app_id<M: PageMetadata>(
    platform: Platform,
    config: &BannerConfig,
    metadata: &M,
) -> BannerResult<Option<String>> {
    if let Some(id) = config.app_id_override(platform) {
        return Ok(Some(id.to_owned()));
    }
    let Some(content) = metadata.meta_content(platform.app_meta()) else {
        return Ok(None);
    };
    match platform {
        // The whole attribute value is the id.
        Platform::Windows => Ok(Some(content)),
        // The id sits in an `app-id=` field of a comma/space delimited list.
        Platform::Ios | Platform::Android => parse_app_id_field(platform, &content).map(Some),
    }
}

fn parse_app_id_field(platform: Platform, content: &str) -> BannerResult<String> {
    content
        .split(|c: char| c.is_whitespace() || c == ',')
        .find_map(|field| field.strip_prefix("app-id="))
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| BannerError::MalformedAppMeta {
            meta: platform.app_meta().to_owned(),
            content: content.to_owned(),
        })
}

/// Resolve the banner icon: explicit configuration wins, then the first
/// matching icon rel in the platform's preference order.
pub fn resolve_icon<M: PageMetadata>(
    platform: Platform,
    config: &BannerConfig,
    metadata: &M,
) -> Option<String> {
    if let Some(icon) = config.icon.as_ref().filter(|icon| !icon.is_empty()) {
        return Some(icon.clone());
    }
    platform
        .icon_rels()
        .iter()
        .find_map(|rel| metadata.link_href(rel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakePage {
        metas: HashMap<&'static str, &'static str>,
        links: HashMap<&'static str, &'static str>,
    }

    impl PageMetadata for FakePage {
        fn meta_content(&self, name: &str) -> Option<String> {
            self.metas.get(name).map(|content| (*content).to_owned())
        }

        fn link_href(&self, rel: &str) -> Option<String> {
            self.links.get(rel).map(|href| (*href).to_owned())
        }
    }

    #[test]
    fn explicit_config_id_wins_over_meta() {
        let config = BannerConfig {
            itunes_app_id: Some("1234".to_owned()),
            ..BannerConfig::default()
        };
        let page = FakePage {
            metas: HashMap::from([("apple-itunes-app", "app-id=999")]),
            ..FakePage::default()
        };
        let id = resolve_app_id(Platform::Ios, &config, &page).unwrap();
        assert_eq!(id.as_deref(), Some("1234"));
    }

    #[test]
    fn ios_id_is_extracted_from_the_app_id_field() {
        let page = FakePage {
            metas: HashMap::from([(
                "apple-itunes-app",
                "app-id=337064413, app-argument=example://open",
            )]),
            ..FakePage::default()
        };
        let id = resolve_app_id(Platform::Ios, &BannerConfig::default(), &page).unwrap();
        assert_eq!(id.as_deref(), Some("337064413"));
    }

    #[test]
    fn android_id_parses_without_trailing_fields() {
        let page = FakePage {
            metas: HashMap::from([("google-play-app", "app-id=com.example.app")]),
            ..FakePage::default()
        };
        let id = resolve_app_id(Platform::Android, &BannerConfig::default(), &page).unwrap();
        assert_eq!(id.as_deref(), Some("com.example.app"));
    }

    #[test]
    fn windows_takes_the_whole_attribute_value() {
        let page = FakePage {
            metas: HashMap::from([("msApplication-ID", "9WZDNCRFJ3TJ")]),
            ..FakePage::default()
        };
        let id = resolve_app_id(Platform::Windows, &BannerConfig::default(), &page).unwrap();
        assert_eq!(id.as_deref(), Some("9WZDNCRFJ3TJ"));
    }

    #[test]
    fn absent_meta_yields_no_id() {
        let page = FakePage::default();
        let id = resolve_app_id(Platform::Ios, &BannerConfig::default(), &page).unwrap();
        assert_eq!(id, None);
    }

    #[test]
    fn present_meta_without_app_id_field_is_a_hard_error() {
        let page = FakePage {
            metas: HashMap::from([("apple-itunes-app", "app-argument=example://open")]),
            ..FakePage::default()
        };
        let err = resolve_app_id(Platform::Ios, &BannerConfig::default(), &page).unwrap_err();
        assert!(matches!(err, BannerError::MalformedAppMeta { .. }));
    }

    #[test]
    fn empty_app_id_value_is_a_hard_error() {
        let page = FakePage {
            metas: HashMap::from([("apple-itunes-app", "app-id=, app-argument=x")]),
            ..FakePage::default()
        };
        let err = resolve_app_id(Platform::Ios, &BannerConfig::default(), &page).unwrap_err();
        assert!(matches!(err, BannerError::MalformedAppMeta { .. }));
    }

    #[test]
    fn icon_override_wins_over_page_rels() {
        let config = BannerConfig {
            icon: Some("/custom-icon.png".to_owned()),
            ..BannerConfig::default()
        };
        let page = FakePage {
            links: HashMap::from([("apple-touch-icon", "/touch-icon.png")]),
            ..FakePage::default()
        };
        assert_eq!(
            resolve_icon(Platform::Ios, &config, &page).as_deref(),
            Some("/custom-icon.png")
        );
    }

    #[test]
    fn icon_discovery_follows_the_platform_preference_order() {
        let page = FakePage {
            links: HashMap::from([
                ("apple-touch-icon", "/touch-icon.png"),
                ("android-touch-icon", "/android-icon.png"),
            ]),
            ..FakePage::default()
        };
        let config = BannerConfig::default();
        assert_eq!(
            resolve_icon(Platform::Android, &config, &page).as_deref(),
            Some("/android-icon.png")
        );
        assert_eq!(
            resolve_icon(Platform::Ios, &config, &page).as_deref(),
            Some("/touch-icon.png")
        );
        assert_eq!(resolve_icon(Platform::Windows, &config, &page).as_deref(), Some("/touch-icon.png"));
    }
}
