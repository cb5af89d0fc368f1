//! Dioxus Banner Host
//!
//! Thin component wrapper so Dioxus apps can mount the banner
//! declaratively. The banner attaches itself to the document body; the
//! component renders nothing and only owns the banner's lifetime.

use dioxus::prelude::*;

use crate::app::SmartBanner;
use crate::console_error;
use crate::services::config::BannerConfig;

#[derive(Props, PartialEq, Clone)]
pub struct BannerHostProps {
    pub config: BannerConfig,
}

#[component]
pub fn BannerHost(props: BannerHostProps) -> Element {
    // Holding the banner in a signal keeps its DOM element and gesture
    // listeners alive for the component's lifetime.
    let mut banner = use_signal(|| Option::<SmartBanner>::None);

    use_effect(move || {
        if banner.peek().is_some() {
            return;
        }
        match SmartBanner::mount(props.config.clone()) {
            Ok(Some(mounted)) => banner.set(Some(mounted)),
            Ok(None) => {}
            Err(err) => console_error!("[BannerHost] {}", err),
        }
    });

    rsx! {}
}
