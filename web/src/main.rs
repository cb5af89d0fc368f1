use dioxus::prelude::*;
use ui::components::host::BannerHost;
use ui::services::config::BannerConfig;
use ui::services::platform::Platform;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    // Forced platform + debug so the banner shows on desktop browsers and
    // never persists suppression while trying it out.
    let config = BannerConfig {
        title: "Example App".to_owned(),
        author: "Example Inc.".to_owned(),
        force: Some(Platform::Android),
        play_app_id: Some("com.example.app".to_owned()),
        fallback_link: Some("example://open".to_owned()),
        debug: true,
        ..BannerConfig::default()
    };

    rsx! {
        div {
            h1 { "Smart app banner demo" }
            p { "The banner overlays this page when the entry gate passes." }
            p { "Close it or tap OPEN to exercise the launch heuristic." }
            BannerHost { config }
        }
    }
}
