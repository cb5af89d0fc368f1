//! Smart Banner Controller
//!
//! Ties the services together for one banner instance: capture the page
//! environment, run the entry gate, resolve platform/app id/icon, build the
//! view and route the two gestures (close -> dismissed suppression,
//! install -> installed suppression + launch attempt).

use std::cell::RefCell;
use std::rc::Rc;

use crate::components::banner_view::{BannerContent, BannerView};
use crate::services::config::BannerConfig;
use crate::services::errors::BannerResult;
use crate::services::gate::{first_blocker, GateBlocker, GateInputs};
use crate::services::launch::{AppLauncher, BrowserEnv};
use crate::services::metadata::{resolve_app_id, resolve_icon, DocumentMetadata};
use crate::services::platform::{self, PlatformSupport};
use crate::services::suppression::{SuppressionStore, DISMISSED_KEY, INSTALLED_KEY};
use crate::utils::page_env::PageEnvironment;
use crate::{console_debug, console_info};

type BrowserSuppressionStore = SuppressionStore<
    crate::services::suppression::LocalRecordStore,
    crate::services::suppression::SystemClock,
>;

/// Handle to a mounted banner. Dropping the last handle tears the banner
/// down: the element leaves the DOM and any in-flight launch attempt is
/// abandoned.
#[derive(Clone)]
pub struct SmartBanner {
    inner: Rc<BannerInner>,
}

struct BannerInner {
    config: BannerConfig,
    store_link: String,
    launcher: AppLauncher<BrowserEnv>,
    suppression: BrowserSuppressionStore,
    view: RefCell<Option<BannerView>>,
}

impl SmartBanner {
    /// Mount the banner if the entry gate allows it. Every expected
    /// suppression outcome (unsupported platform, native banner, missing
    /// app id, standalone mode, active suppression record) is `Ok(None)`;
    /// only page defects and DOM failures are errors.
    pub fn mount(config: BannerConfig) -> BannerResult<Option<SmartBanner>> {
        let environment = PageEnvironment::capture();
        let suppression = SuppressionStore::browser(config.debug);

        let platform = match platform::resolve(&config, &environment.agent) {
            PlatformSupport::Supported(platform) => platform,
            outcome => {
                console_debug!("[SmartBanner] Not showing: platform {:?}", outcome);
                return Ok(None);
            }
        };

        // Cheap checks before touching page metadata; the meta tag is only
        // parsed when the banner could actually show.
        let inputs = GateInputs {
            platform_supported: true,
            app_id_present: true,
            standalone: environment.standalone,
            dismissed: suppression.is_active(DISMISSED_KEY),
            installed: suppression.is_active(INSTALLED_KEY),
        };
        if let Some(blocker) = first_blocker(&inputs) {
            console_debug!("[SmartBanner] Not showing: {:?}", blocker);
            return Ok(None);
        }

        let metadata = DocumentMetadata::new()?;
        let Some(app_id) = resolve_app_id(platform, &config, &metadata)? else {
            console_debug!("[SmartBanner] Not showing: {:?}", GateBlocker::MissingAppId);
            return Ok(None);
        };

        let language = config
            .app_store_language
            .clone()
            .unwrap_or_else(|| environment.store_language.clone());
        let store_link = platform.store_link(&app_id, &language);
        let icon = resolve_icon(platform, &config, &metadata);
        let theme = config.theme.unwrap_or(platform);
        let in_store = format!(
            "{} - {}",
            config.price_text.for_platform(platform),
            config.store_text.for_platform(platform)
        );

        let inner = Rc::new(BannerInner {
            store_link,
            launcher: AppLauncher::new(Rc::new(BrowserEnv)),
            suppression,
            view: RefCell::new(None),
            config,
        });

        let content = BannerContent {
            theme: theme.key(),
            icon: icon.as_deref(),
            title: &inner.config.title,
            author: &inner.config.author,
            in_store: &in_store,
            button: &inner.config.button,
        };

        // Gestures hold weak references; the returned handle is the only
        // thing keeping the banner alive.
        let install_target = Rc::downgrade(&inner);
        let close_target = Rc::downgrade(&inner);
        let view = BannerView::create(
            &content,
            inner.config.position,
            Box::new(move || {
                if let Some(inner) = install_target.upgrade() {
                    inner.install();
                }
            }),
            Box::new(move || {
                if let Some(inner) = close_target.upgrade() {
                    inner.close();
                }
            }),
        )?;
        *inner.view.borrow_mut() = Some(view);

        console_info!(
            "[SmartBanner] Showing {:?} banner for app {}",
            platform,
            app_id
        );
        Ok(Some(SmartBanner { inner }))
    }

    pub fn show(&self) {
        if let Some(view) = &*self.inner.view.borrow() {
            view.show();
        }
    }

    pub fn hide(&self) {
        self.inner.hide();
    }
}

impl BannerInner {
    fn hide(&self) {
        if let Some(view) = &*self.view.borrow() {
            view.hide();
        }
    }

    fn close(&self) {
        self.hide();
        self.suppression
            .suppress(DISMISSED_KEY, self.config.days_hidden);
    }

    /// The installed record is written at gesture time, not on the attempt
    /// outcome; there is no way to verify the user actually installs.
    fn install(&self) {
        self.hide();
        self.suppression
            .suppress(INSTALLED_KEY, self.config.days_reminder);
        let deep_link = self.config.native_app_link();
        self.launcher.attempt(deep_link.as_deref(), &self.store_link);
    }
}

impl Drop for BannerInner {
    fn drop(&mut self) {
        self.launcher.abandon();
    }
}
