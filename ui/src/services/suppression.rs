//! Banner Suppression Records
//!
//! Durable, time-bounded markers that keep the banner away once a user has
//! dismissed it or is assumed to have installed the app. Each record carries
//! its own absolute expiry and is checked lazily on read; nothing sweeps
//! expired records. Records live in LocalStorage in the browser, behind the
//! [`RecordStore`] trait so TTL logic tests against an in-memory map.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::console_warn;

/// Record key written when the user closes the banner.
pub const DISMISSED_KEY: &str = "smartbanner-closed";
/// Record key written when the user taps install.
pub const INSTALLED_KEY: &str = "smartbanner-installed";

const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Source of the current time in milliseconds since the epoch.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

/// A stored suppression marker with its absolute expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuppressionRecord {
    pub expires_at_ms: f64,
}

/// Key/value persistence for suppression records.
pub trait RecordStore {
    fn read(&self, key: &str) -> Option<SuppressionRecord>;
    fn write(&self, key: &str, record: &SuppressionRecord);
}

/// LocalStorage-backed record store. Write failures (quota, private mode)
/// are logged and swallowed; suppression is best effort.
pub struct LocalRecordStore;

impl RecordStore for LocalRecordStore {
    fn read(&self, key: &str) -> Option<SuppressionRecord> {
        LocalStorage::get(key).ok()
    }

    fn write(&self, key: &str, record: &SuppressionRecord) {
        if let Err(err) = LocalStorage::set(key, record) {
            console_warn!("[Suppression] Failed to persist {}: {:?}", key, err);
        }
    }
}

pub struct SuppressionStore<S, C> {
    store: S,
    clock: C,
    debug: bool,
}

impl SuppressionStore<LocalRecordStore, SystemClock> {
    pub fn browser(debug: bool) -> Self {
        Self::new(LocalRecordStore, SystemClock, debug)
    }
}

impl<S: RecordStore, C: Clock> SuppressionStore<S, C> {
    pub fn new(store: S, clock: C, debug: bool) -> Self {
        Self {
            store,
            clock,
            debug,
        }
    }

    /// True iff a record exists for `key` and has not expired yet.
    pub fn is_active(&self, key: &str) -> bool {
        self.store
            .read(key)
            .is_some_and(|record| record.expires_at_ms > self.clock.now_ms())
    }

    /// Write a record expiring `ttl_days` from now. Debug sessions never
    /// persist suppression, regardless of which path triggers the write.
    pub fn suppress(&self, key: &str, ttl_days: u32) {
        if self.debug {
            return;
        }
        let expires_at_ms = self.clock.now_ms() + f64::from(ttl_days) * MS_PER_DAY;
        self.store.write(key, &SuppressionRecord { expires_at_ms });
    }
}
