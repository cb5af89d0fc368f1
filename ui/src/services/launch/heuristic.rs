//! Launch Attempt State Machine
//!
//! A launch attempt navigates to the deep link, then waits for one of two
//! outcomes: the document goes hidden (the OS handed the user to the app)
//! or a bounded timer fires while the page is still visible (nothing
//! happened, go to the store). "Attempt in flight" is a state variant, not
//! a nullable timer field, so the idempotency guard is a type-level fact.
//!
//! The timeout double-checks elapsed wall time before redirecting: if the
//! callback was delayed past the ambiguity bound, a still-visible page is no
//! longer proof that the deep link failed (the app may have opened slowly
//! and already returned), so the attempt stays put rather than yanking the
//! user to the store.

use std::cell::RefCell;
use std::rc::Rc;

use super::env::LaunchEnv;

/// Visibility poll interval while an attempt is in flight.
pub const HEARTBEAT_INTERVAL_MS: u32 = 200;
/// Delay before a still-visible page falls back to the store.
pub const STORE_REDIRECT_DELAY_MS: u32 = 1000;
/// Elapsed time beyond which a still-visible page no longer proves failure.
pub const HANDOFF_AMBIGUITY_MS: f64 = 1500.0;

/// Externally observable phase of the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    Idle,
    Attempting,
    /// The OS handed the user off to the native app.
    HandedOff,
    /// The attempt fell back to the store.
    Redirected,
}

enum LaunchState<H> {
    Idle,
    Attempting {
        started_at_ms: f64,
        heartbeat: H,
        store_timer: H,
    },
    HandedOff,
    Redirected,
}

/// Drives at most one launch attempt at a time against a [`LaunchEnv`].
pub struct AppLauncher<E: LaunchEnv> {
    env: Rc<E>,
    state: Rc<RefCell<LaunchState<E::TimerHandle>>>,
}

impl<E: LaunchEnv> Clone for AppLauncher<E> {
    fn clone(&self) -> Self {
        Self {
            env: Rc::clone(&self.env),
            state: Rc::clone(&self.state),
        }
    }
}

impl<E> AppLauncher<E>
where
    E: LaunchEnv + 'static,
    E::TimerHandle: 'static,
{
    pub fn new(env: Rc<E>) -> Self {
        Self {
            env,
            state: Rc::new(RefCell::new(LaunchState::Idle)),
        }
    }

    pub fn phase(&self) -> LaunchPhase {
        match &*self.state.borrow() {
            LaunchState::Idle => LaunchPhase::Idle,
            LaunchState::Attempting { .. } => LaunchPhase::Attempting,
            LaunchState::HandedOff => LaunchPhase::HandedOff,
            LaunchState::Redirected => LaunchPhase::Redirected,
        }
    }

    /// Start a launch attempt. A second call while one is in flight is a
    /// no-op; a fresh attempt may start again once the previous one reached
    /// a terminal state.
    pub fn attempt(&self, deep_link: Option<&str>, store_link: &str) {
        if matches!(&*self.state.borrow(), LaunchState::Attempting { .. }) {
            return;
        }

        let Some(deep_link) = deep_link.filter(|link| !link.is_empty()) else {
            // No deep link configured: the store is the only destination,
            // nothing to race.
            *self.state.borrow_mut() = LaunchState::Redirected;
            self.env.navigate_to(store_link);
            return;
        };

        self.env.navigate_to(deep_link);
        let started_at_ms = self.env.now_ms();

        let heartbeat = {
            let env = Rc::clone(&self.env);
            let state = Rc::clone(&self.state);
            self.env.set_interval(
                HEARTBEAT_INTERVAL_MS,
                Box::new(move || {
                    // First observation of a hidden document: the OS took
                    // over, the store is never visited.
                    if env.is_document_hidden() {
                        settle(&*env, &state, LaunchState::HandedOff);
                    }
                }),
            )
        };

        let store_timer = {
            let env = Rc::clone(&self.env);
            let state = Rc::clone(&self.state);
            let store_link = store_link.to_owned();
            self.env.set_timeout(
                STORE_REDIRECT_DELAY_MS,
                Box::new(move || {
                    let elapsed_ms = env.now_ms() - started_at_ms;
                    if !env.is_document_hidden() && elapsed_ms < HANDOFF_AMBIGUITY_MS {
                        settle(&*env, &state, LaunchState::Redirected);
                        env.navigate_to(&store_link);
                    }
                    // Hidden, or past the ambiguity bound: leave the outcome
                    // to the heartbeat.
                }),
            )
        };

        *self.state.borrow_mut() = LaunchState::Attempting {
            started_at_ms,
            heartbeat,
            store_timer,
        };
    }

    /// Drop any in-flight attempt without recording an outcome, cancelling
    /// all scheduled work. Used when the banner is torn down.
    pub fn abandon(&self) {
        settle(&*self.env, &self.state, LaunchState::Idle);
    }
}

/// Replace the current state, cancelling both timers when an attempt was in
/// flight. Entering a terminal state must leave no scheduled work behind.
fn settle<E: LaunchEnv>(
    env: &E,
    state: &RefCell<LaunchState<E::TimerHandle>>,
    next: LaunchState<E::TimerHandle>,
) {
    let previous = std::mem::replace(&mut *state.borrow_mut(), next);
    if let LaunchState::Attempting {
        heartbeat,
        store_timer,
        ..
    } = previous
    {
        env.clear_timer(heartbeat);
        env.clear_timer(store_timer);
    }
}
