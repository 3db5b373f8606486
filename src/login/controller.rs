//! Owner of the observable login status.
//!
//! The status lives in a `tokio::sync::watch` channel: readers always see the
//! latest value, and new subscribers start from it. Every write goes through
//! [`LoginReducer`] while holding the attempts lock. The same lock covers
//! aborting and tracking attempt tasks, so submits, resolutions and resets are
//! totally ordered against each other.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

use crate::config::{AttemptPolicy, LoginConfig};
use crate::login::credentials::{Authenticator, Credentials, StaticAuthenticator};
use crate::login::error::LoginError;
use crate::ui::login::{LoginIntent, LoginReducer, LoginStatus};
use crate::ui::mvi::Reducer;

/// Runs simulated login attempts and publishes their progress.
///
/// Created once per screen session. Dropping it aborts any attempt that is
/// still waiting out its delay.
pub struct LoginStateController {
    shared: Arc<Shared>,
    config: LoginConfig,
}

struct Shared {
    status: watch::Sender<LoginStatus>,
    attempts: Mutex<Attempts>,
    authenticator: Arc<dyn Authenticator>,
}

#[derive(Default)]
struct Attempts {
    /// Bumped by every attempt and reset. Under `Supersede` an attempt only
    /// resolves if its epoch is still the latest.
    epoch: u64,
    pending: Vec<JoinHandle<()>>,
}

impl Attempts {
    fn abort_pending(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }

    fn track(&mut self, task: JoinHandle<()>) {
        self.pending.retain(|handle| !handle.is_finished());
        self.pending.push(task);
    }
}

impl Shared {
    /// Reduce and publish. Caller must hold the attempts lock.
    fn apply(&self, intent: LoginIntent) -> LoginStatus {
        self.status.send_if_modified(|status| {
            let next = LoginReducer::reduce(status.clone(), intent);
            if *status == next {
                return false;
            }
            *status = next;
            true
        });
        self.status.borrow().clone()
    }

    fn resolve(
        &self,
        attempt_epoch: u64,
        policy: AttemptPolicy,
        outcome: Result<(), LoginError>,
    ) -> Option<LoginStatus> {
        let attempts = self.attempts.lock();
        if policy == AttemptPolicy::Supersede && attempts.epoch != attempt_epoch {
            return None;
        }
        Some(self.apply(LoginIntent::Resolve { outcome }))
    }
}

impl LoginStateController {
    /// Controller backed by the hardcoded `username`/`password` pair.
    pub fn new(config: LoginConfig) -> Self {
        Self::with_authenticator(config, Arc::new(StaticAuthenticator::default()))
    }

    pub fn with_authenticator(config: LoginConfig, authenticator: Arc<dyn Authenticator>) -> Self {
        let (status, _) = watch::channel(LoginStatus::Empty);
        let shared = Arc::new(Shared {
            status,
            attempts: Mutex::new(Attempts::default()),
            authenticator,
        });

        {
            let _attempts = shared.attempts.lock();
            shared.apply(LoginIntent::Initialize);
        }
        tracing::debug!(
            delay_ms = config.delay_ms,
            policy = config.policy.as_str(),
            "Login controller initialized"
        );

        Self { shared, config }
    }

    /// Start a login attempt.
    ///
    /// The status is `Loading` by the time this returns. After the configured
    /// delay the credentials are checked and the status becomes `Success` or
    /// `Failure`, unless a newer attempt or a reset superseded this one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn attempt_login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> AttemptHandle {
        let credentials = Credentials::new(username, password);
        let id = Uuid::new_v4();
        let policy = self.config.policy;

        let (outcome_tx, outcome_rx) = oneshot::channel();
        let deadline = Instant::now() + self.config.delay();

        // Held until the new task is tracked: a concurrent reset or attempt
        // must not abort a task whose epoch is already the latest.
        let mut attempts = self.shared.attempts.lock();
        attempts.epoch += 1;
        let attempt_epoch = attempts.epoch;
        self.shared.apply(LoginIntent::Submit);
        if policy == AttemptPolicy::Supersede {
            attempts.abort_pending();
        }
        tracing::info!(
            attempt_id = %id,
            username = %credentials.username,
            policy = policy.as_str(),
            "Login attempt started"
        );

        let shared = Arc::clone(&self.shared);
        let task = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let outcome = shared.authenticator.verify(&credentials);
            match shared.resolve(attempt_epoch, policy, outcome) {
                Some(status) => {
                    tracing::info!(attempt_id = %id, status = status.label(), "Login attempt resolved");
                    let _ = outcome_tx.send(status);
                }
                None => {
                    tracing::debug!(attempt_id = %id, "Login attempt superseded");
                }
            }
        });
        attempts.track(task);
        drop(attempts);

        AttemptHandle {
            id,
            outcome: outcome_rx,
        }
    }

    /// Set the status to `Empty` immediately.
    pub fn reset_to_empty(&self) {
        self.reset();
    }

    /// Confirm the result dialog: clears back to `Empty` and returns the
    /// status that was on screen.
    pub fn acknowledge(&self) -> LoginStatus {
        self.reset()
    }

    pub fn current_status(&self) -> LoginStatus {
        self.shared.status.borrow().clone()
    }

    /// Subscribe to status changes, starting from the current value.
    pub fn subscribe(&self) -> StatusSubscription {
        StatusSubscription {
            rx: self.shared.status.subscribe(),
        }
    }

    pub fn config(&self) -> &LoginConfig {
        &self.config
    }

    fn reset(&self) -> LoginStatus {
        let previous = {
            let mut attempts = self.shared.attempts.lock();
            attempts.epoch += 1;
            let previous = self.shared.status.borrow().clone();
            self.shared.apply(LoginIntent::Reset);
            if self.config.policy == AttemptPolicy::Supersede {
                attempts.abort_pending();
            }
            previous
        };
        tracing::info!(previous = previous.label(), "Login state reset to empty");
        previous
    }

}

impl Drop for LoginStateController {
    fn drop(&mut self) {
        self.shared.attempts.lock().abort_pending();
    }
}

/// Handle to one login attempt.
#[derive(Debug)]
pub struct AttemptHandle {
    id: Uuid,
    outcome: oneshot::Receiver<LoginStatus>,
}

impl AttemptHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Wait for this attempt to resolve.
    ///
    /// Returns the status it published, or `None` if it was superseded,
    /// reset away, or the controller was dropped first.
    pub async fn outcome(self) -> Option<LoginStatus> {
        self.outcome.await.ok()
    }
}

/// A subscriber's view of the login status.
///
/// Changes are coalesced: a slow subscriber may miss intermediate values but
/// always observes the latest one.
#[derive(Debug, Clone)]
pub struct StatusSubscription {
    rx: watch::Receiver<LoginStatus>,
}

impl StatusSubscription {
    /// Latest status, available immediately.
    pub fn current(&self) -> LoginStatus {
        self.rx.borrow().clone()
    }

    /// Wait for the next change. `None` once the controller is gone.
    pub async fn changed(&mut self) -> Option<LoginStatus> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Wait until the status satisfies `predicate`, checking the current
    /// value first.
    pub async fn wait_for(
        &mut self,
        mut predicate: impl FnMut(&LoginStatus) -> bool,
    ) -> Option<LoginStatus> {
        let status = self.rx.wait_for(|status| predicate(status)).await.ok()?;
        Some(status.clone())
    }
}
