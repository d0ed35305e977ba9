//! The entitlement state machine.

use tracing::{debug, info};

use afroman_core::{Video, VerificationCode};

use crate::config::EntitlementConfig;
use crate::session::{Session, keys};
use crate::storage::{BestEffort, KeyValueStore};

/// Callback invoked with the new snapshot after every flag change.
pub type SessionWatcher = Box<dyn FnMut(&Session) + Send>;

/// Owns the session flags and applies the transition rules between them.
///
/// All mutation goes through this type; UI consumers read snapshots via
/// [`EntitlementManager::session`] or subscribe with
/// [`EntitlementManager::watch`]. Operations are synchronous and atomic
/// relative to each other - a single logical actor drives them in response
/// to discrete user events.
///
/// Persistence is best-effort: storage failures are logged and never block
/// or roll back an in-memory transition.
pub struct EntitlementManager<S> {
    config: EntitlementConfig,
    store: BestEffort<S>,
    session: Session,
    watchers: Vec<SessionWatcher>,
}

impl<S: KeyValueStore> EntitlementManager<S> {
    /// Create a manager with fresh (all-false) session flags.
    #[must_use]
    pub fn new(config: EntitlementConfig, store: S) -> Self {
        Self {
            config,
            store: BestEffort::new(store),
            session: Session::default(),
            watchers: Vec::new(),
        }
    }

    /// Create a manager and immediately rehydrate persisted flags.
    ///
    /// This is the startup path: subscription and payment-pending markers
    /// written by a previous launch are restored into memory.
    #[must_use]
    pub fn with_rehydration(config: EntitlementConfig, store: S) -> Self {
        let mut manager = Self::new(config, store);
        manager.reload_subscription_status();
        manager
    }

    /// Current session snapshot.
    #[must_use]
    pub const fn session(&self) -> Session {
        self.session
    }

    /// The configuration this manager was built with.
    #[must_use]
    pub const fn config(&self) -> &EntitlementConfig {
        &self.config
    }

    /// Register a watcher invoked with the new snapshot after every flag
    /// change. Watchers are not called for no-op operations.
    pub fn watch(&mut self, watcher: impl FnMut(&Session) + Send + 'static) {
        self.watchers.push(Box::new(watcher));
    }

    /// Attempt an admin login.
    ///
    /// Succeeds iff both fields exactly match the configured credentials
    /// (case-sensitive, no trimming). Failure changes nothing; there is no
    /// lockout or rate limiting. Login does not touch the other flags.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if self.config.admin().matches(username, password) {
            self.update(|session| session.is_admin_logged_in = true);
            info!("admin logged in");
            true
        } else {
            debug!("login failed: invalid credentials");
            false
        }
    }

    /// Reset every flag and delete both persisted markers. Idempotent.
    pub fn logout(&mut self) {
        self.update(|session| *session = Session::default());
        self.store.delete(keys::SUBSCRIPTION);
        self.store.delete(keys::PAYMENT_PENDING);
        info!("logged out, subscription cleared");
    }

    /// Set or clear guest browsing. Independent of the other flags: a
    /// guest can simultaneously be subscribed or admin.
    pub fn set_guest_mode(&mut self, guest: bool) {
        self.update(|session| session.is_guest = guest);
        debug!(guest, "guest mode set");
    }

    /// Set or clear the payment-pending flag, mirroring it to storage
    /// (`true` writes the marker, `false` deletes it).
    pub fn set_payment_pending(&mut self, pending: bool) {
        self.update(|session| session.payment_pending = pending);
        if pending {
            self.store
                .set(keys::PAYMENT_PENDING, keys::PAYMENT_PENDING_TRUE);
            info!("payment marked as pending");
        } else {
            self.store.delete(keys::PAYMENT_PENDING);
            debug!("payment pending cleared");
        }
    }

    /// Start the external checkout flow: mark payment pending and hand the
    /// caller the opaque checkout URL to open.
    ///
    /// The app never observes the checkout outcome; the user returns and
    /// enters a verification code by hand.
    pub fn begin_checkout(&mut self) -> &str {
        self.set_payment_pending(true);
        self.config.checkout_url()
    }

    /// Verify a manually entered payment code.
    ///
    /// Input is trimmed and upper-cased, then checked against the
    /// allowlist. On a match the session becomes subscribed and pending is
    /// cleared, with both markers persisted best-effort. On a mismatch
    /// nothing changes. This is the only path to `is_subscribed`.
    pub fn verify_payment(&mut self, input: &str) -> bool {
        let Ok(code) = VerificationCode::parse(input) else {
            debug!("payment verification failed: empty code");
            return false;
        };

        if !self.config.is_valid_code(&code) {
            debug!("payment verification failed: invalid code");
            return false;
        }

        self.update(|session| {
            session.is_subscribed = true;
            session.payment_pending = false;
        });
        self.store
            .set(keys::SUBSCRIPTION, keys::SUBSCRIPTION_ACTIVE);
        self.store.delete(keys::PAYMENT_PENDING);
        info!("payment verified, subscription activated");
        true
    }

    /// Reconcile the subscription and pending flags with storage.
    ///
    /// Safe to call any number of times; the persisted markers win on each
    /// call (present sets the flag, absent clears it).
    pub fn reload_subscription_status(&mut self) {
        let subscribed = self
            .store
            .get(keys::SUBSCRIPTION)
            .is_some_and(|value| value == keys::SUBSCRIPTION_ACTIVE);
        let pending = self
            .store
            .get(keys::PAYMENT_PENDING)
            .is_some_and(|value| value == keys::PAYMENT_PENDING_TRUE);

        self.update(|session| {
            session.is_subscribed = subscribed;
            session.payment_pending = pending;
        });

        if subscribed {
            debug!("subscription status loaded: active");
        }
        if pending {
            debug!("payment pending status loaded");
        }
    }

    /// Whether the current session may watch `video`.
    ///
    /// `video.is_free || is_subscribed`; see [`Session::can_watch`].
    #[must_use]
    pub const fn can_watch(&self, video: &Video) -> bool {
        self.session.can_watch(video)
    }

    /// The external checkout URL from configuration.
    #[must_use]
    pub fn checkout_url(&self) -> &str {
        self.config.checkout_url()
    }

    /// Apply a mutation and notify watchers if any flag actually changed.
    fn update(&mut self, mutate: impl FnOnce(&mut Session)) {
        let before = self.session;
        mutate(&mut self.session);
        if self.session != before {
            for watcher in &mut self.watchers {
                watcher(&self.session);
            }
        }
    }
}
