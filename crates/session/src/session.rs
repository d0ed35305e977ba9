//! Session flag snapshot and persisted key names.

use serde::{Deserialize, Serialize};

use afroman_core::Video;

/// The session's four access flags.
///
/// This is a plain snapshot: UI consumers read it (directly or via a
/// watcher) and render from it. Only [`crate::EntitlementManager`] mutates
/// session state.
///
/// Admin status is orthogonal to the other flags and a guest can
/// simultaneously be subscribed or admin; no mutual exclusion is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    /// Admin credentials were accepted this process lifetime. Never
    /// persisted; cleared on restart.
    pub is_admin_logged_in: bool,
    /// A valid verification code was accepted (this launch or a prior one).
    pub is_subscribed: bool,
    /// The user explicitly chose guest browsing. In-memory only.
    pub is_guest: bool,
    /// An external checkout was initiated and not yet confirmed by code.
    pub payment_pending: bool,
}

impl Session {
    /// Whether this session may watch the given video.
    ///
    /// Free content is always watchable; premium content requires an
    /// active subscription. Admin status alone does not grant access.
    #[must_use]
    pub const fn can_watch(&self, video: &Video) -> bool {
        video.is_free || self.is_subscribed
    }
}

/// Persisted key names and marker values.
///
/// Absence of a key means "false"/"inactive"; the markers are the only
/// values ever written.
pub mod keys {
    /// Key for the subscription-status marker.
    pub const SUBSCRIPTION: &str = "@afroman_subscription";

    /// Value stored under [`SUBSCRIPTION`] when the subscription is active.
    pub const SUBSCRIPTION_ACTIVE: &str = "active";

    /// Key for the payment-pending marker.
    pub const PAYMENT_PENDING: &str = "@afroman_payment_pending";

    /// Value stored under [`PAYMENT_PENDING`] while a checkout is pending.
    pub const PAYMENT_PENDING_TRUE: &str = "true";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use afroman_core::VideoId;

    use super::*;

    fn video(is_free: bool) -> Video {
        Video {
            id: VideoId::new("v"),
            title: String::new(),
            description: String::new(),
            thumbnail_url: String::new(),
            video_url: String::new(),
            is_free,
            duration: None,
        }
    }

    #[test]
    fn test_default_session_all_false() {
        let session = Session::default();
        assert!(!session.is_admin_logged_in);
        assert!(!session.is_subscribed);
        assert!(!session.is_guest);
        assert!(!session.payment_pending);
    }

    #[test]
    fn test_can_watch_free_always() {
        assert!(Session::default().can_watch(&video(true)));
    }

    #[test]
    fn test_can_watch_premium_requires_subscription() {
        let mut session = Session::default();
        assert!(!session.can_watch(&video(false)));

        session.is_subscribed = true;
        assert!(session.can_watch(&video(false)));
    }

    #[test]
    fn test_admin_does_not_grant_watch_access() {
        let session = Session {
            is_admin_logged_in: true,
            ..Session::default()
        };
        assert!(!session.can_watch(&video(false)));
    }
}
