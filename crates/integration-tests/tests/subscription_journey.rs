//! End-to-end subscription journey over file-backed storage.
//!
//! Each "launch" builds a fresh `EntitlementManager` over the same state
//! file, the way the app rehydrates its session on startup.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use afroman_core::VideoId;
use afroman_session::{EntitlementConfig, EntitlementManager, FileStore};

fn launch(state_dir: &Path) -> EntitlementManager<FileStore> {
    let store = FileStore::open(state_dir.join("session.json")).unwrap();
    EntitlementManager::with_rehydration(EntitlementConfig::builtin(), store)
}

#[test]
fn guest_to_subscriber_journey_survives_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let premium = afroman_core::Video {
        id: VideoId::new("p1"),
        title: "Exclusive Session".to_owned(),
        description: String::new(),
        thumbnail_url: String::new(),
        video_url: String::new(),
        is_free: false,
        duration: None,
    };

    // Launch 1: browse as guest, start checkout, fail a code.
    {
        let mut app = launch(dir.path());
        app.set_guest_mode(true);
        assert!(!app.can_watch(&premium));

        let url = app.begin_checkout().to_owned();
        assert!(url.starts_with("https://buy.stripe.com/"));
        assert!(app.session().payment_pending);

        assert!(!app.verify_payment("not-a-code"));
        assert!(app.session().payment_pending);
        assert!(!app.session().is_subscribed);
    }

    // Launch 2: pending marker survived; guest mode did not (in-memory only).
    {
        let mut app = launch(dir.path());
        let session = app.session();
        assert!(session.payment_pending);
        assert!(!session.is_guest);
        assert!(!session.is_subscribed);

        assert!(app.verify_payment(" premium2025 "));
        let session = app.session();
        assert!(session.is_subscribed);
        assert!(!session.payment_pending);
        assert!(app.can_watch(&premium));
    }

    // Launch 3: subscription survived; admin never does.
    {
        let mut app = launch(dir.path());
        assert!(app.session().is_subscribed);
        assert!(!app.session().is_admin_logged_in);

        // Every free catalog video is watchable regardless.
        for video in afroman_catalog::free_videos() {
            assert!(app.can_watch(video));
        }

        app.logout();
    }

    // Launch 4: logout wiped the persisted markers.
    {
        let app = launch(dir.path());
        let session = app.session();
        assert!(!session.is_subscribed);
        assert!(!session.payment_pending);
    }
}

#[test]
fn admin_login_coexists_with_subscription() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = launch(dir.path());

    assert!(!app.login("admin", "wrong"));
    assert!(app.login("admin", "afroman2025"));
    assert!(app.verify_payment("AFROMAN2025"));
    app.set_guest_mode(true);

    // No mutual exclusion between the flags.
    let session = app.session();
    assert!(session.is_admin_logged_in);
    assert!(session.is_subscribed);
    assert!(session.is_guest);
}
