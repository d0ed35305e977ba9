//! Session and subscription commands.
//!
//! Each command opens the persisted session state, rehydrates the
//! entitlement manager, performs one operation, and reports the result.
//! Admin login is in-memory only by design, so `login` here only proves
//! the credentials work; it cannot carry over to the next invocation.

use std::path::Path;

use afroman_session::{EntitlementConfig, EntitlementManager, FileStore, Session};

use super::CliError;

const SESSION_FILE: &str = "session.json";

pub fn open_manager(state_dir: &Path) -> Result<EntitlementManager<FileStore>, CliError> {
    let store = FileStore::open(state_dir.join(SESSION_FILE))?;
    Ok(EntitlementManager::with_rehydration(
        EntitlementConfig::builtin(),
        store,
    ))
}

fn flag(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[allow(clippy::print_stdout)]
fn print_session(session: Session) {
    println!("subscribed:       {}", flag(session.is_subscribed));
    println!("payment pending:  {}", flag(session.payment_pending));
    println!("guest mode:       {}", flag(session.is_guest));
    println!("admin (this run): {}", flag(session.is_admin_logged_in));
}

pub fn status(state_dir: &Path) -> Result<(), CliError> {
    let manager = open_manager(state_dir)?;
    print_session(manager.session());
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn login(state_dir: &Path, username: &str, password: &str) -> Result<(), CliError> {
    let mut manager = open_manager(state_dir)?;
    if !manager.login(username, password) {
        return Err(CliError::InvalidCredentials);
    }
    println!("admin login ok (admin status lasts for this process only)");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn logout(state_dir: &Path) -> Result<(), CliError> {
    let mut manager = open_manager(state_dir)?;
    manager.logout();
    println!("logged out; subscription and pending markers cleared");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn guest(state_dir: &Path, enabled: bool) -> Result<(), CliError> {
    let mut manager = open_manager(state_dir)?;
    manager.set_guest_mode(enabled);
    println!("guest mode: {}", flag(enabled));
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn subscribe(state_dir: &Path) -> Result<(), CliError> {
    let mut manager = open_manager(state_dir)?;

    if manager.session().is_subscribed {
        println!("already subscribed - nothing to do");
        return Ok(());
    }

    let price = manager.config().subscription_price().display();
    let url = manager.begin_checkout().to_owned();
    println!("subscription: {price} one-time payment");
    println!("complete checkout in your browser:");
    println!("  {url}");
    println!();
    println!("afterwards, enter the code you received:");
    println!("  afroman verify <CODE>");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn verify(state_dir: &Path, code: &str) -> Result<(), CliError> {
    let mut manager = open_manager(state_dir)?;
    if !manager.verify_payment(code) {
        return Err(CliError::InvalidCode);
    }
    println!("payment verified - subscription active");
    Ok(())
}
