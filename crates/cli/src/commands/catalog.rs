//! Catalog listing commands.

use std::path::Path;

use super::CliError;
use super::session::open_manager;

#[allow(clippy::print_stdout)]
pub fn videos(state_dir: &Path) -> Result<(), CliError> {
    let manager = open_manager(state_dir)?;

    println!("free videos:");
    for video in afroman_catalog::free_videos() {
        let duration = video.duration.as_deref().unwrap_or("-");
        println!("  [{}] {} ({duration})", video.id, video.title);
    }

    println!("premium videos:");
    if afroman_catalog::premium_videos().is_empty() {
        println!("  (none yet)");
    }
    for video in afroman_catalog::premium_videos() {
        let access = if manager.can_watch(video) {
            "watchable"
        } else {
            "locked - subscribe to watch"
        };
        println!("  [{}] {} ({access})", video.id, video.title);
    }

    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn merch() {
    for item in afroman_catalog::merchandise() {
        println!("[{}] {} - {}", item.id, item.name, item.price.display());
        println!("    sizes: {}", item.sizes.join(" "));
    }
}
