//! Status announcement capability.
//!
//! The frontend surfaces fetch-cycle outcomes to assistive tech; on the
//! service side the same notifications go through this trait so callers never
//! have to check whether anyone is listening.

use tracing::info;

/// Receives short human-readable status messages about page-level events.
pub trait Announcer: Send + Sync {
    fn announce(&self, message: &str);
}

/// Discards announcements. Used where no listener is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnnouncer;

impl Announcer for NoopAnnouncer {
    fn announce(&self, _message: &str) {}
}

/// Forwards announcements to the log, which is where the server-side
/// equivalent of a screen-reader live region ends up.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&self, message: &str) {
        info!(target: "shoresquad::announce", "{message}");
    }
}
