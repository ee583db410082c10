//! Cooperative interrupt flags
//!
//! The Ctrl-C handler runs on its own thread and can only communicate with
//! the synchronous session loop through these flags. While a child process
//! is active the handler must not exit the process: the child shares the
//! foreground process group and receives its own SIGINT, so the blocking
//! wait in the launcher returns and the menu controller shuts down through
//! the normal exit-summary path.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static CHILD_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Mark that the user requested an interrupt
pub fn request() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// True once an interrupt has been requested
pub fn requested() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Reset the interrupt flag (used by tests)
pub fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}

/// Record whether the launcher is currently waiting on a child process
pub fn set_child_active(active: bool) {
    CHILD_ACTIVE.store(active, Ordering::SeqCst);
}

/// True while the launcher is blocked on a child process
pub fn child_active() -> bool {
    CHILD_ACTIVE.load(Ordering::SeqCst)
}
