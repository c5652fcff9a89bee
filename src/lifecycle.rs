//! View Lifecycle
//!
//! Lets async tasks check whether the view that spawned them is still mounted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::on_cleanup;

#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that flips to unmounted when the current reactive owner is cleaned up
pub fn use_mount_guard() -> MountGuard {
    let guard = MountGuard::new();
    let on_unmount = guard.clone();
    on_cleanup(move || on_unmount.unmount());
    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn test_clones_share_mount_state() {
        let guard = MountGuard::new();
        let task_copy = guard.clone();
        assert!(task_copy.is_mounted());

        guard.unmount();
        assert!(!task_copy.is_mounted());
    }

    #[test]
    fn test_guard_unmounts_with_owner() {
        let owner = Owner::new();
        let guard = owner.with(use_mount_guard);
        assert!(guard.is_mounted());

        owner.cleanup();
        assert!(!guard.is_mounted());
    }
}
