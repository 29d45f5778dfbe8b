use std::sync::atomic::{AtomicBool, Ordering};

use snafu::ensure;

use crate::Result;
use crate::error::AlreadyMountedSnafu;

/// Guard used by [`crate::App::mount`] and [`crate::initialize`].
pub static PROCESS_GUARD: MountGuard = MountGuard::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    Unmounted,
    Mounted,
}

/// One-shot latch allowing a single application instance to be mounted.
#[derive(Debug, Default)]
pub struct MountGuard {
    mounted: AtomicBool,
}

impl MountGuard {
    pub const fn new() -> Self {
        Self {
            mounted: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> MountState {
        if self.is_mounted() {
            MountState::Mounted
        } else {
            MountState::Unmounted
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Moves the guard to `Mounted`. Fails if it already was.
    pub fn claim(&self) -> Result<()> {
        let claimed = self
            .mounted
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();

        ensure!(claimed, AlreadyMountedSnafu);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_new_guard_is_unmounted() {
        let guard = MountGuard::new();
        assert_eq!(guard.state(), MountState::Unmounted);
        assert!(!guard.is_mounted());
    }

    #[test]
    fn test_claim_once() {
        let guard = MountGuard::new();
        assert!(guard.claim().is_ok());
        assert_eq!(guard.state(), MountState::Mounted);

        let second = guard.claim();
        assert!(matches!(second, Err(Error::AlreadyMounted)));
        assert_eq!(guard.state(), MountState::Mounted);
    }

    #[test]
    fn test_claim_from_many_threads() {
        let guard = MountGuard::new();
        let wins = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(|| guard.claim().is_ok())).collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|won| *won)
                .count()
        });
        assert_eq!(wins, 1);
    }
}
