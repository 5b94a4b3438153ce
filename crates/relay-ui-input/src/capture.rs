//! Pointer capture with RAII release.
//!
//! During a drag, one component owns the pointer: every move and
//! release must reach it even when the pointer leaves its bounds.
//! [`CaptureRegistry`] grants that ownership as a [`PointerCapture`]
//! guard; dropping the guard releases capture, so acquisition and
//! release are symmetric on every exit path, including unwinding.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A token identifying a capture owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(u64);

impl OwnerId {
    /// Generates a new unique owner token.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks which component, if any, currently holds pointer capture.
///
/// Registries are cheap to clone; clones share the same capture slot,
/// so all lists routed from one input source should share one registry.
#[derive(Debug, Clone, Default)]
pub struct CaptureRegistry {
    slot: Arc<Mutex<Option<OwnerId>>>,
}

impl CaptureRegistry {
    /// Creates a new registry with no active capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to acquire capture for the given owner.
    ///
    /// Returns `None` if another owner already holds capture. Acquiring
    /// while already holding capture also returns `None`: a component
    /// must not hold two guards for one slot.
    #[must_use]
    pub fn acquire(&self, owner: OwnerId) -> Option<PointerCapture> {
        let mut slot = self.slot.lock();
        if slot.is_some() {
            return None;
        }
        *slot = Some(owner);
        Some(PointerCapture {
            slot: Arc::clone(&self.slot),
            owner,
        })
    }

    /// Returns the current capture owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<OwnerId> {
        *self.slot.lock()
    }

    /// Returns true if any owner currently holds capture.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Returns true if the given owner currently holds capture.
    #[must_use]
    pub fn is_captured_by(&self, owner: OwnerId) -> bool {
        *self.slot.lock() == Some(owner)
    }
}

/// An RAII guard representing held pointer capture.
///
/// While alive, the owning component should receive all pointer events
/// regardless of hit-testing. Dropping the guard releases capture.
#[derive(Debug)]
pub struct PointerCapture {
    slot: Arc<Mutex<Option<OwnerId>>>,
    owner: OwnerId,
}

impl PointerCapture {
    /// Returns the owner this guard was granted to.
    #[must_use]
    pub fn owner(&self) -> OwnerId {
        self.owner
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        let mut slot = self.slot.lock();
        if *slot == Some(self.owner) {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_release() {
        let registry = CaptureRegistry::new();
        let owner = OwnerId::new();
        assert!(!registry.is_captured());

        let guard = registry.acquire(owner).unwrap();
        assert!(registry.is_captured_by(owner));
        assert_eq!(registry.owner(), Some(owner));

        drop(guard);
        assert!(!registry.is_captured());
    }

    #[test]
    fn test_exclusive_capture() {
        let registry = CaptureRegistry::new();
        let first = OwnerId::new();
        let second = OwnerId::new();

        let guard = registry.acquire(first).unwrap();
        assert!(registry.acquire(second).is_none());
        assert!(registry.acquire(first).is_none());

        drop(guard);
        assert!(registry.acquire(second).is_some());
    }

    #[test]
    fn test_clones_share_slot() {
        let registry = CaptureRegistry::new();
        let clone = registry.clone();
        let owner = OwnerId::new();

        let _guard = registry.acquire(owner).unwrap();
        assert!(clone.is_captured_by(owner));
    }

    #[test]
    fn test_sequential_drags_do_not_leak() {
        let registry = CaptureRegistry::new();
        let owner = OwnerId::new();
        for _ in 0..10 {
            let guard = registry.acquire(owner).expect("capture leaked");
            drop(guard);
        }
        assert!(!registry.is_captured());
    }
}
