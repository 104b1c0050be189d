//! Revision stamps for change tracking.
//!
//! Binders and card registries take a fresh stamp when created, loaded, or
//! changed. Stamps are unique within the process, so two values holding
//! the same stamp are guaranteed to hold the same data.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Allocate a stamp no earlier call has returned. Never 0.
#[must_use]
pub fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamps_are_unique() {
        let a = next_revision();
        let b = next_revision();
        assert_ne!(a, 0);
        assert!(b > a);
    }
}
