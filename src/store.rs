use fixedbitset::FixedBitSet;

/// Indices are reduced from a `u32`, so no index reaches this bound whatever
/// the configured index space.
pub const INDEX_SPACE_LIMIT: u64 = 1 << 32;

/// Active positions of a filter's index space.
#[derive(Clone)]
pub(crate) struct MembershipStore {
    bits: FixedBitSet,
}

impl MembershipStore {
    pub fn new(max_items: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(reachable_len(max_items)),
        }
    }

    pub fn activate(&mut self, index: usize) {
        debug_assert!(index < self.bits.len(), "index out of bounds");
        self.bits.insert(index);
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.bits.contains(index)
    }

    pub fn count_active(&self) -> usize {
        self.bits.count_ones(..)
    }

    pub fn fill_ratio(&self) -> f64 {
        if self.bits.is_empty() {
            return 0.;
        }
        self.count_active() as f64 / self.bits.len() as f64
    }
}

/// Number of positions an index space of `max_items` can actually reach.
pub(crate) fn reachable_len(max_items: usize) -> usize {
    (max_items as u64).min(INDEX_SPACE_LIMIT) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let store = MembershipStore::new(16);

        assert_eq!(store.bits.len(), 16);
        assert_eq!(store.count_active(), 0);
        assert!((0..16).all(|i| !store.is_active(i)));
    }

    #[test]
    fn test_activate_idempotent() {
        let mut store = MembershipStore::new(16);

        store.activate(3);
        store.activate(3);
        store.activate(15);

        assert!(store.is_active(3));
        assert!(store.is_active(15));
        assert!(!store.is_active(4));
        assert_eq!(store.count_active(), 2);
        assert_eq!(store.fill_ratio(), 0.125);
    }

    #[test]
    fn test_out_of_range_is_inactive() {
        let store = MembershipStore::new(4);
        assert!(!store.is_active(100));
    }

    #[test]
    fn test_reachable_len() {
        assert_eq!(reachable_len(500), 500);
        assert_eq!(reachable_len(u32::MAX as usize), u32::MAX as usize);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(reachable_len(usize::MAX), 1 << 32);
    }

    #[test]
    fn test_fill_ratio_zero_size() {
        assert_eq!(MembershipStore::new(0).fill_ratio(), 0.);
    }
}
