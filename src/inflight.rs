//! Duplicate Write Suppression
//!
//! Tracks order ids with a status write in flight. A second command for
//! the same order is refused until the first resolves, so two writes
//! never interleave on one record.

use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
pub struct InFlightSet {
    ids: HashSet<String>,
}

impl InFlightSet {
    /// Claim an id. Returns false when a write for it is already running.
    pub fn begin(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Release an id once its request resolved, success or failure.
    pub fn finish(&mut self, id: &str) {
        self.ids.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_suppressed_until_finish() {
        let mut set = InFlightSet::default();
        assert!(set.begin("order-1"));
        assert!(!set.begin("order-1"));
        assert!(set.contains("order-1"));

        // a different order is unaffected
        assert!(set.begin("order-2"));

        set.finish("order-1");
        assert!(!set.contains("order-1"));
        assert!(set.begin("order-1"));
    }
}
