use super::layout::RailRole;
use super::train::TrainId;
use std::collections::VecDeque;

/// FIFO reservation queues, one per rail.
///
/// The head of a queue is the rail's current holder; everything behind it is
/// a waiter, in request order. The ledger enforces nothing by itself: the
/// dispatcher is responsible for only releasing a queue it currently heads.
/// With all mutation happening in one per-frame pass that cooperative
/// discipline is enough for mutual exclusion on the trunk.
#[derive(Debug, Clone, Default)]
pub struct ReservationLedger {
    queues: [VecDeque<TrainId>; RailRole::COUNT],
}

impl ReservationLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `train` to the tail of the rail's queue. Never fails.
    pub fn reserve(&mut self, rail: RailRole, train: TrainId) {
        self.queues[rail.index()].push_back(train);
    }

    /// Removes and returns the head entry. Call only while the releasing
    /// train heads the queue.
    pub fn release_head(&mut self, rail: RailRole) -> Option<TrainId> {
        self.queues[rail.index()].pop_front()
    }

    #[must_use]
    pub fn is_free(&self, rail: RailRole) -> bool {
        self.queues[rail.index()].is_empty()
    }

    #[must_use]
    pub fn head_holder(&self, rail: RailRole) -> Option<TrainId> {
        self.queues[rail.index()].front().copied()
    }

    /// Whether `train` holds or waits anywhere in the rail's queue.
    #[must_use]
    pub fn holds(&self, rail: RailRole, train: TrainId) -> bool {
        self.queues[rail.index()].contains(&train)
    }

    /// The subset of `candidates` whose queues are empty, in candidate order.
    #[must_use]
    pub fn free_subset(&self, candidates: &[RailRole]) -> Vec<RailRole> {
        candidates
            .iter()
            .copied()
            .filter(|rail| self.is_free(*rail))
            .collect()
    }

    /// Queue contents for one rail, holder first.
    pub fn queue(&self, rail: RailRole) -> impl Iterator<Item = TrainId> + '_ {
        self.queues[rail.index()].iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_release_is_fifo() {
        let mut ledger = ReservationLedger::new();
        ledger.reserve(RailRole::Trunk, 1);
        ledger.reserve(RailRole::Trunk, 2);
        ledger.reserve(RailRole::Trunk, 3);

        assert_eq!(ledger.head_holder(RailRole::Trunk), Some(1));
        assert_eq!(ledger.release_head(RailRole::Trunk), Some(1));
        assert_eq!(ledger.head_holder(RailRole::Trunk), Some(2));
        assert_eq!(ledger.release_head(RailRole::Trunk), Some(2));
        assert_eq!(ledger.release_head(RailRole::Trunk), Some(3));
        assert_eq!(ledger.release_head(RailRole::Trunk), None);
    }

    #[test]
    fn free_means_empty_queue() {
        let mut ledger = ReservationLedger::new();
        assert!(ledger.is_free(RailRole::WestTop));
        ledger.reserve(RailRole::WestTop, 9);
        assert!(!ledger.is_free(RailRole::WestTop));
        assert!(ledger.holds(RailRole::WestTop, 9));
        assert!(!ledger.holds(RailRole::WestTop, 8));
    }

    #[test]
    fn free_subset_preserves_candidate_order() {
        let mut ledger = ReservationLedger::new();
        ledger.reserve(RailRole::WestMain, 1);
        let free = ledger.free_subset(&[
            RailRole::WestTop,
            RailRole::WestMain,
            RailRole::WestBottom,
        ]);
        assert_eq!(free, vec![RailRole::WestTop, RailRole::WestBottom]);
    }

    #[test]
    fn queues_are_independent_per_rail() {
        let mut ledger = ReservationLedger::new();
        ledger.reserve(RailRole::Trunk, 1);
        ledger.reserve(RailRole::EntryEast, 2);
        assert_eq!(ledger.release_head(RailRole::EntryEast), Some(2));
        assert_eq!(ledger.head_holder(RailRole::Trunk), Some(1));
    }
}
