use super::mode::TraversalMode;
use crate::board::{Settlement, Visitation};

/// Scoped ownership of a settlement's visitation state.
///
/// Creating the guard applies the mode's entry rule; dropping it puts back the
/// state the settlement had before, on every exit path including unwinding.
#[must_use = "the settlement is released as soon as the guard is dropped"]
pub(crate) struct VisitGuard<'a> {
    settlement: &'a Settlement,
    previous: Visitation,
}

impl<'a> VisitGuard<'a> {
    pub(crate) fn enter(settlement: &'a Settlement, mode: TraversalMode) -> Self {
        let previous = settlement.state();
        settlement.set_state(mode.entry_state(settlement));
        Self {
            settlement,
            previous,
        }
    }
}

impl Drop for VisitGuard<'_> {
    fn drop(&mut self) {
        self.settlement.set_state(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fixtures;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn nested_guards_unwind_in_order() {
        let board = fixtures::simple_board();
        let village = &board.settlements()[1];
        {
            let _first = VisitGuard::enter(village, TraversalMode::VillageWithPassport);
            assert_eq!(village.state(), Visitation::Visited);
            {
                let _second = VisitGuard::enter(village, TraversalMode::VillageWithPassport);
                assert_eq!(village.state(), Visitation::Exhausted);
            }
            assert_eq!(village.state(), Visitation::Visited);
        }
        assert!(board.is_at_rest());
    }

    #[test]
    fn state_is_restored_when_unwinding() {
        let board = fixtures::simple_board();
        let city = &board.settlements()[2];
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = VisitGuard::enter(city, TraversalMode::PlainNoRevisit);
            assert_eq!(city.state(), Visitation::Visited);
            panic!("search aborted");
        }));
        assert!(result.is_err());
        assert!(board.is_at_rest());
    }
}
