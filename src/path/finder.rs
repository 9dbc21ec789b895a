use super::mode::TraversalMode;
use super::visit::VisitGuard;
use crate::board::{Board, Settlement};

/// One start-to-finish route, start and finish included.
pub type Route<'a> = Vec<&'a Settlement>;

/// Whether the one-shot passport is still held on the current path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Passport {
    Held,
    Spent,
}

/// Accumulators for a single search invocation.
struct Walk<'a> {
    found: u64,
    trail: Option<Route<'a>>,
    routes: Vec<Route<'a>>,
}

impl<'a> Walk<'a> {
    fn counting() -> Self {
        Self {
            found: 0,
            trail: None,
            routes: Vec::new(),
        }
    }

    fn recording() -> Self {
        Self {
            trail: Some(Vec::new()),
            ..Self::counting()
        }
    }

    fn push(&mut self, settlement: &'a Settlement) {
        if let Some(trail) = self.trail.as_mut() {
            trail.push(settlement);
        }
    }

    fn pop(&mut self) {
        if let Some(trail) = self.trail.as_mut() {
            trail.pop();
        }
    }

    /// The trail has just reached the finish port.
    fn complete(&mut self) {
        self.found += 1;
        if let Some(trail) = &self.trail {
            self.routes.push(trail.clone());
        }
    }
}

/// `PathFinder` counts, and optionally lists, every route from the start port
/// to the finish port of a board under one traversal mode.
///
/// The search marks settlements on the board while it runs and restores them
/// before returning, so a board can serve any number of sequential searches.
/// Only one search may run on a board at a time; `Board` is not `Sync`.
///
/// The search is exhaustive and exponential in the board size.
pub struct PathFinder<'a> {
    board: &'a Board,
    mode: TraversalMode,
}

impl<'a> PathFinder<'a> {
    pub fn new(board: &'a Board, mode: TraversalMode) -> Self {
        Self { board, mode }
    }

    pub fn mode(&self) -> TraversalMode {
        self.mode
    }

    /// Returns the number of routes from the start port to the finish port.
    pub fn count_paths(&self) -> u64 {
        let mut walk = Walk::counting();
        self.search(&mut walk);
        walk.found
    }

    /// Returns the number of routes together with the routes themselves, in
    /// the order the depth-first search discovers them.
    pub fn enumerate_paths(&self) -> (u64, Vec<Route<'a>>) {
        let mut walk = Walk::recording();
        self.search(&mut walk);
        (walk.found, walk.routes)
    }

    fn search(&self, walk: &mut Walk<'a>) {
        let board: &'a Board = self.board;
        self.walk_along(board.start(), Passport::Held, walk);
        debug_assert!(board.is_at_rest(), "search left settlements marked");
    }

    /// Recursively follows every allowable road out of `settlement`, counting
    /// each arrival at the finish port.
    fn walk_along(&self, settlement: &'a Settlement, passport: Passport, walk: &mut Walk<'a>) {
        let board: &'a Board = self.board;
        walk.push(settlement);

        // We've reached the finish port. This route is complete.
        if settlement.is_finish() {
            walk.complete();
            walk.pop();
            return;
        }

        let _visit = VisitGuard::enter(settlement, self.mode);

        let onward: Vec<&'a Settlement> = board.available_neighbors(settlement.id()).collect();
        for next in onward {
            self.walk_along(next, passport, walk);
        }

        if self.mode.allows_passport() && passport == Passport::Held {
            let revisits: Vec<&'a Settlement> =
                board.visited_village_neighbors(settlement.id()).collect();
            for village in revisits {
                self.walk_along(village, Passport::Spent, walk);
            }
        }

        walk.pop();
    }
}
