// board.rs
// ──────────────────────────────────────────────────────────────────────────────
// The game board: a fixed list of settlements plus an undirected road
// relation between them.  Boards are small and dense, so roads live in a
// lower-triangular bit matrix indexed by (greater id, smaller id).  Topology
// is frozen after construction; only the per-settlement visitation state
// changes, and only while a search is running.
// ──────────────────────────────────────────────────────────────────────────────
use super::error::BoardError;
use super::settlement::{Settlement, SettlementId, Visitation};

/// Number of slots needed for the strict lower triangle of a `size x size` matrix.
fn triangle_len(size: usize) -> usize {
    size * size.saturating_sub(1) / 2
}

/// Slot of the road between `a` and `b`. Requires `a != b`.
fn road_slot(a: SettlementId, b: SettlementId) -> usize {
    let (high, low) = if a > b { (a, b) } else { (b, a) };
    high * (high - 1) / 2 + low
}

/// Finds the start and finish ports, rejecting boards without exactly one of each.
fn locate_ports(settlements: &[Settlement]) -> Result<(SettlementId, SettlementId), BoardError> {
    let mut start = None;
    let mut finish = None;
    for (id, settlement) in settlements.iter().enumerate() {
        if settlement.is_start() {
            if start.is_some() {
                return Err(BoardError::DuplicateStart(id));
            }
            start = Some(id);
        } else if settlement.is_finish() {
            if finish.is_some() {
                return Err(BoardError::DuplicateFinish(id));
            }
            finish = Some(id);
        }
    }
    let start = start.ok_or(BoardError::MissingStart)?;
    let finish = finish.ok_or(BoardError::MissingFinish)?;
    Ok((start, finish))
}

/// Represents a game-ready board.
#[derive(Clone, Debug)]
pub struct Board {
    settlements: Vec<Settlement>,
    start: SettlementId,
    finish: SettlementId,
    roads: Vec<bool>,
}

impl Board {
    /// Builds a board from `settlements` (identities follow their order) and
    /// the roads between them.
    ///
    /// # Errors
    /// Returns a `BoardError` when the board lacks a unique start or finish
    /// port, a road is a self-loop or names an unknown settlement, or two
    /// cities end up connected.
    pub fn new(
        mut settlements: Vec<Settlement>,
        roads: &[(SettlementId, SettlementId)],
    ) -> Result<Self, BoardError> {
        let (start, finish) = locate_ports(&settlements)?;
        for (id, settlement) in settlements.iter_mut().enumerate() {
            settlement.assign_id(id);
        }

        let size = settlements.len();
        let mut board = Self {
            settlements,
            start,
            finish,
            roads: vec![false; triangle_len(size)],
        };
        for &(a, b) in roads {
            board.insert_road(a, b)?;
        }

        // Ensure no cities are adjacent.
        if let Some((first, second)) = board.all_roads().find(|(a, b)| a.is_city() && b.is_city()) {
            return Err(BoardError::AdjacentCities {
                first: first.name().to_string(),
                second: second.name().to_string(),
            });
        }
        Ok(board)
    }

    /// Returns the number of settlements on the board.
    pub fn len(&self) -> usize {
        self.settlements.len()
    }

    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    pub fn settlement(&self, id: SettlementId) -> Option<&Settlement> {
        self.settlements.get(id)
    }

    pub fn start(&self) -> &Settlement {
        &self.settlements[self.start]
    }

    pub fn finish(&self) -> &Settlement {
        &self.settlements[self.finish]
    }

    /// Returns whether a road connects `a` and `b`.
    ///
    /// # Panics
    /// Panics if either identity is outside the board.
    pub fn are_adjacent(&self, a: SettlementId, b: SettlementId) -> bool {
        self.check_id(a);
        self.check_id(b);
        a != b && self.roads[road_slot(a, b)]
    }

    /// Adds a road between two settlements already on the board.
    ///
    /// # Errors
    /// Rejects self-loops, unknown identities and roads joining two cities.
    pub fn add_road(&mut self, a: SettlementId, b: SettlementId) -> Result<(), BoardError> {
        self.insert_road(a, b)?;
        let (first, second) = (&self.settlements[a], &self.settlements[b]);
        if first.is_city() && second.is_city() {
            let err = BoardError::AdjacentCities {
                first: first.name().to_string(),
                second: second.name().to_string(),
            };
            self.roads[road_slot(a, b)] = false;
            return Err(err);
        }
        Ok(())
    }

    fn insert_road(&mut self, a: SettlementId, b: SettlementId) -> Result<(), BoardError> {
        let size = self.len();
        for id in [a, b] {
            if id >= size {
                return Err(BoardError::UnknownSettlement { id, size });
            }
        }
        if a == b {
            return Err(BoardError::SelfLoop(a));
        }
        self.roads[road_slot(a, b)] = true;
        Ok(())
    }

    /// All settlements adjacent to `id`, in ascending identity order.
    ///
    /// # Panics
    /// Panics if `id` is outside the board.
    pub fn neighbors(&self, id: SettlementId) -> impl Iterator<Item = &Settlement> + '_ {
        self.check_id(id);
        self.settlements
            .iter()
            .filter(move |other| other.id() != id && self.roads[road_slot(id, other.id())])
    }

    /// Neighbors that may still be entered by the growing path. The start port
    /// is never re-entered.
    pub fn available_neighbors(&self, id: SettlementId) -> impl Iterator<Item = &Settlement> + '_ {
        self.neighbors(id)
            .filter(|s| s.state() == Visitation::Available && !s.is_start())
    }

    /// Neighbors that are villages already on the current path; candidates
    /// for a passport re-entry.
    pub fn visited_village_neighbors(
        &self,
        id: SettlementId,
    ) -> impl Iterator<Item = &Settlement> + '_ {
        self.neighbors(id)
            .filter(|s| s.state() == Visitation::Visited && s.is_village())
    }

    /// Every road exactly once, as `(greater id, smaller id)` pairs in storage order.
    pub fn all_roads(&self) -> impl Iterator<Item = (&Settlement, &Settlement)> + '_ {
        (1..self.len()).flat_map(move |high| {
            (0..high)
                .filter(move |&low| self.roads[road_slot(high, low)])
                .map(move |low| (&self.settlements[high], &self.settlements[low]))
        })
    }

    pub fn road_count(&self) -> usize {
        self.roads.iter().filter(|&&road| road).count()
    }

    /// Returns true when no settlement carries search state, i.e. no search is in flight.
    pub fn is_at_rest(&self) -> bool {
        self.settlements
            .iter()
            .all(|s| s.state() == Visitation::Available)
    }

    fn check_id(&self, id: SettlementId) {
        assert!(
            id < self.len(),
            "settlement {} is not on this board ({} settlements)",
            id,
            self.len()
        );
    }
}
