use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Dense index of a settlement on its board, assigned at insertion time.
pub type SettlementId = usize;

/// The kind of settlement sitting at a vertex. Fixed for the settlement's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettlementKind {
    Start,
    Finish,
    Village,
    City,
}

impl SettlementKind {
    /// Decodes the short code used in board files (`SP`, `FP`, `V`, `C`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SP" => Some(Self::Start),
            "FP" => Some(Self::Finish),
            "V" => Some(Self::Village),
            "C" => Some(Self::City),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Start => "SP",
            Self::Finish => "FP",
            Self::Village => "V",
            Self::City => "C",
        }
    }
}

/// Per-settlement search state.
///
/// `Available` settlements may be entered by the growing path, `Visited` ones
/// are already on it, and `Exhausted` marks a village re-entered with the passport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visitation {
    #[default]
    Available,
    Visited,
    Exhausted,
}

/// A vertex of the board.
#[derive(Clone, Debug)]
pub struct Settlement {
    id: SettlementId,
    name: String,
    kind: SettlementKind,
    state: Cell<Visitation>,
}

impl Settlement {
    /// Creates a settlement that still has to be inserted into a `Board`,
    /// which assigns its identity.
    pub fn new(name: impl Into<String>, kind: SettlementKind) -> Self {
        Self {
            id: 0,
            name: name.into(),
            kind,
            state: Cell::new(Visitation::Available),
        }
    }

    pub fn id(&self) -> SettlementId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SettlementKind {
        self.kind
    }

    pub fn state(&self) -> Visitation {
        self.state.get()
    }

    pub fn is_start(&self) -> bool {
        self.kind == SettlementKind::Start
    }

    pub fn is_finish(&self) -> bool {
        self.kind == SettlementKind::Finish
    }

    pub fn is_village(&self) -> bool {
        self.kind == SettlementKind::Village
    }

    pub fn is_city(&self) -> bool {
        self.kind == SettlementKind::City
    }

    pub(crate) fn assign_id(&mut self, id: SettlementId) {
        self.id = id;
        self.state.set(Visitation::Available);
    }

    pub(crate) fn set_state(&self, state: Visitation) {
        self.state.set(state);
    }
}

// Identity is unique and stable once the board assigned it.
impl PartialEq for Settlement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Settlement {}

impl Hash for Settlement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_round_trip_through_board_file_codes() {
        for kind in [
            SettlementKind::Start,
            SettlementKind::Finish,
            SettlementKind::Village,
            SettlementKind::City,
        ] {
            assert_eq!(SettlementKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(SettlementKind::from_code("P"), None);
        assert_eq!(SettlementKind::from_code("v"), None);
    }

    #[test]
    fn equality_only_looks_at_identity() {
        let mut pallet = Settlement::new("Pallet", SettlementKind::Village);
        let mut pewter = Settlement::new("Pewter", SettlementKind::City);
        pallet.assign_id(3);
        pewter.assign_id(3);
        assert_eq!(pallet, pewter);

        pewter.assign_id(4);
        assert_ne!(pallet, pewter);
    }

    #[test]
    fn new_settlement_starts_available() {
        let village = Settlement::new("Viridian", SettlementKind::Village);
        assert_eq!(village.state(), Visitation::Available);
        village.set_state(Visitation::Exhausted);
        assert_eq!(village.state(), Visitation::Exhausted);
        assert_eq!(village.to_string(), "Viridian");
    }
}
