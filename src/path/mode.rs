use std::fmt;

use super::error::PathError;
use crate::board::{Settlement, Visitation};

/// The three rule sets governing when a settlement may be entered again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalMode {
    /// Mode 1: no settlement of any kind is entered twice on a path.
    PlainNoRevisit,
    /// Mode 2: villages are entered at most once, cities freely.
    VillageNoRevisit,
    /// Mode 3: like mode 2, plus one passport re-entry into a visited village per path.
    VillageWithPassport,
}

impl TraversalMode {
    pub const ALL: [TraversalMode; 3] = [
        TraversalMode::PlainNoRevisit,
        TraversalMode::VillageNoRevisit,
        TraversalMode::VillageWithPassport,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::PlainNoRevisit => 1,
            Self::VillageNoRevisit => 2,
            Self::VillageWithPassport => 3,
        }
    }

    pub fn allows_passport(self) -> bool {
        self == Self::VillageWithPassport
    }

    /// State `settlement` takes when the path enters it under this mode.
    pub(crate) fn entry_state(self, settlement: &Settlement) -> Visitation {
        let current = settlement.state();
        match self {
            Self::PlainNoRevisit => Visitation::Visited,
            // Cities never change state outside mode 1.
            _ if !settlement.is_village() => current,
            Self::VillageNoRevisit => match current {
                Visitation::Available => Visitation::Visited,
                other => other,
            },
            Self::VillageWithPassport => match current {
                Visitation::Available => Visitation::Visited,
                Visitation::Visited | Visitation::Exhausted => Visitation::Exhausted,
            },
        }
    }
}

impl TryFrom<u8> for TraversalMode {
    type Error = PathError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Self::PlainNoRevisit),
            2 => Ok(Self::VillageNoRevisit),
            3 => Ok(Self::VillageWithPassport),
            other => Err(PathError::UnknownMode(other)),
        }
    }
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mode {}", self.number())
    }
}
