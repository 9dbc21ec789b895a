//! Boards shared by the unit tests of the board, path and report modules.

use super::{Board, Settlement, SettlementId, SettlementKind};
use SettlementKind::{City, Finish, Start, Village};

fn build(settlements: &[(&str, SettlementKind)], roads: &[(SettlementId, SettlementId)]) -> Board {
    let settlements = settlements
        .iter()
        .map(|&(name, kind)| Settlement::new(name, kind))
        .collect();
    Board::new(settlements, roads).expect("fixture board must be valid")
}

/// Start and finish joined by a road listed in both directions.
pub fn min_board() -> Board {
    build(&[("Pallet", Start), ("Viridian", Finish)], &[(0, 1), (1, 0)])
}

/// start, A(V), B(C), C(V), D(V), end.
pub fn simple_board() -> Board {
    build(
        &[
            ("start", Start),
            ("A", Village),
            ("B", City),
            ("C", Village),
            ("D", Village),
            ("end", Finish),
        ],
        &[(0, 1), (1, 2), (1, 5), (2, 3), (2, 4), (2, 5), (4, 5)],
    )
}

/// start -> v1 -> ... -> v`villages` -> finish, nothing else.
pub fn chain_board(villages: usize) -> Board {
    let mut settlements = vec![Settlement::new("InPort", Start)];
    settlements.extend((1..=villages).map(|i| Settlement::new(format!("v{}", i), Village)));
    settlements.push(Settlement::new("OutPort", Finish));
    let roads: Vec<(SettlementId, SettlementId)> = (0..=villages).map(|i| (i, i + 1)).collect();
    Board::new(settlements, &roads).expect("fixture board must be valid")
}

/// Every pair of the five settlements is connected.
pub fn complete_board() -> Board {
    build(
        &[
            ("InPort", Start),
            ("Pallet", Village),
            ("Viridian", Village),
            ("Pewter", Village),
            ("OutPort", Finish),
        ],
        &[
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 3),
            (2, 4),
            (3, 4),
        ],
    )
}

const X_ROADS: [(SettlementId, SettlementId); 8] =
    [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (3, 5), (4, 6), (5, 6)];

/// Two villages on each side of a central village, crossing like an X.
pub fn x_board() -> Board {
    build(
        &[
            ("InPort", Start),
            ("Pallet", Village),
            ("Viridian", Village),
            ("Pewter", Village),
            ("Cerulean", Village),
            ("Vermilion", Village),
            ("OutPort", Finish),
        ],
        &X_ROADS,
    )
}

/// The X board with a city in the middle.
pub fn x_city_board() -> Board {
    build(
        &[
            ("InPort", Start),
            ("Pallet", Village),
            ("Viridian", Village),
            ("Pewter", City),
            ("Cerulean", Village),
            ("Vermilion", Village),
            ("OutPort", Finish),
        ],
        &X_ROADS,
    )
}

/// A city hub that links the start, the finish and `villages` dead-end villages.
pub fn hub_board(villages: usize) -> Board {
    let mut settlements = vec![Settlement::new("InPort", Start), Settlement::new("Hub", City)];
    settlements.extend((1..=villages).map(|i| Settlement::new(format!("v{}", i), Village)));
    settlements.push(Settlement::new("OutPort", Finish));
    let roads: Vec<(SettlementId, SettlementId)> = (2..settlements.len())
        .map(|spoke| (1, spoke))
        .chain([(0, 1)])
        .collect();
    Board::new(settlements, &roads).expect("fixture board must be valid")
}

/// A board whose finish cannot be reached.
pub fn isolated_board() -> Board {
    build(
        &[("InPort", Start), ("Pallet", Village), ("OutPort", Finish)],
        &[(0, 1)],
    )
}

pub fn all_boards() -> Vec<Board> {
    vec![
        min_board(),
        simple_board(),
        chain_board(6),
        complete_board(),
        x_board(),
        x_city_board(),
        hub_board(3),
        isolated_board(),
    ]
}

/// Builds a board of at most seven settlements from quickcheck input:
/// settlement 0 is the start, the last one the finish, the ones in between are
/// cities where `cities` says so. Self-loops and city-city roads are dropped.
pub fn arbitrary_board(cities: &[bool], roads: &[(u8, u8)]) -> Board {
    let inner = cities.len().min(5);
    let size = inner + 2;
    let mut settlements = vec![Settlement::new("start", Start)];
    settlements.extend(cities[..inner].iter().enumerate().map(|(i, &city)| {
        Settlement::new(format!("s{}", i + 1), if city { City } else { Village })
    }));
    settlements.push(Settlement::new("finish", Finish));

    let is_city = |id: usize| id > 0 && id <= inner && cities[id - 1];
    let roads: Vec<(SettlementId, SettlementId)> = roads
        .iter()
        .map(|&(a, b)| (a as usize % size, b as usize % size))
        .filter(|&(a, b)| a != b && !(is_city(a) && is_city(b)))
        .collect();
    Board::new(settlements, &roads).expect("generated board must be valid")
}
