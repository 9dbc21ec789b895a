//! Counts and lists the routes between the start port and the finish port of
//! a small board of settlements, under three traversal rule sets.

pub mod app;
pub mod board;
pub mod board_loader;
pub mod path;
pub mod report;
