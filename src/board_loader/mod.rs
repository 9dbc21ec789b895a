// error module
pub mod error;
// loader module
mod loader;

pub use error::LoadError;
pub use loader::{load_board_from_file, parse_board};
