// error module
mod error;
// finder module
mod finder;
// mode module
mod mode;
// visit module
mod visit;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the path module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::PathError;
pub use finder::{PathFinder, Route};
pub use mode::TraversalMode;
