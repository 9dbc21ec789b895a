// printer module
mod printer;

pub use printer::{format_route, write_mode_report};
