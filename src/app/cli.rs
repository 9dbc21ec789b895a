use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Counts the routes from the start port to the finish port of a settlement board.", long_about = None)]
pub struct Cli {
    /// Board description file to search
    pub board_file: PathBuf,

    /// Print every route found, not only the totals.
    #[clap(short, long)]
    pub print_paths: bool,

    /// Only run the given traversal mode (1, 2 or 3). All three run when omitted.
    #[clap(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub mode: Option<u8>,

    /// Write the report to this file instead of stdout.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Destination of the verbose log.
    #[clap(long, default_value = "routes.log")]
    pub log_file: PathBuf,

    /// Suppress verbose logging, only printing the report or errors.
    #[clap(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["routes", "boards/simple.txt"]).unwrap();
        assert_eq!(cli.board_file, PathBuf::from("boards/simple.txt"));
        assert!(!cli.print_paths);
        assert!(!cli.quiet);
        assert_eq!(cli.mode, None);
        assert_eq!(cli.output, None);
        assert_eq!(cli.log_file, PathBuf::from("routes.log"));
    }

    #[test]
    fn flags_and_mode() {
        let cli = Cli::try_parse_from(["routes", "-p", "-q", "-m", "3", "board.txt"]).unwrap();
        assert!(cli.print_paths);
        assert!(cli.quiet);
        assert_eq!(cli.mode, Some(3));
    }

    #[test]
    fn mode_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["routes", "--mode", "4", "board.txt"]).is_err());
        assert!(Cli::try_parse_from(["routes", "--mode", "0", "board.txt"]).is_err());
    }
}
