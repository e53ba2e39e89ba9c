//! Command-line interface definitions and parsing
//!
//! The binary takes a single photo folder and drops into an interactive
//! review session; there are no subcommands. A global `--quiet` flag
//! suppresses informational chrome for scripting-adjacent use.

use clap::Parser;
use std::path::PathBuf;

/// Interactive photo rating, tagging, and grouped export
#[derive(Parser, Debug)]
#[command(name = "phototag", version, about)]
pub struct Cli {
    /// Folder of photos to review (jpg, jpeg, png, gif, tif)
    pub folder: PathBuf,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_folder_and_quiet() {
        let cli = Cli::parse_from(["phototag", "/photos", "--quiet"]);
        assert_eq!(cli.folder, PathBuf::from("/photos"));
        assert!(cli.quiet);

        let cli = Cli::parse_from(["phototag", "/photos"]);
        assert!(!cli.quiet);
    }
}
