//! Phototag CLI application entry point
//!
//! Points an interactive review session at a folder of photographs. The
//! session supports stepping through photos, rating them 1-5, attaching
//! and removing free-text tags, curating quick-apply criteria, and
//! exporting copies of all photos carrying a chosen tag.
//!
//! # Usage
//!
//! ```bash
//! # Review a folder of photos
//! phototag ~/Pictures/holiday
//!
//! # Quiet mode (suppress banner and notices)
//! phototag -q ~/Pictures/holiday
//! ```
//!
//! Ratings and tags are not persisted: every run rebuilds its state from
//! the folder contents.

use colored::Colorize;

use phototag::{PhototagError, cli::Cli, collection::Collection, session};

type Result<T> = std::result::Result<T, PhototagError>;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let mut collection = Collection::new();
    let imported = collection.import_dir(&cli.folder)?;
    if imported == 0 {
        // Readable folder, nothing matching the photo extensions
        println!(
            "{}",
            "No photo files (jpg/jpeg/png/gif/tif) found in the folder.".yellow()
        );
        return Ok(());
    }
    if !cli.quiet {
        println!("{}", format!("Imported {imported} photo(s).").green());
    }

    session::run(&mut collection, cli.quiet)
}
