//! Interactive review session
//!
//! The presentation layer over the collection engine: a line-oriented
//! command loop that re-renders from core state after every mutating call
//! rather than caching any of it. Saturated navigation and rejected
//! mutations come back as notices, never as errors.

use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use dialoguer::Confirm;

use crate::PhototagError;
use crate::collection::{Collection, normalize_tag};
use crate::export;
use crate::output;

type Result<T> = std::result::Result<T, PhototagError>;

enum Flow {
    Continue,
    Quit,
}

/// Run the review session until the user quits or input ends.
///
/// # Errors
/// Returns `PhototagError` if reading from stdin or writing the prompt
/// fails, or if a confirmation prompt cannot be shown. Export failures are
/// reported inline and do not end the session.
pub fn run(collection: &mut Collection, quiet: bool) -> Result<()> {
    if !quiet {
        println!("{}", "Type 'help' for the command list.".dimmed());
    }
    render_current(collection);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        match dispatch(collection, line.trim(), quiet)? {
            Flow::Continue => {}
            Flow::Quit => break,
        }
    }
    Ok(())
}

fn dispatch(collection: &mut Collection, line: &str, quiet: bool) -> Result<Flow> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(Flow::Continue);
    };
    let rest: Vec<&str> = parts.collect();

    match command {
        "next" | "n" => {
            if collection.advance() {
                render_current(collection);
            } else {
                notice("This is the last photo.", quiet);
            }
        }
        "prev" | "p" => {
            if collection.retreat() {
                render_current(collection);
            } else {
                notice("This is the first photo.", quiet);
            }
        }
        "rate" | "r" => handle_rate(collection, &rest, quiet),
        "crit" => handle_add_criteria(collection, &rest, quiet),
        "uncrit" => handle_delete_criteria(collection, &rest, quiet)?,
        "apply" | "a" => handle_apply(collection, &rest, quiet),
        "untag" | "u" => handle_untag(collection, &rest, quiet),
        "tags" => handle_tags(collection, quiet),
        "export" | "e" => handle_export(collection, &rest),
        "show" | "s" => render_current(collection),
        "help" | "h" | "?" => print_help(),
        "quit" | "q" | "exit" => return Ok(Flow::Quit),
        other => println!("Unknown command '{other}'. Type 'help' for the command list."),
    }
    Ok(Flow::Continue)
}

fn handle_rate(collection: &mut Collection, args: &[&str], quiet: bool) {
    let value = args.first().and_then(|v| v.parse::<u8>().ok());
    match value {
        Some(v) if collection.rate_current(v) => render_current(collection),
        _ => notice("Rating must be a value from 1 to 5.", quiet),
    }
}

fn handle_add_criteria(collection: &mut Collection, args: &[&str], quiet: bool) {
    let name = args.join(" ");
    if collection.add_criteria(&name) {
        render_criteria(collection);
    } else {
        notice("Criteria name is empty or already registered.", quiet);
    }
}

/// Criteria deletion cascades to every photo, so it gets a confirmation
/// prompt first. Quiet mode auto-confirms so scripted input never blocks.
fn handle_delete_criteria(collection: &mut Collection, args: &[&str], quiet: bool) -> Result<()> {
    let tag = normalize_tag(&args.join(" "));
    if tag.is_empty() {
        notice("Usage: uncrit <name>", quiet);
        return Ok(());
    }

    let confirmed = if quiet {
        true
    } else {
        Confirm::new()
            .with_prompt(format!(
                "Delete '{tag}' from the criteria list AND from every photo?"
            ))
            .default(false)
            .interact()
            .map_err(|e| {
                PhototagError::InvalidInput(format!("Failed to get confirmation: {e}"))
            })?
    };
    if !confirmed {
        println!("Deletion cancelled.");
        return Ok(());
    }

    let report = collection.delete_tag_everywhere(&tag);
    println!("Removed '{tag}' from {} photo(s).", report.items_affected);
    render_criteria(collection);
    if report.current_item_affected {
        render_current(collection);
    }
    Ok(())
}

fn handle_apply(collection: &mut Collection, args: &[&str], quiet: bool) {
    let name = args.join(" ");
    if collection.apply_tag_to_current(&name) {
        render_current(collection);
    } else {
        notice("Tag is empty or already on this photo.", quiet);
    }
}

fn handle_untag(collection: &mut Collection, args: &[&str], quiet: bool) {
    // Removal is exact against the stored form, including case
    let name = args.join(" ");
    if collection.remove_tag_from_current(&name) {
        render_current(collection);
    } else {
        notice(
            "No such tag on this photo (removal matches the stored form exactly).",
            quiet,
        );
    }
}

fn handle_tags(collection: &Collection, quiet: bool) {
    if collection.tag_index().is_empty() {
        notice("No tags in the collection yet.", quiet);
        return;
    }
    if !quiet {
        println!("{}", "Tags in use:".bold());
    }
    for tag in collection.tag_index().iter() {
        let count = collection
            .items()
            .iter()
            .filter(|item| item.has_tag(tag))
            .count();
        println!("{}", output::tag_with_count(tag, count, quiet));
    }
}

fn handle_export(collection: &Collection, args: &[&str]) {
    if args.len() < 2 {
        println!("Usage: export <tag> <destination folder>");
        return;
    }
    let (tag_words, dest) = args.split_at(args.len() - 1);
    let tag = tag_words.join(" ");
    let destination_root = PathBuf::from(dest[0]);

    match export::export_by_tag(collection, &tag, &destination_root) {
        Ok(report) if report.attempted == 0 => {
            println!("No photos carry the tag '{}'.", normalize_tag(&tag));
        }
        Ok(report) => println!("{}", output::export_summary(&report)),
        Err(e) => eprintln!("{} {e}", "Export failed:".red().bold()),
    }
}

fn render_current(collection: &Collection) {
    match collection.current() {
        Some(item) => println!(
            "{}",
            output::item_summary(item, collection.cursor() + 1, collection.len())
        ),
        None => println!("{}", "No photos in the collection.".dimmed()),
    }
}

fn render_criteria(collection: &Collection) {
    let names = collection.criteria().list_sorted();
    if names.is_empty() {
        println!("Criteria: {}", "- none -".dimmed());
    } else {
        println!("Criteria: {}", names.join(", "));
    }
}

fn notice(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message.dimmed());
    }
}

fn print_help() {
    println!(
        "\
Commands:
  next, n               Show the next photo
  prev, p               Show the previous photo
  rate <1-5>, r         Rate the current photo
  crit <name>           Register a quick-apply criteria tag
  uncrit <name>         Delete a criteria tag from the list AND every photo
  apply <name>, a       Apply a tag to the current photo
  untag <name>, u       Remove a tag from the current photo (exact form)
  tags                  List all tags in use with photo counts
  export <tag> <dest>, e  Copy photos carrying <tag> into <dest>/COLLECTION_<TAG>
  show, s               Re-display the current photo
  help, h, ?            Show this list
  quit, q               Exit"
    );
}
