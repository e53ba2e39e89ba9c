//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the review
//! session, including rating, tag list, and export report formatting.

use colored::Colorize;

use crate::collection::Item;
use crate::export::ExportReport;

/// Render a rating as filled/empty stars, or a dimmed "unrated".
#[must_use]
pub fn rating_stars(rating: u8) -> String {
    if rating == 0 {
        return "unrated".dimmed().to_string();
    }
    let filled = "★".repeat(usize::from(rating));
    let empty = "☆".repeat(5 - usize::from(rating));
    format!("{}{} ({rating}/5)", filled.yellow(), empty.dimmed())
}

/// Format a tag list for display
#[must_use]
pub fn tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        "- none -".dimmed().to_string()
    } else {
        tags.join(", ")
    }
}

/// Format the item under the cursor with its position in the collection
#[must_use]
pub fn item_summary(item: &Item, position: usize, total: usize) -> String {
    format!(
        "[{position}/{total}] {}\n  Rating: {}\n  Tags:   {}",
        item.filename().bold(),
        rating_stars(item.rating()),
        tag_list(item.tags()),
    )
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (on {count} photo(s))")
    }
}

/// Summarize an export report, one line per failure after the header
#[must_use]
pub fn export_summary(report: &ExportReport) -> String {
    let mut lines = vec![format!(
        "Copied {}/{} photo(s) to {}",
        report.succeeded,
        report.attempted,
        report.destination.display()
    )];
    for failure in &report.failures {
        lines.push(format!(
            "  ✗ {}: {}",
            failure.filename.red(),
            failure.reason
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFailure;
    use std::path::PathBuf;

    #[test]
    fn test_rating_stars_unrated() {
        colored::control::set_override(false);
        assert_eq!(rating_stars(0), "unrated");
        assert_eq!(rating_stars(3), "★★★☆☆ (3/5)");
        assert_eq!(rating_stars(5), "★★★★★ (5/5)");
    }

    #[test]
    fn test_tag_list_joins_sorted_tags() {
        colored::control::set_override(false);
        assert_eq!(tag_list(&[]), "- none -");
        assert_eq!(
            tag_list(&["Beach".to_string(), "Sunset".to_string()]),
            "Beach, Sunset"
        );
    }

    #[test]
    fn test_tag_with_count_quiet() {
        assert_eq!(tag_with_count("Beach", 2, true), "Beach");
        assert_eq!(tag_with_count("Beach", 2, false), "  Beach (on 2 photo(s))");
    }

    #[test]
    fn test_export_summary_lists_failures() {
        colored::control::set_override(false);
        let report = ExportReport {
            destination: PathBuf::from("/out/COLLECTION_BEACH"),
            attempted: 2,
            succeeded: 1,
            failures: vec![ExportFailure {
                filename: "a.jpg".to_string(),
                reason: "permission denied".to_string(),
            }],
        };
        let summary = export_summary(&report);
        assert!(summary.starts_with("Copied 1/2 photo(s) to /out/COLLECTION_BEACH"));
        assert!(summary.contains("a.jpg: permission denied"));
    }
}
