use console::style;
use std::fmt::Display;

/// Centralized output formatting utilities for consistent CLI presentation
pub struct Output;

impl Output {
    /// Print a success message with checkmark
    pub fn success<T: Display>(message: T) {
        println!("{} {}", style("✓").green(), message);
    }

    /// Print an error message with X mark
    pub fn error<T: Display>(message: T) {
        println!("{} {}", style("✗").red(), message);
    }

    /// Print a warning message
    pub fn warning<T: Display>(message: T) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    /// Print an info message
    pub fn info<T: Display>(message: T) {
        println!("{} {}", style("ℹ").cyan(), message);
    }

    /// Print a bullet point
    pub fn bullet<T: Display>(message: T) {
        println!("  {} {}", style("•").dim(), message);
    }

    /// Print a list of items as bullets
    pub fn list<T: Display>(items: &[T]) {
        for item in items {
            Self::bullet(item);
        }
    }

    /// Print a step heading, underlined with dashes
    pub fn section<T: Display>(title: T) {
        let title = title.to_string();
        let underline = "-".repeat(title.chars().count());
        println!("\n{}\n{}\n", style(&title).cyan(), style(underline).cyan());
    }

    /// Print a header above a block of output
    pub fn header<T: Display>(title: T) {
        println!("{}", style(title).bold().underlined());
    }

    /// Print `term: definition` with the term highlighted
    pub fn definition<T: Display, D: Display>(term: T, definition: D) {
        println!("{} {}", style(format!("{term}:")).yellow(), definition);
    }

    /// Print progress indicator
    pub fn progress<T: Display>(message: T) {
        println!("{} {}", style("→").cyan(), message);
    }

    /// Print a pre-rendered line as is
    pub fn line<T: Display>(line: T) {
        println!("{line}");
    }

    /// Print empty line for spacing
    pub fn spacing() {
        println!();
    }
}
