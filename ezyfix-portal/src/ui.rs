//! Terminal building blocks
//!
//! Prompts, notices and table rendering shared by every page. Notices
//! come in the three kinds the old popup component had; `alert` is the
//! blocking variant used for failures.

use shared::FieldErrors;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn tag(&self) -> &'static str {
        match self {
            Self::Info => "[i]",
            Self::Success => "[ok]",
            Self::Error => "[!!]",
        }
    }
}

/// Transient notice.
pub fn notice(kind: NoticeKind, message: &str) {
    println!("{} {}", kind.tag(), message);
}

/// Blocking notice: shown for every failure, waits for Enter so the
/// vendor cannot miss it.
pub fn alert(message: &str) {
    println!();
    println!("{} {}", NoticeKind::Error.tag(), message);
    let _ = prompt("Press Enter to continue");
}

pub fn heading(title: &str) {
    println!();
    println!("== {title} ==");
}

/// Read one trimmed line.
pub fn prompt(label: &str) -> String {
    print!("{label}: ");
    let _ = io::stdout().flush();
    let mut input = String::new();
    let _ = io::stdin().read_line(&mut input);
    input.trim().to_string()
}

/// Read one trimmed line, keeping `current` when the vendor just hits
/// Enter.
pub fn prompt_default(label: &str, current: &str) -> String {
    let shown = if current.is_empty() { "-" } else { current };
    let input = prompt(&format!("{label} [{shown}]"));
    if input.is_empty() {
        current.to_string()
    } else {
        input
    }
}

/// Yes/no question; only an explicit `y`/`yes` confirms.
pub fn confirm(question: &str) -> bool {
    let answer = prompt(&format!("{question} (y/n)"));
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

/// Numbered single-choice select. Enter keeps `current` when it is
/// non-empty; an invalid number keeps it too.
pub fn select(label: &str, options: &[&str], current: &str) -> String {
    println!("{label}:");
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
    let shown = if current.is_empty() { "-" } else { current };
    let input = prompt(&format!("Choose 1-{} [{shown}]", options.len()));
    match input.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].to_string(),
        _ => current.to_string(),
    }
}

/// Print a validation error map under the form.
pub fn print_errors(errors: &FieldErrors) {
    for (field, message) in errors.iter() {
        println!("  {} {field}: {message}", NoticeKind::Error.tag());
    }
}

/// Fixed-width table. Column widths fit the widest cell.
pub fn table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let line = |cells: Vec<&str>| {
        let mut out = String::new();
        for (i, cell) in cells.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
        }
        println!("{}", out.trim_end());
    };

    line(headers.to_vec());
    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    line(separators.iter().map(String::as_str).collect());
    for row in rows {
        line(row.iter().map(String::as_str).collect());
    }
    if rows.is_empty() {
        println!("(no rows)");
    }
}
