//! Interactive language selection.
//!
//! Presents the detected language tabs as a numbered menu and reads a
//! selection from stdin. Parsing is split out so it can be tested without a
//! terminal.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

use docsift_core::Language;

use crate::echo;

/// Parse one line of menu input against the available languages.
///
/// Accepted forms: empty or `all` (everything), or whitespace-separated
/// 1-based indices ("1 3"). Anything else is rejected with a message for
/// re-prompting.
pub fn parse_selection(input: &str, available: &[Language]) -> Result<Vec<Language>, String> {
    let trimmed = input.trim().to_lowercase();

    if trimmed.is_empty() || trimmed == "all" {
        return Ok(available.to_vec());
    }

    let mut selected = Vec::new();
    for part in trimmed.split_whitespace() {
        let index: usize = part
            .parse()
            .map_err(|_| format!("Invalid input '{}'. Enter numbers or 'all'.", part))?;
        if index < 1 || index > available.len() {
            return Err(format!(
                "Invalid selection: {}. Choose numbers between 1 and {}.",
                part,
                available.len()
            ));
        }
        let language = available[index - 1];
        if !selected.contains(&language) {
            selected.push(language);
        }
    }

    Ok(selected)
}

/// Show the menu and read a selection, re-prompting on invalid input.
///
/// EOF on stdin resolves to "all", matching the blank-line shortcut.
pub fn prompt_languages(available: &BTreeSet<Language>) -> io::Result<Vec<Language>> {
    let list: Vec<Language> = available.iter().copied().collect();

    eprintln!("\n{}", "Available programming languages in this documentation:".bold());
    for (i, lang) in list.iter().enumerate() {
        eprintln!("  {}. {}", i + 1, capitalize(lang.name()));
    }
    eprintln!("\n{}", "Options:".bold());
    eprintln!("  - Enter numbers (e.g. '1 3') to select specific languages");
    eprintln!("  - Enter 'all' or press Enter to include all languages");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        eprint!("\nYour choice: ");
        io::stderr().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(list);
        }

        match parse_selection(&line, &list) {
            Ok(selected) => {
                if !selected.is_empty() {
                    let names: Vec<String> = selected.iter().map(|l| capitalize(l.name())).collect();
                    echo::print_info(&format!("Selected languages: {}", names.join(", ")));
                }
                return Ok(selected);
            }
            Err(message) => echo::print_warning(&message),
        }
    }
}

/// "kotlin" -> "Kotlin" for display.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
