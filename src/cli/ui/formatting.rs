use std::fmt;

use colored::Colorize;

use crate::cli::ui::style::{style, UiStyle};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Warning,
    Error,
}

pub struct Formatter {
    style: UiStyle,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self { style: style() }
    }

    pub fn with_style(style: UiStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &UiStyle {
        &self.style
    }

    pub fn print_header(&self, title: impl fmt::Display) {
        println!("\n{}", self.header_text(title));
    }

    pub fn header_text(&self, title: impl fmt::Display) -> String {
        self.style.apply_header_style(&format!("=== {} ===", title))
    }

    pub fn print_info(&self, message: impl fmt::Display) {
        println!("{}", message);
    }

    pub fn print_success(&self, message: impl fmt::Display) {
        println!("{}", self.decorate(Tone::Success, message));
    }

    pub fn print_warning(&self, message: impl fmt::Display) {
        println!("{}", self.decorate(Tone::Warning, message));
    }

    pub fn print_error(&self, message: impl fmt::Display) {
        println!("{}", self.decorate(Tone::Error, message));
    }

    /// Error line rendered directly under the offending field.
    pub fn field_error_text(&self, message: impl fmt::Display) -> String {
        format!("  {}", self.decorate(Tone::Error, message))
    }

    fn decorate(&self, tone: Tone, message: impl fmt::Display) -> String {
        let (icon, plain_label) = match tone {
            Tone::Success => ("✔", "OK:"),
            Tone::Warning => ("⚠", "WARNING:"),
            Tone::Error => ("✖", "ERROR:"),
        };
        if self.style.plain_mode {
            return format!("{plain_label} {}", message);
        }
        let text = format!("{icon} {}", message);
        match tone {
            Tone::Success => text.green().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Error => text.red().to_string(),
        }
    }

    pub fn two_column_lines(&self, entries: &[(&str, &str)]) -> Vec<String> {
        let label_width = entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);
        entries
            .iter()
            .map(|(label, value)| format!("  {:<width$}  {}", label, value, width = label_width))
            .collect()
    }

    pub fn print_two_column(&self, entries: &[(&str, &str)]) {
        for line in self.two_column_lines(entries) {
            println!("{line}");
        }
    }
}
