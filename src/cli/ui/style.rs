use std::{
    io::IsTerminal,
    sync::{OnceLock, RwLock},
};

use colored::{Color, Colorize};

use crate::cli::output::current_preferences;
use crate::cli::ui::test_mode;

#[derive(Clone, Debug)]
pub struct UiStyle {
    pub use_color: bool,
    pub plain_mode: bool,
    pub bar_filled: char,
    pub bar_empty: char,
    pub color_header: Option<Color>,
}

static STYLE: OnceLock<RwLock<UiStyle>> = OnceLock::new();

pub fn style() -> UiStyle {
    let lock = STYLE.get_or_init(|| RwLock::new(UiStyle::detect()));
    match lock.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Re-reads preferences and terminal capabilities.
pub fn refresh_style() {
    if let Some(lock) = STYLE.get() {
        if let Ok(mut guard) = lock.write() {
            *guard = UiStyle::detect();
        }
    } else {
        let _ = STYLE.set(RwLock::new(UiStyle::detect()));
    }
}

impl UiStyle {
    fn detect() -> Self {
        let prefs = current_preferences();
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let use_color = stdout_tty && prefs.color_enabled && !no_color && !test_mode::is_enabled();
        Self::new(use_color)
    }

    pub fn new(use_color: bool) -> Self {
        let plain_mode = !use_color;
        Self {
            use_color,
            plain_mode,
            bar_filled: if plain_mode { '#' } else { '█' },
            bar_empty: if plain_mode { '.' } else { '░' },
            color_header: if use_color {
                Some(Color::BrightBlue)
            } else {
                None
            },
        }
    }

    /// Fixed-width bar for `value` out of `max`.
    pub fn bar(&self, value: usize, max: usize, width: usize) -> String {
        let filled = if max == 0 {
            0
        } else {
            (value.min(max) * width) / max
        };
        let mut bar = String::with_capacity(width);
        bar.extend(std::iter::repeat(self.bar_filled).take(filled));
        bar.extend(std::iter::repeat(self.bar_empty).take(width - filled));
        bar
    }

    pub fn apply_header_style(&self, text: &str) -> String {
        self.apply_color(text, self.color_header)
    }

    pub fn apply_color(&self, text: &str, color: Option<Color>) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match color {
            Some(color) => text.color(color).bold().to_string(),
            None => text.bold().to_string(),
        }
    }
}
