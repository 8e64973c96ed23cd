//! Scripted answers for non-interactive runs.
//!
//! When `ONBOARD_TEST_INPUTS` is set, every prompt pops the next `|`-separated
//! token instead of reading the terminal.

use once_cell::sync::Lazy;
use std::{
    collections::VecDeque,
    env,
    sync::{Mutex, MutexGuard, PoisonError},
};

pub const TEST_INPUTS_ENV: &str = "ONBOARD_TEST_INPUTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    Value(String),
    Keep,
    Next,
    Back,
    Submit,
    Cancel,
}

struct InputQueue {
    enabled: bool,
    inputs: VecDeque<ScriptedInput>,
}

impl InputQueue {
    fn from_env() -> Self {
        match env::var(TEST_INPUTS_ENV) {
            Ok(raw) => Self {
                enabled: true,
                inputs: parse_sequence(&raw),
            },
            Err(_) => Self {
                enabled: false,
                inputs: VecDeque::new(),
            },
        }
    }
}

static INPUTS: Lazy<Mutex<InputQueue>> = Lazy::new(|| Mutex::new(InputQueue::from_env()));

fn queue() -> MutexGuard<'static, InputQueue> {
    INPUTS.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn is_enabled() -> bool {
    queue().enabled
}

/// Next scripted answer for `label`, or `None` when scripting is off.
/// An exhausted script cancels the run rather than blocking on stdin.
pub fn next_input(label: &str) -> Option<ScriptedInput> {
    let mut guard = queue();
    if !guard.enabled {
        return None;
    }
    Some(guard.inputs.pop_front().unwrap_or_else(|| {
        tracing::warn!(prompt = label, "Scripted inputs exhausted; cancelling");
        ScriptedInput::Cancel
    }))
}

fn parse_input(token: &str) -> ScriptedInput {
    match token.to_ascii_uppercase().as_str() {
        "<KEEP>" | "KEEP" => ScriptedInput::Keep,
        "<BLANK>" | "<EMPTY>" => ScriptedInput::Value(String::new()),
        "<NEXT>" | "NEXT" => ScriptedInput::Next,
        "<BACK>" | "BACK" => ScriptedInput::Back,
        "<SUBMIT>" | "SUBMIT" => ScriptedInput::Submit,
        "<CANCEL>" | "CANCEL" | "<ESC>" => ScriptedInput::Cancel,
        _ => ScriptedInput::Value(token.to_string()),
    }
}

fn parse_sequence(raw: &str) -> VecDeque<ScriptedInput> {
    raw.split('|')
        .filter_map(|segment| {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(parse_input(trimmed))
            }
        })
        .collect()
}
