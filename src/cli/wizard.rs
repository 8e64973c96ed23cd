//! Terminal rendering of the three-step onboarding wizard.
//!
//! The [`WizardView`] owns no draft state: it reads from and forwards edits to
//! a [`NavigationController`], and only decides what to print and which prompt
//! comes next. Prompting itself is behind [`WizardInteraction`] so tests can
//! drive the view without a terminal.

use std::io::{self, IsTerminal};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use colored::Color;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use onboard_core::{validate, DraftCache, NavigationController, Pause, Transition};
use onboard_domain::{canonical_option, Field, ProfileDraft, Step};

use crate::cli::ui::formatting::Formatter;
use crate::cli::ui::style::UiStyle;
use crate::cli::ui::test_mode::{self, ScriptedInput};
use crate::errors::CliError;

const PROGRESS_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Back,
    Submit,
    Cancel,
}

impl WizardAction {
    pub fn label(self) -> &'static str {
        match self {
            WizardAction::Next => "Next",
            WizardAction::Back => "Back",
            WizardAction::Submit => "Submit",
            WizardAction::Cancel => "Cancel",
        }
    }

    /// Actions offered on `step`, primary action first.
    pub fn offered(step: Step) -> Vec<WizardAction> {
        let mut actions = Vec::with_capacity(3);
        actions.push(if step.is_last() {
            WizardAction::Submit
        } else {
            WizardAction::Next
        });
        if step.previous().is_some() {
            actions.push(WizardAction::Back);
        }
        actions.push(WizardAction::Cancel);
        actions
    }

    /// `Next` is accepted on the last step too, where it submits.
    pub fn is_available(self, step: Step) -> bool {
        match self {
            WizardAction::Next | WizardAction::Cancel => true,
            WizardAction::Back => step.previous().is_some(),
            WizardAction::Submit => step.is_last(),
        }
    }
}

/// Everything an interaction needs to render one input.
#[derive(Debug, Clone)]
pub struct FieldPrompt<'a> {
    pub step: Step,
    pub field: Field,
    pub current: &'a str,
    pub options: Option<&'static [&'static str]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldResponse {
    Value(String),
    Keep,
    Action(WizardAction),
}

pub trait WizardInteraction {
    /// Called once each time a step is (re)displayed.
    fn begin_step(&mut self, _step: Step) -> Result<(), CliError> {
        Ok(())
    }

    fn prompt_field(&mut self, prompt: &FieldPrompt<'_>) -> Result<FieldResponse, CliError>;

    fn choose_action(
        &mut self,
        step: Step,
        actions: &[WizardAction],
    ) -> Result<WizardAction, CliError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Submitted(ProfileDraft),
    Cancelled,
}

pub struct WizardView<'a, I: WizardInteraction + ?Sized> {
    interaction: &'a mut I,
    formatter: Formatter,
}

impl<'a, I: WizardInteraction + ?Sized> WizardView<'a, I> {
    pub fn new(interaction: &'a mut I) -> Self {
        Self {
            interaction,
            formatter: Formatter::new(),
        }
    }

    pub fn with_formatter(interaction: &'a mut I, formatter: Formatter) -> Self {
        Self {
            interaction,
            formatter,
        }
    }

    pub fn run<C: DraftCache, P: Pause>(
        &mut self,
        nav: &mut NavigationController<C, P>,
    ) -> Result<WizardOutcome, CliError> {
        while let Some(step) = nav.active_step() {
            self.interaction.begin_step(step)?;
            self.render_progress(step);

            let transition = match self.collect_step(nav, step)? {
                WizardAction::Cancel => {
                    self.formatter.print_warning(
                        "Onboarding paused. Progress from completed steps is kept for next time.",
                    );
                    return Ok(WizardOutcome::Cancelled);
                }
                WizardAction::Back => nav.back()?,
                WizardAction::Next => {
                    if step.is_last() {
                        self.announce_submit(nav, step);
                    }
                    nav.next()?
                }
                WizardAction::Submit => {
                    self.announce_submit(nav, step);
                    nav.submit()?
                }
            };

            match transition {
                Transition::Submitted(profile) => {
                    self.formatter.print_success("Profile submitted.");
                    return Ok(WizardOutcome::Submitted(profile));
                }
                Transition::Blocked(errors) => {
                    let noun = if errors.len() == 1 { "field" } else { "fields" };
                    self.formatter.print_error(format!(
                        "Please fix {} {} before continuing.",
                        errors.len(),
                        noun
                    ));
                }
                Transition::Moved { .. } => {}
            }
        }
        Ok(WizardOutcome::Submitted(nav.draft().clone()))
    }

    fn render_progress(&self, step: Step) {
        self.formatter.print_header(format!(
            "Step {} of {}: {}",
            step.number(),
            Step::COUNT,
            step.title()
        ));
        let percent = step.number() * 100 / Step::COUNT;
        let bar = self
            .formatter
            .style()
            .bar(step.number(), Step::COUNT, PROGRESS_WIDTH);
        self.formatter
            .print_info(format!("Progress: [{bar}] {percent}%"));
        self.formatter
            .print_info(step_labels(self.formatter.style(), step));
    }

    fn collect_step<C: DraftCache, P: Pause>(
        &mut self,
        nav: &mut NavigationController<C, P>,
        step: Step,
    ) -> Result<WizardAction, CliError> {
        for &field in step.fields() {
            if let Some(message) = nav.errors().message(field) {
                println!("{}", self.formatter.field_error_text(message));
            }
            let prompt = FieldPrompt {
                step,
                field,
                current: nav.draft().get(field),
                options: field.options(),
            };
            let response = self.interaction.prompt_field(&prompt)?;
            match response {
                FieldResponse::Value(value) => nav.set_field(field, normalize(field, value))?,
                FieldResponse::Keep => {}
                FieldResponse::Action(action) if action.is_available(step) => return Ok(action),
                FieldResponse::Action(action) => self.reject(action, step),
            }
        }

        let offered = WizardAction::offered(step);
        loop {
            let action = self.interaction.choose_action(step, &offered)?;
            if action.is_available(step) {
                return Ok(action);
            }
            self.reject(action, step);
        }
    }

    fn announce_submit<C: DraftCache, P: Pause>(&self, nav: &NavigationController<C, P>, step: Step) {
        if validate(step, nav.draft()).is_empty() {
            self.formatter.print_info("Submitting…");
        }
    }

    fn reject(&self, action: WizardAction, step: Step) {
        self.formatter.print_warning(format!(
            "{} is not available on step {}.",
            action.label(),
            step.number()
        ));
    }
}

/// Snaps enumerated answers to their catalog spelling; anything else is kept
/// verbatim so the validator can flag it.
fn normalize(field: Field, value: String) -> String {
    field
        .options()
        .and_then(|options| canonical_option(options, &value))
        .map(str::to_string)
        .unwrap_or(value)
}

/// Prompts through `dialoguer`, or through the scripted queue when
/// `ONBOARD_TEST_INPUTS` is set.
pub struct TerminalInteraction {
    theme: ColorfulTheme,
    clear_screen: bool,
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            clear_screen: io::stdout().is_terminal() && !test_mode::is_enabled(),
        }
    }

    fn select_option(
        &self,
        prompt: &FieldPrompt<'_>,
        options: &[&'static str],
    ) -> Result<FieldResponse, CliError> {
        let placeholder = requires_choice(prompt.field)
            .then(|| format!("Select {}", prompt.field.label().to_lowercase()));
        let offset = usize::from(placeholder.is_some());
        let mut items: Vec<String> = placeholder.into_iter().collect();
        items.extend(options.iter().map(|option| option.to_string()));

        let default = options
            .iter()
            .position(|option| *option == prompt.current)
            .map(|index| index + offset)
            .unwrap_or(0);

        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt.field.label())
            .items(&items)
            .default(default)
            .interact_opt()?;

        Ok(match choice {
            Some(index) if index < offset => FieldResponse::Value(String::new()),
            Some(index) => FieldResponse::Value(options[index - offset].to_string()),
            None => FieldResponse::Action(escape_action(prompt.step)),
        })
    }
}

impl WizardInteraction for TerminalInteraction {
    fn begin_step(&mut self, _step: Step) -> Result<(), CliError> {
        if self.clear_screen {
            let mut stdout = io::stdout();
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn prompt_field(&mut self, prompt: &FieldPrompt<'_>) -> Result<FieldResponse, CliError> {
        if let Some(scripted) = test_mode::next_input(prompt.field.label()) {
            return Ok(match scripted {
                ScriptedInput::Value(value) => FieldResponse::Value(value),
                ScriptedInput::Keep => FieldResponse::Keep,
                ScriptedInput::Next => FieldResponse::Action(WizardAction::Next),
                ScriptedInput::Back => FieldResponse::Action(WizardAction::Back),
                ScriptedInput::Submit => FieldResponse::Action(WizardAction::Submit),
                ScriptedInput::Cancel => FieldResponse::Action(WizardAction::Cancel),
            });
        }

        if let Some(options) = prompt.options {
            return self.select_option(prompt, options);
        }

        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt.field.label())
            .with_initial_text(prompt.current)
            .allow_empty(true)
            .interact_text()?;
        Ok(FieldResponse::Value(value))
    }

    fn choose_action(
        &mut self,
        step: Step,
        actions: &[WizardAction],
    ) -> Result<WizardAction, CliError> {
        if let Some(scripted) = test_mode::next_input("action") {
            return match scripted {
                ScriptedInput::Next => Ok(WizardAction::Next),
                ScriptedInput::Back => Ok(WizardAction::Back),
                ScriptedInput::Submit => Ok(WizardAction::Submit),
                ScriptedInput::Cancel => Ok(WizardAction::Cancel),
                ScriptedInput::Keep => Ok(actions.first().copied().unwrap_or(WizardAction::Cancel)),
                ScriptedInput::Value(value) => Err(CliError::InvalidArguments(format!(
                    "expected a wizard action on step {}, got `{}`",
                    step.number(),
                    value
                ))),
            };
        }

        let labels: Vec<&str> = actions.iter().map(|action| action.label()).collect();
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Continue")
            .items(&labels)
            .default(0)
            .interact_opt()?;
        Ok(match choice {
            Some(index) => actions[index],
            None => escape_action(step),
        })
    }
}

fn requires_choice(field: Field) -> bool {
    matches!(field, Field::Industry | Field::Size)
}

fn escape_action(step: Step) -> WizardAction {
    if step.previous().is_some() {
        WizardAction::Back
    } else {
        WizardAction::Cancel
    }
}

/// One label per step, marked done, current or pending relative to `active`.
fn step_labels(style: &UiStyle, active: Step) -> String {
    Step::ALL
        .iter()
        .map(|&step| {
            let (marker, color) = match step.cmp(&active) {
                std::cmp::Ordering::Less => ("[x]", Color::Green),
                std::cmp::Ordering::Equal => ("[>]", Color::BrightBlue),
                std::cmp::Ordering::Greater => ("[ ]", Color::BrightBlack),
            };
            style.apply_color(&format!("{marker} {}", step.title()), Some(color))
        })
        .collect::<Vec<_>>()
        .join("  ")
}
