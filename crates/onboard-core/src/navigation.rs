//! Step navigation state machine.
//!
//! ```text
//! Step1 --next(valid)--> Step2 --next(valid)--> Step3 --submit(valid)--> Submitted
//!   ^                      |  ^                   |
//!   +-------back-----------+  +-------back--------+
//! ```
//!
//! Invalid `next`/`submit` calls are self-loops that report the validator's
//! errors. `next` on the last step behaves like `submit`.

use std::fmt;
use std::time::Duration;

use onboard_domain::{Field, PersistPolicy, ProfileDraft, Step};
use tracing::{info, warn};

use crate::{
    cache::DraftCache,
    pause::{Pause, ThreadPause},
    store::FormStore,
    validation::{validate, ValidationErrors},
    CoreError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Active(Step),
    Submitted,
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardState::Active(step) => write!(f, "{step}"),
            WizardState::Submitted => f.write_str("submitted"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Back,
    Submit,
    Edit,
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NavAction::Next => "go to the next step",
            NavAction::Back => "go back",
            NavAction::Submit => "submit",
            NavAction::Edit => "edit the draft",
        };
        f.write_str(label)
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved { from: Step, to: Step },
    /// The gate failed; state is unchanged.
    Blocked(ValidationErrors),
    /// Terminal hand-off of the completed record.
    Submitted(ProfileDraft),
}

impl Transition {
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Transition::Blocked(errors) => Some(errors),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardSettings {
    pub persist_policy: PersistPolicy,
    pub submit_delay: Duration,
}

/// Owns the draft for one wizard run and gates every step change.
pub struct NavigationController<C: DraftCache, P: Pause = ThreadPause> {
    store: FormStore,
    cache: C,
    pause: P,
    settings: WizardSettings,
    state: WizardState,
    errors: ValidationErrors,
}

impl<C: DraftCache> NavigationController<C, ThreadPause> {
    /// Rehydrates the draft from `cache` (or starts empty) at Step 1.
    pub fn mount(cache: C, settings: WizardSettings) -> Self {
        Self::mount_with_pause(cache, settings, ThreadPause)
    }
}

impl<C: DraftCache, P: Pause> NavigationController<C, P> {
    pub fn mount_with_pause(cache: C, settings: WizardSettings, pause: P) -> Self {
        let draft = match cache.load() {
            Some(draft) => {
                info!("Resuming onboarding from cached draft");
                draft
            }
            None => ProfileDraft::default(),
        };
        Self {
            store: FormStore::new(draft),
            cache,
            pause,
            settings,
            state: WizardState::Active(Step::Personal),
            errors: ValidationErrors::new(),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn active_step(&self) -> Option<Step> {
        match self.state {
            WizardState::Active(step) => Some(step),
            WizardState::Submitted => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.state == WizardState::Submitted
    }

    pub fn draft(&self) -> &ProfileDraft {
        self.store.draft()
    }

    /// Errors from the most recent blocked attempt, minus fields edited since.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn settings(&self) -> &WizardSettings {
        &self.settings
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), CoreError> {
        self.require_active(NavAction::Edit)?;
        self.store.set_field(field, value);
        self.errors.remove(field);
        if self.settings.persist_policy.saves_on_edit() {
            self.persist();
        }
        Ok(())
    }

    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<Field, CoreError> {
        let field =
            Field::from_name(name).ok_or_else(|| CoreError::UnknownField(name.to_string()))?;
        self.set_field(field, value)?;
        Ok(field)
    }

    pub fn next(&mut self) -> Result<Transition, CoreError> {
        let step = self.require_active(NavAction::Next)?;
        let Some(target) = step.next() else {
            return self.submit();
        };
        if let Some(blocked) = self.gate(step) {
            return Ok(blocked);
        }
        Ok(self.move_to(step, target))
    }

    pub fn back(&mut self) -> Result<Transition, CoreError> {
        let step = self.require_active(NavAction::Back)?;
        let target = step.previous().ok_or(CoreError::InvalidTransition {
            action: NavAction::Back,
            state: self.state,
        })?;
        Ok(self.move_to(step, target))
    }

    pub fn submit(&mut self) -> Result<Transition, CoreError> {
        let step = self.require_active(NavAction::Submit)?;
        if !step.is_last() {
            return Err(CoreError::InvalidTransition {
                action: NavAction::Submit,
                state: self.state,
            });
        }
        if let Some(blocked) = self.gate(step) {
            return Ok(blocked);
        }

        let delay = self.settings.submit_delay;
        if !delay.is_zero() {
            info!(delay_ms = delay.as_millis() as u64, "Submitting onboarding profile");
        }
        self.pause.pause(delay);

        self.state = WizardState::Submitted;
        self.errors = ValidationErrors::new();
        if let Err(err) = self.cache.clear() {
            warn!(error = %err, "Failed to clear cached draft after submission");
        }
        info!("Onboarding profile submitted");
        Ok(Transition::Submitted(self.store.draft().clone()))
    }

    fn gate(&mut self, step: Step) -> Option<Transition> {
        let errors = validate(step, self.store.draft());
        if errors.is_empty() {
            return None;
        }
        info!(step = step.number(), invalid = %errors, "Navigation blocked by validation");
        self.errors = errors.clone();
        Some(Transition::Blocked(errors))
    }

    fn move_to(&mut self, from: Step, to: Step) -> Transition {
        self.state = WizardState::Active(to);
        self.errors = ValidationErrors::new();
        self.persist();
        info!(from = from.number(), to = to.number(), "Wizard step changed");
        Transition::Moved { from, to }
    }

    fn persist(&self) {
        if let Err(err) = self.cache.save(self.store.draft()) {
            warn!(error = %err, "Failed to persist onboarding draft");
        }
    }

    fn require_active(&self, action: NavAction) -> Result<Step, CoreError> {
        self.active_step().ok_or(CoreError::InvalidTransition {
            action,
            state: self.state,
        })
    }
}
