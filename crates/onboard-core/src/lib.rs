//! onboard-core
//!
//! Wizard logic for onboarding: form store, step validation, draft caching and
//! the navigation state machine. Depends on onboard-domain. No terminal I/O and
//! no direct filesystem access; storage is reached through [`KeyValueStore`].

pub mod cache;
pub mod dashboard;
pub mod error;
pub mod navigation;
pub mod pause;
pub mod store;
pub mod validation;

pub use cache::{DraftCache, KeyValueStore, LocalDraftCache, MemoryStore};
pub use dashboard::{DashboardSnapshot, MetricCard, ProfileLine, ProgressPoint, NOT_AVAILABLE};
pub use error::CoreError;
pub use navigation::{NavAction, NavigationController, Transition, WizardSettings, WizardState};
pub use pause::{Pause, ThreadPause};
pub use store::FormStore;
pub use validation::{validate, FieldError, ValidationErrors};
