//! onboard-domain
//!
//! Pure domain models for the onboarding wizard (profile draft, steps, catalogs).
//! No I/O, no terminal, no storage. Only data types and core enums.

pub mod catalog;
pub mod field;
pub mod policy;
pub mod profile;
pub mod step;

pub use catalog::*;
pub use field::*;
pub use policy::*;
pub use profile::*;
pub use step::*;
