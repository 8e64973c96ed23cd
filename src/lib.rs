#![doc(test(attr(deny(warnings))))]

//! Onboard runs a three-step profile wizard in the terminal and hands the
//! completed profile to a read-only dashboard.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing. Safe to call more than once.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Onboard tracing initialized.");
    });
}
