#![doc(test(attr(deny(warnings))))]

//! Budget Assistant walks a single user through planning a month: income,
//! budget categories, logged expenses, and a planned-versus-actual summary.

pub mod budget;
pub mod cli;
pub mod collect;
pub mod config;
pub mod currency;
pub mod errors;
pub mod prompt;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Assistant tracing initialized.");
    });
}
