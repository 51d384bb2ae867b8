//! Recommendation flow front-ends
//!
//! An interactive wizard and a one-shot runner, both driving the same
//! [`culturemate_application::FlowController`].

mod one_shot;
mod wizard;

pub use one_shot::{OneShotReport, run_one_shot};
pub use wizard::{FlowWizard, parse_domain};
