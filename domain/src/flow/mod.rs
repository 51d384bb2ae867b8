//! Recommendation flow state machine.
//!
//! - [`state::FlowState`]: the single state object of one flow session
//! - [`event::FlowEvent`]: named transitions applied by [`state::FlowState::apply`]
//! - [`event::FlowEffect`]: work the caller must perform after a transition
//! - [`error::FlowError`]: rejected transitions

pub mod error;
pub mod event;
pub mod state;
