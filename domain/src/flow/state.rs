//! Flow state entity and its transition function

use super::error::FlowError;
use super::event::{FlowEffect, FlowEvent, RequestId};
use crate::core::error::Failure;
use crate::recommend::answers::AnswerSet;
use crate::recommend::card::ResultCard;
use crate::recommend::domain::Domain;
use crate::recommend::normalize::normalize;
use crate::recommend::request;
use serde::Serialize;

/// Screen of the linear flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Home,
    Input,
    Result,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Home => "home",
            Step::Input => "input",
            Step::Result => "result",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of the request belonging to the current result entry.
///
/// Loading, results and error are variants of one enum, so at most one of
/// them can be present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Idle,
    Loading(RequestId),
    Ready(Vec<ResultCard>),
    Failed(Failure),
}

/// State of one recommendation flow session (Entity)
///
/// Mutated only through [`FlowState::apply`]. A rejected event leaves the
/// state untouched; an accepted one replaces the affected fields in a
/// single assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowState {
    step: Step,
    answers: Option<AnswerSet>,
    outcome: Outcome,
}

impl FlowState {
    /// Initial state of a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Selected domain; `None` on the home step.
    pub fn domain(&self) -> Option<Domain> {
        self.answers.as_ref().map(AnswerSet::domain)
    }

    pub fn answers(&self) -> Option<&AnswerSet> {
        self.answers.as_ref()
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.outcome, Outcome::Loading(_))
    }

    pub fn results(&self) -> Option<&[ResultCard]> {
        match &self.outcome {
            Outcome::Ready(cards) => Some(cards),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Failure> {
        match &self.outcome {
            Outcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Whether a submit would currently be accepted (the enabled state of
    /// the submit button).
    pub fn can_submit(&self) -> bool {
        matches!(self.step, Step::Input | Step::Result)
            && !self.is_loading()
            && self.answers.as_ref().is_some_and(AnswerSet::is_complete)
    }

    /// Discard everything and return to a fresh home step.
    ///
    /// Accepted from every state; a response still in flight becomes stale.
    pub fn restart(&mut self) {
        *self = FlowState::new();
    }

    /// Apply one event.
    pub fn apply(&mut self, event: FlowEvent) -> Result<FlowEffect, FlowError> {
        let name = event.name();
        match event {
            FlowEvent::Start(domain) => {
                self.expect_step(Step::Home, name)?;
                *self = FlowState {
                    step: Step::Input,
                    answers: Some(AnswerSet::empty(domain)),
                    outcome: Outcome::Idle,
                };
                Ok(FlowEffect::None)
            }
            FlowEvent::Edit { field, value } => {
                let answers = self.input_answers(name)?;
                answers.set(&field, &value)?;
                Ok(FlowEffect::None)
            }
            FlowEvent::Clear { field } => {
                let answers = self.input_answers(name)?;
                answers.clear(&field)?;
                Ok(FlowEffect::None)
            }
            FlowEvent::Back => {
                self.expect_step(Step::Input, name)?;
                *self = FlowState::new();
                Ok(FlowEffect::None)
            }
            FlowEvent::Submit { request_id } => self.submit(request_id, name),
            FlowEvent::Revise => {
                self.expect_step(Step::Result, name)?;
                if self.is_loading() {
                    return Err(FlowError::RequestInFlight);
                }
                self.step = Step::Input;
                self.outcome = Outcome::Idle;
                Ok(FlowEffect::None)
            }
            FlowEvent::Resolved {
                request_id,
                response,
            } => {
                self.resolve(request_id, response)?;
                Ok(FlowEffect::None)
            }
            FlowEvent::Restart => {
                self.restart();
                Ok(FlowEffect::None)
            }
        }
    }

    fn submit(&mut self, request_id: RequestId, name: &'static str) -> Result<FlowEffect, FlowError> {
        if !matches!(self.step, Step::Input | Step::Result) {
            return Err(self.invalid(name));
        }
        if self.is_loading() {
            return Err(FlowError::RequestInFlight);
        }
        let Some(answers) = self.answers.as_ref() else {
            return Err(self.invalid(name));
        };
        let missing = answers.missing_fields();
        if !missing.is_empty() {
            return Err(FlowError::Incomplete {
                domain: answers.domain(),
                missing: missing.iter().map(|field| field.name).collect(),
            });
        }

        let request = request::build(answers);
        self.step = Step::Result;
        self.outcome = Outcome::Loading(request_id);
        Ok(FlowEffect::Dispatch {
            request_id,
            request,
        })
    }

    fn resolve(
        &mut self,
        request_id: RequestId,
        response: Result<serde_json::Value, Failure>,
    ) -> Result<(), FlowError> {
        let pending = matches!(self.outcome, Outcome::Loading(id) if id == request_id);
        let domain = match self.domain() {
            Some(domain) if pending => domain,
            _ => return Err(FlowError::StaleResponse(request_id)),
        };

        self.outcome = match response.map(|payload| normalize(domain, payload)) {
            Ok(Ok(cards)) => Outcome::Ready(cards),
            Ok(Err(e)) => Outcome::Failed(e.to_failure()),
            Err(failure) => Outcome::Failed(failure),
        };
        Ok(())
    }

    fn input_answers(&mut self, name: &'static str) -> Result<&mut AnswerSet, FlowError> {
        self.expect_step(Step::Input, name)?;
        let step = self.step;
        self.answers
            .as_mut()
            .ok_or(FlowError::InvalidTransition { step, event: name })
    }

    fn expect_step(&self, step: Step, name: &'static str) -> Result<(), FlowError> {
        if self.step == step {
            Ok(())
        } else {
            Err(self.invalid(name))
        }
    }

    fn invalid(&self, name: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            step: self.step,
            event: name,
        }
    }
}
