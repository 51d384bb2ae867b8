//! Request builder

use super::answers::AnswerSet;
use super::registry;
use serde::Serialize;
use serde_json::Value;

/// Wire request for one recommendation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendRequest {
    /// Endpoint path, relative to the backend base URL
    pub endpoint: &'static str,
    pub body: Value,
}

/// Build the wire request for a complete answer set.
///
/// # Panics
/// Panics if the answer set is incomplete. Callers gate on
/// [`AnswerSet::is_complete`] first; reaching here with partial data is a
/// programming error, not a runtime condition.
pub fn build(answers: &AnswerSet) -> RecommendRequest {
    assert!(
        answers.is_complete(),
        "request built from incomplete {} answers",
        answers.domain()
    );
    let spec = registry::spec(answers.domain());
    RecommendRequest {
        endpoint: spec.endpoint,
        body: (spec.build_body)(answers),
    }
}
