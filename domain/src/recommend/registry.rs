//! Domain schema registry
//!
//! One [`DomainSpec`] per [`Domain`]: the field list, the completeness
//! predicate derived from it, the endpoint, and the functions that shape the
//! request body and normalize the response. Adding a domain means adding one
//! entry here and one module beside it.

use super::answers::AnswerSet;
use super::card::ResultCard;
use super::domain::Domain;
use super::schema::FieldSpec;
use super::{exhibition, festival, tour};
use crate::core::error::DomainError;
use serde_json::Value;

/// Projects a complete answer set onto the wire body.
pub type BodyBuilder = fn(&AnswerSet) -> Value;

/// Maps a raw success payload onto result cards, preserving order.
pub type Normalizer = fn(Value) -> Result<Vec<ResultCard>, DomainError>;

/// Registry entry describing one recommendation domain.
pub struct DomainSpec {
    pub domain: Domain,
    /// Name shown on the home screen
    pub title: &'static str,
    pub description: &'static str,
    /// Endpoint path, relative to the backend base URL
    pub endpoint: &'static str,
    /// Fields in the order they are asked
    pub fields: &'static [FieldSpec],
    pub build_body: BodyBuilder,
    pub normalize: Normalizer,
}

impl std::fmt::Debug for DomainSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainSpec")
            .field("domain", &self.domain)
            .field("endpoint", &self.endpoint)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl DomainSpec {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Registry entry for `domain`.
pub fn spec(domain: Domain) -> &'static DomainSpec {
    match domain {
        Domain::Exhibition => &exhibition::SPEC,
        Domain::Festival => &festival::SPEC,
        Domain::Tour => &tour::SPEC,
    }
}

/// All registry entries in home-screen order.
pub fn all() -> impl Iterator<Item = &'static DomainSpec> {
    Domain::ALL.into_iter().map(spec)
}

/// Required fields of the answer set's domain that fail their predicate.
pub fn missing_fields(answers: &AnswerSet) -> Vec<&'static FieldSpec> {
    spec(answers.domain())
        .fields
        .iter()
        .filter(|field| !field.is_satisfied_by(answers.get(field.name)))
        .collect()
}

/// Structural AND of every field predicate.
pub fn is_complete(answers: &AnswerSet) -> bool {
    missing_fields(answers).is_empty()
}
