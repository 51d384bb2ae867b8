//! Answer set entity

use super::domain::Domain;
use super::registry;
use super::schema::FieldSpec;
use crate::core::error::DomainError;
use std::collections::BTreeMap;

/// A single typed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Text(String),
    /// Display/wire value of the chosen option
    Choice(String),
    Integer(i64),
    Flag(bool),
}

impl AnswerValue {
    /// Text content of a `Text` or `Choice` answer.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) | AnswerValue::Choice(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AnswerValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AnswerValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerValue::Text(s) | AnswerValue::Choice(s) => write!(f, "{}", s),
            AnswerValue::Integer(n) => write!(f, "{}", n),
            AnswerValue::Flag(true) => write!(f, "예"),
            AnswerValue::Flag(false) => write!(f, "아니오"),
        }
    }
}

/// The user's in-progress input for one domain (Entity)
///
/// Only fields declared by the domain's schema can be stored. Whether the
/// set is complete is decided by the registry, see [`AnswerSet::is_complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    domain: Domain,
    values: BTreeMap<&'static str, AnswerValue>,
}

impl AnswerSet {
    /// An answer set with nothing filled in.
    pub fn empty(domain: Domain) -> Self {
        Self {
            domain,
            values: BTreeMap::new(),
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Parse `raw` for `field` and store it, replacing any previous value.
    ///
    /// On error the set is left unchanged.
    pub fn set(&mut self, field: &str, raw: &str) -> Result<(), DomainError> {
        let spec = self.field_spec(field)?;
        let value = spec.parse(raw)?;
        self.values.insert(spec.name, value);
        Ok(())
    }

    /// Store an already-typed value.
    pub fn insert(&mut self, field: &str, value: AnswerValue) -> Result<(), DomainError> {
        let spec = self.field_spec(field)?;
        self.values.insert(spec.name, value);
        Ok(())
    }

    /// Remove the value of `field`, if any.
    pub fn clear(&mut self, field: &str) -> Result<(), DomainError> {
        let spec = self.field_spec(field)?;
        self.values.remove(spec.name);
        Ok(())
    }

    pub fn get(&self, field: &str) -> Option<&AnswerValue> {
        self.values.get(field)
    }

    /// Text of a text or choice field, empty when unset.
    pub fn text(&self, field: &str) -> &str {
        self.get(field).and_then(AnswerValue::as_str).unwrap_or("")
    }

    pub fn integer(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(AnswerValue::as_integer)
    }

    /// Value of a flag field; unset flags read as `false`.
    pub fn flag(&self, field: &str) -> bool {
        self.get(field).and_then(AnswerValue::as_flag).unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        registry::is_complete(self)
    }

    /// Required fields that do not yet satisfy their predicate.
    pub fn missing_fields(&self) -> Vec<&'static FieldSpec> {
        registry::missing_fields(self)
    }

    /// Filled-in fields in schema order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static FieldSpec, &AnswerValue)> {
        registry::spec(self.domain)
            .fields
            .iter()
            .filter_map(|spec| self.values.get(spec.name).map(|value| (spec, value)))
    }

    fn field_spec(&self, field: &str) -> Result<&'static FieldSpec, DomainError> {
        registry::spec(self.domain)
            .field(field)
            .ok_or_else(|| DomainError::UnknownField {
                domain: self.domain,
                field: field.to_string(),
            })
    }
}
