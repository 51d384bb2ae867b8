//! Field schema for answer sets
//!
//! A [`FieldSpec`] describes one input the user fills in: how raw text is
//! parsed into an [`AnswerValue`] and when a stored value counts as
//! satisfying the field.

use super::answers::AnswerValue;
use crate::core::error::DomainError;

/// One selectable option of a [`FieldKind::Choice`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Stable ASCII key, usable on the command line (`public`, `day`, ...)
    pub key: &'static str,
    /// Display text, also sent on the wire (`대중교통`, `당일`, ...)
    pub value: &'static str,
}

/// Type and constraints of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; satisfied when non-blank.
    Text,
    /// Exactly one of the listed options.
    Choice(&'static [ChoiceOption]),
    /// Whole number within `min..=max` (`max` of `None` is unbounded).
    Integer { min: i64, max: Option<i64> },
    /// Yes/no toggle; any stored value satisfies it.
    Flag,
}

/// Declaration of a single answer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Question shown to the user
    pub label: &'static str,
    /// Example input shown beside the question
    pub placeholder: Option<&'static str>,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    /// Parse raw user input into a value of this field's type.
    ///
    /// Integers outside the declared bounds are returned as-is; bounds are
    /// enforced by [`FieldSpec::is_satisfied_by`], not here.
    pub fn parse(&self, raw: &str) -> Result<AnswerValue, DomainError> {
        let trimmed = raw.trim();
        match self.kind {
            FieldKind::Text => Ok(AnswerValue::Text(raw.to_string())),
            FieldKind::Choice(options) => find_choice(options, trimmed)
                .map(|option| AnswerValue::Choice(option.value.to_string()))
                .ok_or_else(|| self.invalid(format!("expected one of {}", describe(options)))),
            FieldKind::Integer { .. } => {
                let digits: String = trimmed.chars().filter(|c| *c != ',' && *c != '_').collect();
                digits
                    .parse::<i64>()
                    .map(AnswerValue::Integer)
                    .map_err(|_| self.invalid(format!("'{}' is not a whole number", trimmed)))
            }
            FieldKind::Flag => parse_flag(trimmed)
                .map(AnswerValue::Flag)
                .ok_or_else(|| self.invalid("expected yes or no".to_string())),
        }
    }

    /// Whether `value` fulfils this field's completeness predicate.
    ///
    /// Optional fields are always satisfied.
    pub fn is_satisfied_by(&self, value: Option<&AnswerValue>) -> bool {
        if !self.required {
            return true;
        }
        match (self.kind, value) {
            (FieldKind::Text, Some(AnswerValue::Text(text))) => !text.trim().is_empty(),
            (FieldKind::Choice(options), Some(AnswerValue::Choice(chosen))) => {
                options.iter().any(|option| option.value == chosen.as_str())
            }
            (FieldKind::Integer { min, max }, Some(AnswerValue::Integer(n))) => {
                *n >= min && max.is_none_or(|max| *n <= max)
            }
            (FieldKind::Flag, Some(AnswerValue::Flag(_))) => true,
            _ => false,
        }
    }

    /// Short hint describing accepted input, e.g. `1-10` or `대중교통/자가용`.
    pub fn hint(&self) -> String {
        match self.kind {
            FieldKind::Text => String::new(),
            FieldKind::Choice(options) => describe(options),
            FieldKind::Integer { min, max: Some(max) } => format!("{}-{}", min, max),
            FieldKind::Integer { min, max: None } => format!("{} 이상", min),
            FieldKind::Flag => "y/n".to_string(),
        }
    }

    fn invalid(&self, reason: String) -> DomainError {
        DomainError::InvalidAnswer {
            field: self.name.to_string(),
            reason,
        }
    }
}

/// Look up an option by key, display value, or 1-based position.
pub fn find_choice<'a>(options: &'a [ChoiceOption], raw: &str) -> Option<&'a ChoiceOption> {
    if let Ok(index) = raw.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| options.get(i));
    }
    options
        .iter()
        .find(|option| option.key.eq_ignore_ascii_case(raw) || option.value == raw)
}

fn describe(options: &[ChoiceOption]) -> String {
    options
        .iter()
        .map(|option| option.value)
        .collect::<Vec<_>>()
        .join("/")
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" | "예" | "네" => Some(true),
        "n" | "no" | "false" | "0" | "아니오" | "아니요" => Some(false),
        _ => None,
    }
}
