//! Response normalizer
//!
//! Dispatches a raw success payload to its domain's normalizer. Order of
//! the backend rows is preserved: no sorting, no deduplication.
//!
//! A 2xx object carrying a string `error` or `detail` is the backend
//! reporting a failure, whatever the domain.

use super::card::ResultCard;
use super::domain::Domain;
use super::registry;
use crate::core::error::DomainError;
use serde_json::Value;

pub fn normalize(domain: Domain, payload: Value) -> Result<Vec<ResultCard>, DomainError> {
    if let Some(message) = reported_error(&payload) {
        return Err(DomainError::BackendReported(message.to_string()));
    }
    (registry::spec(domain).normalize)(payload)
}

fn reported_error(payload: &Value) -> Option<&str> {
    let map = payload.as_object()?;
    ["error", "detail"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload_for(domain: Domain) -> Value {
        match domain {
            Domain::Exhibition => json!({"places": [
                {"icon": "🎨", "name": "C", "desc": "c", "location": "x", "price": "무료"},
                {"icon": "🎨", "name": "A", "desc": "a", "location": "y", "price": "무료"},
                {"icon": "🎨", "name": "C", "desc": "c", "location": "x", "price": "무료"},
            ]}),
            Domain::Festival => json!([
                {"festivalName": "C", "date": "5월", "location": "x", "description": "c"},
                {"festivalName": "A", "date": "4월", "location": "y", "description": "a"},
                {"festivalName": "C", "date": "5월", "location": "x", "description": "c"},
            ]),
            Domain::Tour => json!([
                {"title": "C", "address": "x", "description": "c"},
                {"title": "A", "address": "y", "description": "a"},
                {"title": "C", "address": "x", "description": "c"},
            ]),
        }
    }

    #[test]
    fn test_order_preserved_without_dedup() {
        for domain in Domain::ALL {
            let cards = normalize(domain, payload_for(domain)).unwrap();
            let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
            assert_eq!(titles, vec!["C", "A", "C"], "{}", domain);
        }
    }

    #[test]
    fn test_idempotent() {
        for domain in Domain::ALL {
            let first = normalize(domain, payload_for(domain)).unwrap();
            let second = normalize(domain, payload_for(domain)).unwrap();
            assert_eq!(first, second, "{}", domain);
        }
    }

    #[test]
    fn test_error_field_is_reported_for_every_domain() {
        for domain in Domain::ALL {
            let err = normalize(domain, json!({"error": "ES is not connected."})).unwrap_err();
            assert_eq!(
                err,
                DomainError::BackendReported("ES is not connected.".to_string()),
                "{}",
                domain
            );
        }
        let err = normalize(Domain::Festival, json!({"detail": "bad region"})).unwrap_err();
        assert_eq!(err.kind(), crate::core::error::ErrorKind::BackendError);
    }

    #[test]
    fn test_non_string_error_is_not_reported() {
        let cards = normalize(Domain::Exhibition, json!({"error": null, "places": []})).unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn test_tour_object_payload_is_malformed() {
        let err = normalize(Domain::Tour, json!({"results": []})).unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse { .. }));
    }
}
