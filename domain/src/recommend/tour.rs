//! Tour domain: semantic search over tourist sites.
//!
//! Wire body: `{query, top_k}`.
//! Success payload: `[{title, address, description}, ...]`.

use super::answers::AnswerSet;
use super::card::ResultCard;
use super::domain::Domain;
use super::registry::DomainSpec;
use super::schema::{FieldKind, FieldSpec};
use crate::core::error::DomainError;
use serde::Deserialize;
use serde_json::{Value, json};

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "query",
        label: "어떤 관광지를 찾고 계신가요?",
        placeholder: Some("바다가 보이는 한적한 곳"),
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: "topK",
        label: "몇 곳을 추천받을까요?",
        placeholder: Some("5"),
        kind: FieldKind::Integer {
            min: 1,
            max: Some(10),
        },
        required: true,
    },
];

pub(crate) static SPEC: DomainSpec = DomainSpec {
    domain: Domain::Tour,
    title: "관광지 검색",
    description: "자유로운 문장으로 찾는 관광지",
    endpoint: "/search/tour",
    fields: FIELDS,
    build_body,
    normalize,
};

fn build_body(answers: &AnswerSet) -> Value {
    json!({
        "query": answers.text("query"),
        "top_k": answers.integer("topK"),
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSite {
    title: Option<String>,
    address: Option<String>,
    description: Option<String>,
}

fn normalize(payload: Value) -> Result<Vec<ResultCard>, DomainError> {
    if !payload.is_array() {
        return Err(malformed("expected a list of sites"));
    }
    let sites: Vec<RawSite> =
        serde_json::from_value(payload).map_err(|e| malformed(&e.to_string()))?;

    Ok(sites
        .into_iter()
        .map(|site| {
            ResultCard::new(
                site.title.unwrap_or_default(),
                site.description.unwrap_or_default(),
                site.address.unwrap_or_default(),
            )
        })
        .collect())
}

fn malformed(reason: &str) -> DomainError {
    DomainError::MalformedResponse {
        domain: Domain::Tour,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_body_uses_snake_case_top_k() {
        let mut answers = AnswerSet::empty(Domain::Tour);
        answers.set("query", "바다가 보이는 카페").unwrap();
        answers.set("topK", "3").unwrap();
        assert_eq!(
            build_body(&answers),
            json!({"query": "바다가 보이는 카페", "top_k": 3})
        );
    }

    #[test]
    fn test_normalize_leaves_secondary_empty() {
        let payload = json!([
            {"title": "경복궁", "address": "서울 종로구 사직로 161", "description": "조선의 법궁"}
        ]);
        let cards = normalize(payload).unwrap();
        assert_eq!(cards[0].title, "경복궁");
        assert_eq!(cards[0].location, "서울 종로구 사직로 161");
        assert!(cards[0].secondary.is_none());
    }

    #[test]
    fn test_null_address_keeps_the_row() {
        let payload = json!([{"title": "경복궁", "address": null, "description": "조선의 법궁"}]);
        let cards = normalize(payload).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].location, "");
    }

    #[test]
    fn test_object_payload_is_malformed() {
        let err = normalize(json!({"title": "경복궁"})).unwrap_err();
        assert_eq!(err.kind(), crate::core::error::ErrorKind::MalformedResponse);
    }
}
