//! Exhibition domain: free-text question plus clarifying answers.
//!
//! Wire body: `{question, clarifying: {transport, duration, budget}}`.
//! Success payload: `{places: [{icon, name, desc, location, price}, ...]}`.

use super::answers::AnswerSet;
use super::card::ResultCard;
use super::domain::Domain;
use super::registry::DomainSpec;
use super::schema::{ChoiceOption, FieldKind, FieldSpec};
use crate::core::error::DomainError;
use serde::Deserialize;
use serde_json::{Value, json};

/// Example question shown as the input placeholder.
pub(crate) const EXAMPLE_QUESTION: &str = "서울 근교 축제 추천해줘";

const TRANSPORT: &[ChoiceOption] = &[
    ChoiceOption {
        key: "public",
        value: "대중교통",
    },
    ChoiceOption {
        key: "private",
        value: "자가용",
    },
];

const DURATION: &[ChoiceOption] = &[
    ChoiceOption {
        key: "day",
        value: "당일",
    },
    ChoiceOption {
        key: "overnight",
        value: "1박 이상",
    },
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "question",
        label: "어떤 곳을 추천받고 싶으신가요?",
        placeholder: Some(EXAMPLE_QUESTION),
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: "transport",
        label: "이동 수단은 어떻게 하시나요?",
        placeholder: None,
        kind: FieldKind::Choice(TRANSPORT),
        required: true,
    },
    FieldSpec {
        name: "duration",
        label: "하루 일정인가요, 숙박 포함인가요?",
        placeholder: None,
        kind: FieldKind::Choice(DURATION),
        required: true,
    },
    FieldSpec {
        name: "budget",
        label: "예산은 얼마 정도 생각하시나요? (원)",
        placeholder: Some("30000"),
        kind: FieldKind::Integer { min: 0, max: None },
        required: true,
    },
];

pub(crate) static SPEC: DomainSpec = DomainSpec {
    domain: Domain::Exhibition,
    title: "전시·문화 공간",
    description: "질문과 이동 수단, 일정, 예산에 맞춘 장소 추천",
    endpoint: "/recommend/exhibition",
    fields: FIELDS,
    build_body,
    normalize,
};

fn build_body(answers: &AnswerSet) -> Value {
    json!({
        "question": answers.text("question"),
        "clarifying": {
            "transport": answers.text("transport"),
            "duration": answers.text("duration"),
            "budget": answers.integer("budget"),
        },
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPlace {
    icon: Option<String>,
    name: Option<String>,
    desc: Option<String>,
    location: Option<String>,
    price: Option<String>,
}

/// Absent or malformed `places` means "no results", never an error.
fn normalize(payload: Value) -> Result<Vec<ResultCard>, DomainError> {
    let places = match payload {
        Value::Object(mut map) => map.remove("places"),
        _ => None,
    };
    let places: Vec<RawPlace> = places
        .and_then(|places| serde_json::from_value(places).ok())
        .unwrap_or_default();

    Ok(places
        .into_iter()
        .map(|place| {
            ResultCard::new(
                place.name.unwrap_or_default(),
                place.desc.unwrap_or_default(),
                place.location.unwrap_or_default(),
            )
            .with_secondary(place.price.unwrap_or_default())
            .with_icon(place.icon.unwrap_or_default())
        })
        .collect())
}
