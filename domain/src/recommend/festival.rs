//! Festival domain: region, season and a free-only toggle.
//!
//! Wire body: `{region, season, isFree}`.
//! Success payload: `[{festivalName, date, location, description}, ...]`.

use super::answers::AnswerSet;
use super::card::ResultCard;
use super::domain::Domain;
use super::registry::DomainSpec;
use super::schema::{ChoiceOption, FieldKind, FieldSpec};
use crate::core::error::DomainError;
use serde::Deserialize;
use serde_json::{Value, json};

const REGIONS: &[ChoiceOption] = &[
    ChoiceOption {
        key: "seoul",
        value: "서울",
    },
    ChoiceOption {
        key: "gyeonggi",
        value: "경기",
    },
    ChoiceOption {
        key: "incheon",
        value: "인천",
    },
    ChoiceOption {
        key: "gangwon",
        value: "강원",
    },
    ChoiceOption {
        key: "chungcheong",
        value: "충청",
    },
    ChoiceOption {
        key: "jeolla",
        value: "전라",
    },
    ChoiceOption {
        key: "gyeongsang",
        value: "경상",
    },
    ChoiceOption {
        key: "jeju",
        value: "제주",
    },
];

const SEASONS: &[ChoiceOption] = &[
    ChoiceOption {
        key: "spring",
        value: "봄",
    },
    ChoiceOption {
        key: "summer",
        value: "여름",
    },
    ChoiceOption {
        key: "autumn",
        value: "가을",
    },
    ChoiceOption {
        key: "winter",
        value: "겨울",
    },
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "region",
        label: "어느 지역의 축제를 찾으시나요?",
        placeholder: None,
        kind: FieldKind::Choice(REGIONS),
        required: true,
    },
    FieldSpec {
        name: "season",
        label: "어느 계절에 가실 예정인가요?",
        placeholder: None,
        kind: FieldKind::Choice(SEASONS),
        required: true,
    },
    FieldSpec {
        name: "freeOnly",
        label: "무료 축제만 볼까요?",
        placeholder: None,
        kind: FieldKind::Flag,
        required: false,
    },
];

pub(crate) static SPEC: DomainSpec = DomainSpec {
    domain: Domain::Festival,
    title: "지역 축제",
    description: "지역과 계절로 찾는 축제 일정",
    endpoint: "/recommend/festival",
    fields: FIELDS,
    build_body,
    normalize,
};

fn build_body(answers: &AnswerSet) -> Value {
    json!({
        "region": answers.text("region"),
        "season": answers.text("season"),
        "isFree": answers.flag("freeOnly"),
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawFestival {
    festival_name: Option<String>,
    date: Option<String>,
    location: Option<String>,
    description: Option<String>,
}

fn normalize(payload: Value) -> Result<Vec<ResultCard>, DomainError> {
    if !payload.is_array() {
        return Err(malformed("expected a list of festivals"));
    }
    let festivals: Vec<RawFestival> =
        serde_json::from_value(payload).map_err(|e| malformed(&e.to_string()))?;

    Ok(festivals
        .into_iter()
        .map(|festival| {
            ResultCard::new(
                festival.festival_name.unwrap_or_default(),
                festival.description.unwrap_or_default(),
                festival.location.unwrap_or_default(),
            )
            .with_secondary(festival.date.unwrap_or_default())
        })
        .collect())
}

fn malformed(reason: &str) -> DomainError {
    DomainError::MalformedResponse {
        domain: Domain::Festival,
        reason: reason.to_string(),
    }
}
