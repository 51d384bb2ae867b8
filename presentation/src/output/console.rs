//! Console output formatter for recommendations and chat

use colored::Colorize;
use culturemate_domain::recommend::registry;
use culturemate_domain::{
    AnswerSet, AnswerValue, Domain, DomainError, Failure, FieldSpec, FlowError, FlowState,
    Message, Outcome, ResultCard, Role,
};
use serde_json::json;

/// Formats flow screens, result cards and chat messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Home screen: the numbered list of domains.
    pub fn format_home() -> String {
        let mut output = Self::header("CultureMate");
        output.push_str("\n\n");
        for (i, spec) in registry::all().enumerate() {
            output.push_str(&format!(
                "  {} {}  {}\n",
                format!("{}.", i + 1).cyan().bold(),
                spec.title.bold(),
                spec.description.dimmed()
            ));
        }
        output
    }

    /// Title line of the input screen.
    pub fn format_input_header(domain: Domain) -> String {
        let spec = registry::spec(domain);
        format!(
            "\n{}\n{}\n",
            spec.title.cyan().bold(),
            "-".repeat(40)
        )
    }

    /// One question of the input screen.
    pub fn format_field_prompt(field: &FieldSpec, current: Option<&AnswerValue>) -> String {
        let mut prompt = field.label.bold().to_string();

        let hint = field.hint();
        if !hint.is_empty() {
            prompt.push_str(&format!(" [{}]", hint));
        }
        if !field.required {
            prompt.push_str(&format!(" {}", "(선택)".dimmed()));
        }
        if let Some(value) = current {
            prompt.push_str(&format!(" {}", format!("현재: {}", value).green()));
        } else if let Some(placeholder) = field.placeholder {
            prompt.push_str(&format!(" {}", format!("예: {}", placeholder).dimmed()));
        }
        prompt
    }

    /// Filled-in answers in schema order.
    pub fn format_answers(answers: &AnswerSet) -> String {
        answers
            .entries()
            .map(|(field, value)| format!("  {} {}", format!("{}:", field.label).dimmed(), value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Result screen for the current outcome.
    pub fn format_result(state: &FlowState) -> String {
        match state.outcome() {
            Outcome::Idle => String::new(),
            Outcome::Loading(_) => format!("{}", "추천 결과를 불러오는 중...".dimmed()),
            Outcome::Ready(cards) => {
                let title = state
                    .domain()
                    .map(|domain| registry::spec(domain).title)
                    .unwrap_or("추천 결과");
                format!(
                    "\n{}\n\n{}",
                    format!("=== {} 추천 결과 ===", title).cyan().bold(),
                    Self::format_cards(cards)
                )
            }
            Outcome::Failed(failure) => Self::format_failure(failure),
        }
    }

    /// Cards in the order the backend returned them.
    pub fn format_cards(cards: &[ResultCard]) -> String {
        if cards.is_empty() {
            return format!("{}\n", "추천 결과가 없습니다.".yellow());
        }

        let mut output = String::new();
        for (i, card) in cards.iter().enumerate() {
            let title = match &card.icon {
                Some(icon) => format!("{} {}", icon, card.title),
                None => card.title.clone(),
            };
            output.push_str(&format!(
                "{} {}\n",
                format!("{}.", i + 1).cyan(),
                title.yellow().bold()
            ));
            if !card.location.is_empty() {
                output.push_str(&format!("   {} {}\n", "위치:".dimmed(), card.location));
            }
            if let Some(secondary) = &card.secondary {
                output.push_str(&format!("   {} {}\n", "정보:".dimmed(), secondary));
            }
            if !card.description.is_empty() {
                output.push_str(&Self::indent(&card.description, "   "));
                output.push('\n');
            }
            output.push('\n');
        }
        output
    }

    pub fn format_failure(failure: &Failure) -> String {
        format!("{} {}", "✗".red().bold(), failure.message.red())
    }

    /// Cards as pretty JSON
    pub fn format_json(cards: &[ResultCard]) -> String {
        serde_json::to_string_pretty(cards).unwrap_or_else(|_| "[]".to_string())
    }

    /// Failure as pretty JSON, `{"error": {"kind": ..., "message": ...}}`
    pub fn format_failure_json(failure: &Failure) -> String {
        serde_json::to_string_pretty(&json!({ "error": failure }))
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Highlighted one-line notice (validation problems, hints).
    pub fn format_notice(text: &str) -> String {
        format!("{} {}", "!".yellow().bold(), text)
    }

    /// Plain user-facing text for a rejected flow event.
    ///
    /// Returns `None` for events that are silently dropped.
    pub fn flow_error_text(error: &FlowError) -> Option<String> {
        if error.is_ignorable() {
            return None;
        }
        let text = match error {
            FlowError::Incomplete { domain, missing } => {
                let spec = registry::spec(*domain);
                let labels: Vec<_> = missing
                    .iter()
                    .map(|name| spec.field(name).map(|field| field.label).unwrap_or(*name))
                    .collect();
                format!("필수 항목을 모두 입력해주세요: {}", labels.join(", "))
            }
            FlowError::Answer(DomainError::InvalidAnswer { field, .. }) => {
                format!("'{}' 항목의 입력값을 확인해주세요.", field)
            }
            FlowError::Answer(DomainError::UnknownDomain(name)) => {
                format!("알 수 없는 추천 유형입니다: {}", name)
            }
            FlowError::Answer(DomainError::UnknownField { field, .. }) => {
                format!("알 수 없는 항목입니다: {}", field)
            }
            other => match other.kind() {
                Some(kind) => kind.user_message().to_string(),
                None => other.to_string(),
            },
        };
        Some(text)
    }

    /// One chat message with its role marker.
    pub fn format_message(message: &Message) -> String {
        let time = message.sent_at.format("%H:%M").to_string();
        match message.role {
            Role::User => format!("{} {} {}", time.dimmed(), "나:".green().bold(), message.text),
            Role::Bot => format!(
                "{} {}\n{}",
                time.dimmed(),
                "CultureMate:".cyan().bold(),
                Self::indent(&message.text, "  ")
            ),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(50);
        format!("{}\n{:^50}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
