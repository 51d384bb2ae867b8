//! One-shot recommendation from command-line answers

use crate::ConsoleFormatter;
use crate::cli::commands::OutputFormat;
use culturemate_application::{FlowController, RequestProgressNotifier};
use culturemate_domain::{Domain, ErrorKind, Failure, FlowError, Outcome};

/// Rendered outcome of a one-shot run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShotReport {
    pub output: String,
    /// Whether results were fetched; drives the exit status
    pub success: bool,
}

/// Walk the flow without prompting: start, apply every answer, submit.
///
/// Stops at the first rejected answer. Nothing is sent unless every answer
/// was accepted and the set is complete.
pub async fn run_one_shot(
    controller: &mut FlowController,
    domain: Domain,
    answers: &[(String, String)],
    format: OutputFormat,
    progress: &dyn RequestProgressNotifier,
) -> OneShotReport {
    if let Err(e) = prepare(controller, domain, answers) {
        return rejected(&e, format);
    }
    if let Err(e) = controller.submit(progress).await {
        return rejected(&e, format);
    }

    let state = controller.state();
    match (state.outcome(), format) {
        (Outcome::Ready(_), OutputFormat::Cards) => OneShotReport {
            output: ConsoleFormatter::format_result(state),
            success: true,
        },
        (Outcome::Ready(cards), OutputFormat::Json) => OneShotReport {
            output: ConsoleFormatter::format_json(cards),
            success: true,
        },
        (Outcome::Failed(failure), _) => failed(failure, format),
        // submit always resolves before returning
        (Outcome::Idle | Outcome::Loading(_), _) => {
            failed(&Failure::from_kind(ErrorKind::BackendError), format)
        }
    }
}

fn prepare(
    controller: &mut FlowController,
    domain: Domain,
    answers: &[(String, String)],
) -> Result<(), FlowError> {
    controller.restart();
    controller.start(domain)?;
    for (field, value) in answers {
        controller.edit(field, value)?;
    }
    Ok(())
}

fn rejected(error: &FlowError, format: OutputFormat) -> OneShotReport {
    let message = ConsoleFormatter::flow_error_text(error).unwrap_or_else(|| error.to_string());
    let kind = error.kind().unwrap_or(ErrorKind::ValidationIncomplete);
    failed(&Failure::new(kind, message), format)
}

fn failed(failure: &Failure, format: OutputFormat) -> OneShotReport {
    let output = match format {
        OutputFormat::Cards => ConsoleFormatter::format_failure(failure),
        OutputFormat::Json => ConsoleFormatter::format_failure_json(failure),
    };
    OneShotReport {
        output,
        success: false,
    }
}
