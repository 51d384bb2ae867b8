//! Interactive recommendation wizard
//!
//! Renders the home, input and result steps of a [`FlowController`] on the
//! terminal. Which screen is shown is decided solely by the flow state.

use crate::ConsoleFormatter;
use crate::input::{Input, LineSource};
use culturemate_application::{FlowController, NoProgress, RequestProgressNotifier};
use culturemate_domain::recommend::registry;
use culturemate_domain::{Domain, FieldSpec, Step};
use std::io;
use std::str::FromStr;
use tracing::debug;

/// What the input step asks the main loop to do next.
enum InputControl {
    Submit,
    Back,
    Restart,
    Quit,
}

/// Interactive home → input → result loop
pub struct FlowWizard {
    controller: FlowController,
    progress: Box<dyn RequestProgressNotifier>,
}

impl FlowWizard {
    pub fn new(controller: FlowController) -> Self {
        Self {
            controller,
            progress: Box::new(NoProgress),
        }
    }

    /// Set the pending indicator shown while a request is in flight
    pub fn with_progress(mut self, progress: Box<dyn RequestProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn controller(&self) -> &FlowController {
        &self.controller
    }

    /// Run until the user quits or input ends.
    pub async fn run(&mut self, input: &mut dyn LineSource) -> io::Result<()> {
        loop {
            let keep_going = match self.controller.state().step() {
                Step::Home => self.home(input)?,
                Step::Input => self.input(input).await?,
                Step::Result => self.result(input).await?,
            };
            if !keep_going {
                println!("안녕히 가세요!");
                return Ok(());
            }
        }
    }

    fn home(&mut self, input: &mut dyn LineSource) -> io::Result<bool> {
        println!("{}", ConsoleFormatter::format_home());
        println!("추천 유형을 선택하세요 (번호 또는 이름, /quit 종료)");

        loop {
            let line = match input.read_line()? {
                Input::Line(line) => line,
                Input::Interrupted => continue,
                Input::Eof => return Ok(false),
            };
            let line = line.trim();
            match line {
                "" => continue,
                "/quit" | "/exit" | "/q" | "quit" | "exit" => return Ok(false),
                "/help" | "/h" | "/?" => {
                    Self::print_help();
                    continue;
                }
                _ => {}
            }

            match parse_domain(line) {
                Some(domain) => {
                    if let Err(e) = self.controller.start(domain) {
                        debug!("Start rejected: {}", e);
                    }
                    return Ok(true);
                }
                None => println!(
                    "{}",
                    ConsoleFormatter::format_notice(&format!(
                        "알 수 없는 추천 유형입니다: {}",
                        line
                    ))
                ),
            }
        }
    }

    async fn input(&mut self, input: &mut dyn LineSource) -> io::Result<bool> {
        match self.fill_answers(input)? {
            InputControl::Quit => return Ok(false),
            InputControl::Back => {
                if let Err(e) = self.controller.back() {
                    debug!("Back rejected: {}", e);
                }
                return Ok(true);
            }
            InputControl::Restart => {
                self.controller.restart();
                return Ok(true);
            }
            InputControl::Submit => {}
        }

        if let Err(e) = self.controller.submit(self.progress.as_ref()).await {
            if let Some(text) = ConsoleFormatter::flow_error_text(&e) {
                println!("{}", ConsoleFormatter::format_notice(&text));
            }
        }
        Ok(true)
    }

    /// Ask every field of the selected domain in order.
    ///
    /// Enter keeps the current value; on an optional field without a value it
    /// leaves the field unset.
    fn fill_answers(&mut self, input: &mut dyn LineSource) -> io::Result<InputControl> {
        let Some(domain) = self.controller.state().domain() else {
            return Ok(InputControl::Back);
        };
        let spec = registry::spec(domain);

        println!("{}", ConsoleFormatter::format_input_header(domain));
        println!("(/back 이전 화면, /home 처음으로, /quit 종료)");

        for field in spec.fields {
            loop {
                let current = self
                    .controller
                    .state()
                    .answers()
                    .and_then(|answers| answers.get(field.name))
                    .cloned();
                println!("{}", ConsoleFormatter::format_field_prompt(field, current.as_ref()));

                let line = match input.read_line()? {
                    Input::Line(line) => line,
                    Input::Interrupted => return Ok(InputControl::Restart),
                    Input::Eof => return Ok(InputControl::Quit),
                };
                match line.trim() {
                    "/back" => return Ok(InputControl::Back),
                    "/home" | "/restart" => return Ok(InputControl::Restart),
                    "/quit" | "/exit" | "/q" => return Ok(InputControl::Quit),
                    "" if current.is_some() || !field.required => break,
                    "" => {
                        println!("{}", ConsoleFormatter::format_notice("필수 항목입니다."));
                        continue;
                    }
                    _ => {}
                }

                if self.edit(field, &line) {
                    break;
                }
            }
        }

        Ok(InputControl::Submit)
    }

    fn edit(&mut self, field: &FieldSpec, raw: &str) -> bool {
        match self.controller.edit(field.name, raw) {
            Ok(()) => true,
            Err(e) => {
                if let Some(text) = ConsoleFormatter::flow_error_text(&e) {
                    let hint = field.hint();
                    let text = if hint.is_empty() {
                        text
                    } else {
                        format!("{} ({})", text, hint)
                    };
                    println!("{}", ConsoleFormatter::format_notice(&text));
                }
                false
            }
        }
    }

    async fn result(&mut self, input: &mut dyn LineSource) -> io::Result<bool> {
        let state = self.controller.state();
        println!("{}", ConsoleFormatter::format_result(state));
        if let Some(answers) = state.answers() {
            println!("{}", ConsoleFormatter::format_answers(answers));
        }
        println!();
        println!("r: 다시 시도  e: 답변 수정  h: 처음으로  q: 종료");

        loop {
            let line = match input.read_line()? {
                Input::Line(line) => line,
                Input::Interrupted => continue,
                Input::Eof => return Ok(false),
            };
            match line.trim() {
                "r" | "/retry" => {
                    if let Err(e) = self.controller.submit(self.progress.as_ref()).await {
                        if let Some(text) = ConsoleFormatter::flow_error_text(&e) {
                            println!("{}", ConsoleFormatter::format_notice(&text));
                        }
                    }
                    return Ok(true);
                }
                "e" | "/edit" => {
                    if let Err(e) = self.controller.revise() {
                        debug!("Revise rejected: {}", e);
                    }
                    return Ok(true);
                }
                "h" | "/home" | "/restart" => {
                    self.controller.restart();
                    return Ok(true);
                }
                "q" | "/quit" | "/exit" => return Ok(false),
                _ => continue,
            }
        }
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  1-3, 이름      - 추천 유형 선택 (exhibition, festival, tour)");
        println!("  /back         - 입력 화면에서 이전 화면으로");
        println!("  /home         - 처음으로");
        println!("  /quit, /q     - 종료");
        println!();
    }
}

/// Resolve a home-screen selection: 1-based number, domain name, or title.
pub fn parse_domain(raw: &str) -> Option<Domain> {
    if let Ok(index) = raw.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| Domain::ALL.get(i).copied());
    }
    Domain::from_str(raw)
        .ok()
        .or_else(|| registry::all().find(|spec| spec.title == raw).map(|spec| spec.domain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::ScriptedInput;
    use crate::testing::StubGateway;
    use culturemate_application::GatewayError;
    use culturemate_domain::{ErrorKind, FlowState};
    use serde_json::json;
    use std::sync::Arc;

    fn wizard(gateway: Arc<StubGateway>) -> FlowWizard {
        FlowWizard::new(FlowController::new(gateway))
    }

    #[test]
    fn test_parse_domain() {
        assert_eq!(parse_domain("1"), Some(Domain::Exhibition));
        assert_eq!(parse_domain("3"), Some(Domain::Tour));
        assert_eq!(parse_domain("Festival"), Some(Domain::Festival));
        assert_eq!(parse_domain("지역 축제"), Some(Domain::Festival));
        assert_eq!(parse_domain("0"), None);
        assert_eq!(parse_domain("4"), None);
        assert_eq!(parse_domain("museum"), None);
    }

    #[tokio::test]
    async fn test_full_walkthrough_reaches_results() {
        let gateway = Arc::new(StubGateway::new(vec![Ok(json!([
            {"festivalName": "벚꽃축제", "location": "여의도", "date": "4월", "description": "봄"}
        ]))]));
        let mut wizard = wizard(gateway.clone());
        // festival: region, season, freeOnly (optional, skipped), then quit on result
        let mut input = ScriptedInput::new(&["2", "서울", "봄", "", "q"]);

        wizard.run(&mut input).await.unwrap();

        let state = wizard.controller().state();
        assert_eq!(state.step(), Step::Result);
        assert_eq!(state.results().unwrap()[0].title, "벚꽃축제");
        assert_eq!(gateway.endpoints(), vec!["/recommend/festival".to_string()]);
    }

    #[tokio::test]
    async fn test_invalid_answer_is_asked_again() {
        let gateway = Arc::new(StubGateway::new(vec![Ok(json!([]))]));
        let mut wizard = wizard(gateway);
        let mut input = ScriptedInput::new(&[
            "tour", "", "바다", "열개", "20", // out of range: submit rejected
            "", "3", // asked again, query kept
            "q",
        ]);

        wizard.run(&mut input).await.unwrap();

        let answers = wizard.controller().state().answers().unwrap();
        assert_eq!(answers.integer("topK"), Some(3));
        assert_eq!(wizard.controller().state().results(), Some(&[][..]));
    }

    #[tokio::test]
    async fn test_back_returns_home() {
        let gateway = Arc::new(StubGateway::new(vec![]));
        let mut wizard = wizard(gateway.clone());
        let mut input = ScriptedInput::new(&["1", "/back"]);

        wizard.run(&mut input).await.unwrap();

        assert_eq!(wizard.controller().state(), &FlowState::new());
        assert!(gateway.endpoints().is_empty());
    }

    #[tokio::test]
    async fn test_revise_keeps_answers_and_retry_resends() {
        let gateway = Arc::new(StubGateway::new(vec![
            Err(GatewayError::Timeout),
            Ok(json!([])),
            Ok(json!([])),
        ]));
        let mut wizard = wizard(gateway.clone());
        let mut input = ScriptedInput::new(&[
            "tour", "바다", "5", // submit -> timeout
            "r", // retry -> empty results
            "e", "", "7", // revise: keep query, change topK
            "q",
        ]);

        wizard.run(&mut input).await.unwrap();

        let state = wizard.controller().state();
        assert_eq!(state.answers().unwrap().text("query"), "바다");
        assert_eq!(state.answers().unwrap().integer("topK"), Some(7));
        assert_eq!(gateway.endpoints().len(), 3);
    }

    #[tokio::test]
    async fn test_failure_is_shown_on_result_step() {
        let gateway = Arc::new(StubGateway::new(vec![Err(GatewayError::ConnectionError(
            "refused".to_string(),
        ))]));
        let mut wizard = wizard(gateway);
        let mut input = ScriptedInput::new(&["3", "바다", "5", "q"]);

        wizard.run(&mut input).await.unwrap();

        let failure = wizard.controller().state().error().unwrap();
        assert_eq!(failure.kind, ErrorKind::TransportUnreachable);
    }
}
