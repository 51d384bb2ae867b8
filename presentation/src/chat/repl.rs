//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::input::{Input, LineSource};
use culturemate_application::{ChatController, NoProgress, RequestProgressNotifier};
use std::io;

/// Interactive chat REPL
pub struct ChatRepl {
    controller: ChatController,
    progress: Box<dyn RequestProgressNotifier>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(controller: ChatController) -> Self {
        Self {
            controller,
            progress: Box::new(NoProgress),
        }
    }

    /// Set the pending indicator shown while waiting for a reply
    pub fn with_progress(mut self, progress: Box<dyn RequestProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn controller(&self) -> &ChatController {
        &self.controller
    }

    /// Run the interactive REPL
    pub async fn run(&mut self, input: &mut dyn LineSource) -> io::Result<()> {
        self.print_welcome();

        loop {
            let line = match input.read_line()? {
                Input::Line(line) => line,
                Input::Interrupted => {
                    println!("^C");
                    continue;
                }
                Input::Eof => {
                    println!("안녕히 가세요!");
                    break;
                }
            };
            let line = line.trim();

            // Skip empty lines
            if line.is_empty() {
                continue;
            }

            if line.starts_with('/') || line == "exit" || line == "quit" {
                if self.handle_command(line) {
                    break;
                }
                continue;
            }

            if let Some(reply) = self.send(line).await {
                println!("{}", reply);
                println!();
            }
        }

        Ok(())
    }

    /// Send one message and return the formatted bot reply.
    ///
    /// Returns `None` for blank input.
    pub async fn send(&mut self, text: &str) -> Option<String> {
        self.controller
            .send(text, self.progress.as_ref())
            .await
            .map(ConsoleFormatter::format_message)
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           CultureMate - Chat Mode           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("문화·여행에 대해 무엇이든 물어보세요.");
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" | "quit" | "exit" => {
                println!("안녕히 가세요!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }
}
