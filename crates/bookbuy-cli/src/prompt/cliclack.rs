use std::io::{self, Write};

use anyhow::Result;
use bat::WrappingMode;
use bookbuy::models::message::{Message, Sender};
use bookbuy::models::request::DEFAULT_REQUEST_TEMPLATE;
use bookbuy::models::step::Step;
use bookbuy::render::{display_text, display_value};
use cliclack::{input, spinner};
use console::style;
use tracing::warn;

use super::{parse_command, Input, InputType, Prompt, SlashCommand, HELP_TEXT};

const THEME: &str = "zenburn";

pub struct CliclackPrompt {
    spinner: Option<cliclack::ProgressBar>,
    // What the next input starts from: the template, or the last thing submitted.
    buffer: String,
}

impl CliclackPrompt {
    pub fn new() -> Self {
        CliclackPrompt {
            spinner: None,
            buffer: DEFAULT_REQUEST_TEMPLATE.to_string(),
        }
    }
}

impl Default for CliclackPrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn print_request(content: &str) {
    let result = bat::PrettyPrinter::new()
        .input(bat::Input::from_bytes(content.as_bytes()).name("You"))
        .theme(THEME)
        .language("JSON")
        .grid(true)
        .header(true)
        .wrapping_mode(WrappingMode::Character)
        .print();
    if let Err(e) = result {
        warn!(error = %e, "could not highlight request");
        println!("{}", content);
    }
}

fn print(content: &str) {
    let result = bat::PrettyPrinter::new()
        .input(bat::Input::from_bytes(content.as_bytes()))
        .theme(THEME)
        .language("Markdown")
        .wrapping_mode(WrappingMode::Character)
        .print();
    if let Err(e) = result {
        warn!(error = %e, "could not highlight reply");
        println!("{}", content);
    }
}

fn step_header(step: &Step) -> String {
    match step.attempt {
        Some(attempt) => format!("─── {} (attempt {}) ───", step.module, attempt),
        None => format!("─── {} ───", step.module),
    }
}

fn print_steps(steps: &[Step]) {
    if steps.is_empty() {
        return;
    }
    println!("{}", style("Agent Actions:").bold());
    for step in steps {
        println!("{}", style(step_header(step)).dim());
        println!("{} {}", style("Prompt:").cyan(), display_value(&step.prompt));
        println!("{} {}", style("Response:").green(), display_value(&step.response));
    }
}

impl Prompt for CliclackPrompt {
    fn render(&mut self, message: &Message) {
        match message.sender {
            Sender::User => print_request(&display_text(&message.text)),
            Sender::Agent => {
                print(&display_text(&message.text));
                print_steps(&message.steps);
            }
        }

        println!();
        io::stdout().flush().unwrap_or_else(|e| warn!(error = %e, "failed to flush stdout"));
    }

    fn show_busy(&mut self, label: &str) {
        let spin = spinner();
        spin.start(label);
        self.spinner = Some(spin);
    }

    fn hide_busy(&mut self) {
        if let Some(spin) = self.spinner.take() {
            spin.stop("");
        }
    }

    fn report_error(&mut self, error: &str) {
        let _ = cliclack::log::error(error);
    }

    fn get_input(&mut self) -> Result<Input> {
        let text: String = match input("Request JSON         [Help: /help]")
            .default_input(&self.buffer)
            .multiline()
            .interact()
        {
            Ok(text) => text,
            // Ctrl+C ends the session like /exit
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                return Ok(Input::command(InputType::Exit))
            }
            Err(e) => return Err(e.into()),
        };

        let input = match parse_command(&text) {
            Some(SlashCommand::Exit) => Input::command(InputType::Exit),
            Some(SlashCommand::Wait) => Input::command(InputType::Wait),
            Some(SlashCommand::Template) => {
                self.buffer = DEFAULT_REQUEST_TEMPLATE.to_string();
                Input::command(InputType::AskAgain)
            }
            Some(SlashCommand::Help) => {
                println!("{}", HELP_TEXT);
                Input::command(InputType::AskAgain)
            }
            None => {
                self.buffer = text.trim().to_string();
                Input::message(self.buffer.clone())
            }
        };
        Ok(input)
    }

    fn close(&self) {
        let _ = cliclack::outro("Goodbye!");
    }

    #[cfg(test)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
