use anyhow::Result;
use bookbuy::models::message::Message;

pub mod cliclack;

pub const HELP_TEXT: &str = "Commands:
/exit, /quit - End the session (waits for replies still in flight)
/wait - Wait until every pending reply has arrived
/template - Reset the input to the default request template
/help - Display this help message";

pub trait Prompt {
    /// Show one turn. Pending placeholders are never passed in.
    fn render(&mut self, message: &Message);
    fn get_input(&mut self) -> Result<Input>;
    fn show_busy(&mut self, label: &str);
    fn hide_busy(&mut self);
    /// Report a problem with the user's input without adding it to the conversation.
    fn report_error(&mut self, error: &str);
    fn close(&self);
    // Used for testing. Allows us to downcast to any type.
    #[cfg(test)]
    fn as_any(&self) -> &dyn std::any::Any;
}

pub struct Input {
    pub input_type: InputType,
    pub content: Option<String>, // Only set for messages
}

impl Input {
    pub fn message<S: Into<String>>(content: S) -> Self {
        Input {
            input_type: InputType::Message,
            content: Some(content.into()),
        }
    }

    pub fn command(input_type: InputType) -> Self {
        Input {
            input_type,
            content: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    AskAgain, // Ask the user for input again. Control flow command.
    Message,  // User submitted a request buffer
    Wait,     // Block until pending replies settle
    Exit,     // User wants to exit the session
}

/// Commands a prompt handles before anything reaches the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    Exit,
    Wait,
    Template,
    Help,
}

pub fn parse_command(text: &str) -> Option<SlashCommand> {
    match text.trim().to_ascii_lowercase().as_str() {
        "/exit" | "/quit" => Some(SlashCommand::Exit),
        "/wait" => Some(SlashCommand::Wait),
        "/template" => Some(SlashCommand::Template),
        "/help" | "/?" => Some(SlashCommand::Help),
        _ => None,
    }
}
