use std::cell::Cell;
use std::collections::VecDeque;

use anyhow::Result;
use bookbuy::models::message::Message;

use crate::prompt::{Input, InputType, Prompt};

/// A scripted prompt that records everything the session shows it.
pub struct MockPrompt {
    inputs: VecDeque<Input>,
    pub rendered: Vec<Message>,
    pub errors: Vec<String>,
    pub busy_shown: usize,
    pub closed: Cell<bool>,
}

impl MockPrompt {
    pub fn new(inputs: Vec<Input>) -> Self {
        MockPrompt {
            inputs: inputs.into(),
            rendered: Vec::new(),
            errors: Vec::new(),
            busy_shown: 0,
            closed: Cell::new(false),
        }
    }
}

impl Prompt for MockPrompt {
    fn render(&mut self, message: &Message) {
        self.rendered.push(message.clone());
    }

    fn get_input(&mut self) -> Result<Input> {
        // Exit once the script runs out
        Ok(self
            .inputs
            .pop_front()
            .unwrap_or_else(|| Input::command(InputType::Exit)))
    }

    fn show_busy(&mut self, _label: &str) {
        self.busy_shown += 1;
    }

    fn hide_busy(&mut self) {}

    fn report_error(&mut self, error: &str) {
        self.errors.push(error.to_string());
    }

    fn close(&self) {
        self.closed.set(true);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
