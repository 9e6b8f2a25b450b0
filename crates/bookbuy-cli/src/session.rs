use anyhow::Result;
use bookbuy::controller::ChatController;
use bookbuy::errors::ConversationError;
use bookbuy::models::message::{Message, MessageId};
use bookbuy::providers::base::AgentApi;
use bookbuy::validator::parse_request;
use futures::future::join_all;
use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};
use tracing::warn;

use crate::prompt::{InputType, Prompt};

#[cfg(test)]
mod mock_agent;
#[cfg(test)]
mod mock_prompt;

type Settled = Result<Message, ConversationError>;
type InFlight = JoinHandle<Settled>;

/// An interactive chat with the agent.
///
/// Submissions run in the background; the user can keep typing while earlier
/// requests are still in flight. Agent turns that settled since the last prompt
/// are rendered just before asking for the next input.
pub struct Session<'a, A: AgentApi + 'static> {
    controller: ChatController<A>,
    prompt: Box<dyn Prompt + 'a>,
    // Running submissions, keyed by their placeholder.
    in_flight: Vec<(MessageId, InFlight)>,
    // Placeholders whose final text has not been shown yet, in submission order.
    unrendered: Vec<MessageId>,
}

impl<'a, A: AgentApi + 'static> Session<'a, A> {
    pub fn new(controller: ChatController<A>, prompt: Box<impl Prompt + 'a>) -> Self {
        Session {
            controller,
            prompt,
            in_flight: Vec::new(),
            unrendered: Vec::new(),
        }
    }

    pub async fn start(&mut self) -> Result<()> {
        let pending = self.controller.pending();
        for message in self.controller.snapshot() {
            if pending.contains(&message.id) {
                self.unrendered.push(message.id);
            } else {
                self.prompt.render(&message);
            }
        }

        loop {
            self.render_settled();

            let input = self.prompt.get_input()?;
            match input.input_type {
                InputType::Message => {
                    if let Some(content) = &input.content {
                        self.submit(content);
                    }
                }
                InputType::Wait => self.wait_for_pending().await,
                InputType::AskAgain => continue,
                InputType::Exit => break,
            }
        }

        // Nothing can be cancelled, so let outstanding replies land first.
        self.wait_for_pending().await;
        self.prompt.close();
        Ok(())
    }

    /// Submit one buffer and wait for its reply. A buffer that fails
    /// validation is returned as an error and nothing is sent.
    pub async fn headless_start(&mut self, buffer: &str) -> Result<()> {
        let request = parse_request(buffer)?;

        let submission = self.controller.begin(request);
        self.render_by_id(submission.user);

        self.prompt.show_busy("Waiting for the agent...");
        let result = self.controller.complete(submission).await;
        self.prompt.hide_busy();

        self.prompt.render(&result?);
        Ok(())
    }

    fn submit(&mut self, buffer: &str) {
        let request = match parse_request(buffer) {
            Ok(request) => request,
            Err(err) => {
                self.prompt.report_error(&err.to_string());
                return;
            }
        };

        let submission = self.controller.begin(request);
        self.render_by_id(submission.user);
        self.unrendered.push(submission.placeholder);

        let placeholder = submission.placeholder;
        let controller = self.controller.clone();
        self.in_flight.push((
            placeholder,
            tokio::spawn(async move { controller.complete(submission).await }),
        ));
    }

    async fn wait_for_pending(&mut self) {
        if !self.in_flight.is_empty() {
            let (ids, handles): (Vec<_>, Vec<_>) =
                std::mem::take(&mut self.in_flight).into_iter().unzip();

            self.prompt.show_busy("Waiting for replies...");
            let results = join_all(handles).await;
            self.prompt.hide_busy();

            for (id, result) in ids.into_iter().zip(results) {
                self.settle(id, result);
            }
        }
        self.render_settled();
    }

    fn settle(&mut self, placeholder: MessageId, result: Result<Settled, JoinError>) {
        let failure = match result {
            Ok(Ok(_)) => return,
            Ok(Err(e)) => e.to_string(),
            Err(e) => e.to_string(),
        };
        warn!(%placeholder, error = %failure, "submission did not settle");
        self.prompt
            .report_error(&format!("A reply was lost and will not be shown: {}", failure));
        // Its placeholder can never resolve now.
        self.unrendered.retain(|id| *id != placeholder);
    }

    fn render_settled(&mut self) {
        let (finished, running): (Vec<_>, Vec<_>) = std::mem::take(&mut self.in_flight)
            .into_iter()
            .partition(|(_, handle)| handle.is_finished());
        self.in_flight = running;
        for (id, handle) in finished {
            if let Some(result) = handle.now_or_never() {
                self.settle(id, result);
            }
        }

        let pending = self.controller.pending();
        let mut still_pending = Vec::new();
        for id in std::mem::take(&mut self.unrendered) {
            if pending.contains(&id) {
                still_pending.push(id);
            } else {
                self.render_by_id(id);
            }
        }
        self.unrendered = still_pending;
    }

    fn render_by_id(&mut self, id: MessageId) {
        if let Some(message) = self.controller.message(id) {
            self.prompt.render(&message);
        }
    }
}
