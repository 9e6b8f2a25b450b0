use std::collections::{BTreeSet, HashMap};

use serde_json::Value;

use crate::errors::ConversationError;
use crate::models::message::{Message, MessageId};
use crate::models::step::Step;

pub const GREETING: &str = "Hi! I'm your Book Buying Agent 📚

Tell me what book you want and I'll do the rest:
I'll find the best match, compare prices across bookstores, choose the best deal, and buy it for you automatically.

Fill the request below and submit it to run the agent.";

/// What a pending agent turn is rewritten to once its request settles.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub text: Value,
    pub steps: Vec<Step>,
}

impl Resolution {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Resolution {
            text: Value::String(text.into()),
            steps: Vec::new(),
        }
    }
}

/// The ordered list of turns shown to the user.
///
/// Messages are only ever appended. The single exception is an agent
/// placeholder, which is rewritten in place exactly once via [`Conversation::resolve`].
/// Lookups go through an id index so that several placeholders can be pending
/// and settle in any order.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    index: HashMap<MessageId, usize>,
    pending: BTreeSet<MessageId>,
    next_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// A conversation that opens with the agent's greeting turn.
    pub fn with_greeting() -> Self {
        let mut conversation = Self::new();
        let id = conversation.allocate_id();
        conversation.append(Message::agent(id, GREETING));
        conversation
    }

    pub fn push_user<S: Into<String>>(&mut self, text: S) -> MessageId {
        let id = self.allocate_id();
        self.append(Message::user(id, text));
        id
    }

    /// Append an agent turn that stands in for a response still in flight.
    pub fn push_placeholder(&mut self) -> MessageId {
        let id = self.allocate_id();
        self.append(Message::placeholder(id));
        self.pending.insert(id);
        id
    }

    /// Rewrite a pending placeholder with its settled content. Every other
    /// message is left untouched.
    pub fn resolve(
        &mut self,
        id: MessageId,
        resolution: Resolution,
    ) -> Result<&Message, ConversationError> {
        let position = *self
            .index
            .get(&id)
            .ok_or(ConversationError::UnknownMessage(id))?;
        if !self.pending.remove(&id) {
            return Err(ConversationError::NotPending(id));
        }

        let message = &mut self.messages[position];
        message.text = resolution.text;
        message.steps = resolution.steps;
        Ok(&*message)
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.index.get(&id).map(|&position| &self.messages[position])
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Ids of placeholders still waiting for a response, oldest first.
    pub fn pending(&self) -> Vec<MessageId> {
        self.pending.iter().copied().collect()
    }

    pub fn is_pending(&self, id: MessageId) -> bool {
        self.pending.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn allocate_id(&mut self) -> MessageId {
        self.next_id += 1;
        MessageId(self.next_id)
    }

    fn append(&mut self, message: Message) {
        self.index.insert(message.id, self.messages.len());
        self.messages.push(message);
    }
}
