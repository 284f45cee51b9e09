//! Session and runner for single-turn agent calls.
//!
//! Each call builds a fresh in-memory [`Session`], sends one user message
//! through a [`Runner`], and concatenates the text of the final response.

use super::definition::Agent;
use crate::llm::types::{ROLE_MODEL, ROLE_USER};
use crate::llm::{Content, GenerateRequest, GenerativeModel, LlmError, ModelEvent};
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

const DEFAULT_USER_ID: &str = "user1";
const DEFAULT_SESSION_ID: &str = "session1";

/// Something that happened in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// `user` or the agent name.
    pub author: String,
    pub content: Option<Content>,
    /// Streaming chunk that is superseded by a later final event.
    pub partial: bool,
}

impl Event {
    fn user(message: &str) -> Self {
        Self {
            author: ROLE_USER.to_string(),
            content: Some(Content::text(Some(ROLE_USER), message)),
            partial: false,
        }
    }

    fn from_model(author: &str, event: ModelEvent) -> Self {
        Self {
            author: author.to_string(),
            content: event.content,
            partial: event.partial,
        }
    }

    pub fn is_final_response(&self) -> bool {
        !self.partial && self.author != ROLE_USER
    }

    /// Text parts of this event, in order.
    pub fn text_parts(&self) -> impl Iterator<Item = &str> {
        self.content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
    }
}

/// In-memory conversation state for one agent call.
#[derive(Debug, Clone)]
pub struct Session {
    pub app_name: String,
    pub user_id: String,
    pub id: String,
    events: Vec<Event>,
}

impl Session {
    pub fn new(app_name: &str, user_id: &str, id: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            user_id: user_id.to_string(),
            id: id.to_string(),
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Conversation history as request contents. Partial events are left out.
    pub fn history(&self) -> Vec<Content> {
        self.events
            .iter()
            .filter(|e| !e.partial)
            .filter_map(|e| {
                let content = e.content.as_ref()?;
                let role = if e.author == ROLE_USER {
                    ROLE_USER
                } else {
                    ROLE_MODEL
                };
                Some(Content {
                    role: Some(role.to_string()),
                    parts: content.parts.clone(),
                })
            })
            .collect()
    }
}

/// Runs an agent against a model within a session.
pub struct Runner<'a> {
    agent: &'a Agent,
    model: &'a dyn GenerativeModel,
}

impl<'a> Runner<'a> {
    pub fn new(agent: &'a Agent, model: &'a dyn GenerativeModel) -> Self {
        Self { agent, model }
    }

    /// Append `message` to the session, call the model and return the new events.
    pub async fn run(&self, session: &mut Session, message: &str) -> Result<Vec<Event>, LlmError> {
        session.events.push(Event::user(message));

        let request = GenerateRequest {
            model: self.agent.model.clone(),
            system_instruction: self.agent.instruction.to_string(),
            contents: session.history(),
            google_search: self.agent.google_search,
            temperature: self.agent.temperature,
        };

        debug!(
            "Running {} in session {}/{}/{}",
            self.agent.kind, session.app_name, session.user_id, session.id
        );

        let model_events = self.model.generate(&request).await?;
        let events: Vec<Event> = model_events
            .into_iter()
            .map(|e| Event::from_model(self.agent.name(), e))
            .collect();

        session.events.extend(events.iter().cloned());
        Ok(events)
    }
}

/// Send one message to an agent and return the text of its final response.
///
/// Every non-empty text part of every final-response event is appended
/// followed by a newline. The result may be empty.
pub async fn call_agent(model: &dyn GenerativeModel, agent: &Agent, message: &str) -> Result<String> {
    let mut session = Session::new(agent.name(), DEFAULT_USER_ID, DEFAULT_SESSION_ID);
    let runner = Runner::new(agent, model);

    let events = runner
        .run(&mut session, message)
        .await
        .with_context(|| format!("{} call failed", agent.kind))?;
    debug!("Session {} now holds {} events", session.id, session.events().len());

    let mut final_response = String::new();
    for event in events.iter().filter(|e| e.is_final_response()) {
        for text in event.text_parts().filter(|t| !t.is_empty()) {
            final_response.push_str(text);
            final_response.push('\n');
        }
    }

    if final_response.trim().is_empty() {
        warn!("{} returned an empty response", agent.kind);
    } else {
        info!("{} responded with {} bytes", agent.kind, final_response.len());
    }

    Ok(final_response)
}

/// Message sent to each specialist: the code embedded verbatim.
pub fn specialist_message(code: &str) -> String {
    format!("Okay, let's analyze this {}...", code)
}
