use dashmap::DashMap;
use poise::serenity_prelude::ChannelId;

/// Modal state of one chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingFeedback,
}

/// Per-chat session registry.
///
/// A chat absent from the map has not run `/start` yet. Modal feedback
/// collection is an explicit state transition here rather than a mutation of
/// the dispatch table, so concurrent handlers always see a defined state.
#[derive(Debug, Default)]
pub struct SessionMap {
    sessions: DashMap<ChannelId, SessionState>,
}

impl SessionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the chat, resetting any feedback collection in progress.
    pub fn start(&self, chat: ChannelId) {
        self.sessions.insert(chat, SessionState::Idle);
    }

    pub fn state(&self, chat: ChannelId) -> Option<SessionState> {
        self.sessions.get(&chat).map(|entry| *entry)
    }

    /// Idle → AwaitingFeedback. Returns false when the chat has no session.
    pub fn begin_feedback(&self, chat: ChannelId) -> bool {
        match self.sessions.get_mut(&chat) {
            Some(mut entry) => {
                *entry = SessionState::AwaitingFeedback;
                true
            }
            None => false,
        }
    }

    /// AwaitingFeedback → Idle. Returns whether the chat was collecting.
    pub fn end_feedback(&self, chat: ChannelId) -> bool {
        match self.sessions.get_mut(&chat) {
            Some(mut entry) if *entry == SessionState::AwaitingFeedback => {
                *entry = SessionState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn is_awaiting_feedback(&self, chat: ChannelId) -> bool {
        self.state(chat) == Some(SessionState::AwaitingFeedback)
    }
}
