//! Non-blocking user notifications.
//!
//! DESIGN
//! ======
//! Actions push a `Notice` instead of interrupting the user with a modal
//! alert. The `NoticeTray` component renders the queue and dismisses entries,
//! so action code stays testable without a browser.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// Auto-dismiss delay for tray entries.
pub const NOTICE_TIMEOUT_MS: u64 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "notice--success",
            Self::Error => "notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// FIFO queue of visible notices. Ids are unique for the life of the queue.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    next_id: u64,
    pub notices: Vec<Notice>,
}

impl NoticeState {
    /// Append a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice { id, kind, text: text.into() });
        id
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, text)
    }

    /// Remove a notice. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
