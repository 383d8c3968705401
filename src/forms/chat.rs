use chrono::Utc;
use uuid::Uuid;

use crate::models::{Message, Sender};

/// Appends the draft as a message from the local user. Blank drafts are ignored.
pub fn send(messages: &mut Vec<Message>, draft: &str) -> bool {
    if draft.trim().is_empty() {
        return false;
    }
    messages.push(Message {
        id: Uuid::new_v4().to_string(),
        sender: Sender::User,
        content: draft.to_string(),
        timestamp: Utc::now(),
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn send_appends_at_the_end() {
        let mut msgs = mock::seed_conversation();
        assert!(send(&mut msgs, "Timeline attached."));
        let last = msgs.last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.content, "Timeline attached.");
        assert_eq!(msgs.len(), 6);
    }

    #[test]
    fn blank_drafts_are_ignored() {
        let mut msgs = Vec::new();
        assert!(!send(&mut msgs, "   "));
        assert!(msgs.is_empty());
    }
}
