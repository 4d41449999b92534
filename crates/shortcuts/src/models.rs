//! Identifiers shared between the dispatcher and its host

/// Unique identifier for a mail item as known to the host stores
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Navigable mail folders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Folder {
    Inbox,
    Starred,
    Sent,
    Drafts,
}

impl Folder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Folder::Inbox => "inbox",
            Folder::Starred => "starred",
            Folder::Sent => "sent",
            Folder::Drafts => "drafts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_id_conversions() {
        let id = MessageId::new("m1");
        assert_eq!(id.as_str(), "m1");
        assert_eq!(MessageId::from("m1"), id);
        assert_eq!(MessageId::from("m1".to_string()), id);
    }

    #[test]
    fn test_folder_names() {
        assert_eq!(Folder::Inbox.as_str(), "inbox");
        assert_eq!(Folder::Drafts.as_str(), "drafts");
    }
}
