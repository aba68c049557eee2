//! Domain types shared across pages and components

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Assistant conversation mode. Drives which canned responses are used and
/// how conversations are labelled throughout the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    Research,
    Coding,
    Creative,
}

impl ChatMode {
    pub const ALL: [ChatMode; 3] = [ChatMode::Research, ChatMode::Coding, ChatMode::Creative];

    pub fn id(self) -> &'static str {
        match self {
            ChatMode::Research => "research",
            ChatMode::Coding => "coding",
            ChatMode::Creative => "creative",
        }
    }

    pub fn from_id(id: &str) -> Option<ChatMode> {
        Self::ALL.into_iter().find(|mode| mode.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            ChatMode::Research => "Research Mode",
            ChatMode::Coding => "Coding Assistant",
            ChatMode::Creative => "Creative Studio",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ChatMode::Research => "Academic research and analysis",
            ChatMode::Coding => "Programming help and code review",
            ChatMode::Creative => "Creative writing and ideation",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ChatMode::Research => "📖",
            ChatMode::Coding => "💻",
            ChatMode::Creative => "🎨",
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single message in the chat transcript. Fenced code blocks are carried
/// inline in `content` and split out at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub mode: Option<ChatMode>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: MessageRole::User,
            content: content.into(),
            timestamp: Utc::now(),
            mode: None,
        }
    }

    pub fn assistant(content: impl Into<String>, mode: ChatMode) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            mode: Some(mode),
        }
    }
}

/// Summary of a stored conversation, as shown in the sidebar and the
/// history browser.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationSummary {
    pub id: u32,
    pub title: String,
    pub preview: String,
    pub mode: ChatMode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub message_count: u32,
    pub is_favorite: bool,
    pub tags: Vec<String>,
    pub snippet: String,
}

/// AI persona offered during registration and in profile settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Professional,
    Creative,
    Friendly,
    Technical,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::Professional,
        Persona::Creative,
        Persona::Friendly,
        Persona::Technical,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Persona::Professional => "professional",
            Persona::Creative => "creative",
            Persona::Friendly => "friendly",
            Persona::Technical => "technical",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Persona::Professional => "Professional Assistant",
            Persona::Creative => "Creative Companion",
            Persona::Friendly => "Friendly Guide",
            Persona::Technical => "Technical Expert",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Persona::Professional => "Formal, precise, and business-focused communication style",
            Persona::Creative => "Imaginative, inspiring, and artistic in approach",
            Persona::Friendly => "Warm, conversational, and approachable personality",
            Persona::Technical => "Detail-oriented, logical, and technically precise",
        }
    }

    pub fn traits(self) -> [&'static str; 3] {
        match self {
            Persona::Professional => ["Formal", "Analytical", "Efficient"],
            Persona::Creative => ["Creative", "Inspiring", "Artistic"],
            Persona::Friendly => ["Warm", "Supportive", "Casual"],
            Persona::Technical => ["Logical", "Precise", "Technical"],
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Persona::Professional => "💼",
            Persona::Creative => "🎨",
            Persona::Friendly => "💛",
            Persona::Technical => "⚙️",
        }
    }
}

/// State of the email verification screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    Pending,
    Verified,
    Expired,
}

/// Profile of the signed-in user. Mock data only.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub is_guest: bool,
}

impl UserProfile {
    pub fn guest() -> Self {
        Self {
            name: "Guest".to_string(),
            email: "guest@agnisai.com".to_string(),
            is_guest: true,
        }
    }
}

/// Registration data handed from the signup form to email verification via
/// localStorage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    pub persona: Option<String>,
    pub registered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_ids_round_trip() {
        for mode in ChatMode::ALL {
            assert_eq!(ChatMode::from_id(mode.id()), Some(mode));
        }
        assert_eq!(ChatMode::from_id("all"), None);
    }

    #[test]
    fn persona_ids_are_unique() {
        let ids: Vec<_> = Persona::ALL.iter().map(|p| p.id()).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
    }

    // Registration data crosses localStorage as JSON, timestamp included.
    #[test]
    fn registration_data_survives_json_storage() {
        let data = RegistrationData {
            name: "Alex Johnson".to_string(),
            email: "alex@example.com".to_string(),
            persona: Some("technical".to_string()),
            registered_at: Utc::now(),
        };
        let json = serde_json::to_string(&data).unwrap();
        let restored: RegistrationData = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.name, data.name);
        assert_eq!(restored.email, data.email);
        assert_eq!(restored.persona, data.persona);
        assert_eq!(restored.registered_at, data.registered_at);
    }
}
