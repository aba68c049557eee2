//! Reusable UI components

pub mod chat_input;
pub mod chat_message;
pub mod header;
pub mod loading;
pub mod particles;
pub mod sidebar;

pub use chat_input::ChatInput;
pub use chat_message::MessageBubble;
pub use header::Header;
pub use loading::{GateLoading, LoadingDots, LoadingSpinner, TypingIndicator};
pub use particles::ParticleBackground;
pub use sidebar::ChatSidebar;
