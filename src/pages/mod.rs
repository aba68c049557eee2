//! Page components, one per route

pub mod chat;
pub mod history;
pub mod landing;
pub mod login;
pub mod register;
pub mod settings;
pub mod verify_email;

pub use chat::ChatPage;
pub use history::ChatHistoryPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use register::RegistrationPage;
pub use settings::ProfileSettingsPage;
pub use verify_email::EmailVerificationPage;
