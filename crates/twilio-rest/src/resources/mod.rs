//! Record types, one per API resource.

mod account;
mod application;
mod chat_role;
mod chat_service;
mod key;
mod notify_service;
mod push_credential;

pub use account::{Account, AccountStatus, AccountType, CLOSED_STATUS};
pub use application::Application;
pub use chat_role::{ChatPermission, ChatRole, ChatRoleType};
pub use chat_service::{ChatService, ChatServiceLimits, ChatServiceMedia, ChatWebhookEvent};
pub use key::Key;
pub use notify_service::NotifyService;
pub use push_credential::{PushCredential, PushCredentialType};
