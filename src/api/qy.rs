//! WeCom (enterprise WeChat) wrappers.

pub mod agent;
pub mod app_chat;
pub mod department;
pub mod media;
pub mod message;
pub mod misc;

pub use agent::*;
pub use app_chat::*;
pub use department::*;
pub use media::*;
pub use message::*;
pub use misc::*;
