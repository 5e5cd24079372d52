//! Official-account wrappers.

pub mod auto_reply;
pub mod callback;
pub mod custom_service;
pub mod semantic;
pub mod shake_around;
pub mod short_url;
pub mod sns;

pub use auto_reply::*;
pub use callback::*;
pub use custom_service::*;
pub use semantic::*;
pub use shake_around::*;
pub use short_url::*;
pub use sns::*;
