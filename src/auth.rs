//! Auth-domain identifiers, scope keys, and time-bounded credentials.

pub mod credential;
pub mod id;
pub mod key;
pub mod secret;

pub use credential::*;
pub use id::*;
pub use key::*;
pub use secret::*;
