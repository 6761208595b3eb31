//! Atelier Session
//!
//! Owns the lifecycle of course helpers: configuration, the guarded load
//! protocol, and the per-topic [`Helper`] objects that render help.
//!
//! ```
//! use atelier_content::Topic;
//! use atelier_session::{LoadOutcome, Session};
//!
//! let mut session = Session::with_defaults();
//! assert_eq!(session.load(Topic::Docker, false), LoadOutcome::Loaded);
//! assert_eq!(session.load(Topic::Docker, false), LoadOutcome::AlreadyLoaded);
//! assert_eq!(session.load(Topic::Docker, true), LoadOutcome::Reloaded);
//! ```

pub mod config;
pub mod error;
pub mod helper;
pub mod session;

pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use helper::Helper;
pub use session::{LoadOutcome, Session};
