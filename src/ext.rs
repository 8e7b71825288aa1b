//! Public extension contracts the embedding front-end implements.
//!
//! The crate never navigates anywhere itself: when a session cannot be renewed it clears the
//! stored credentials and hands control to a [`SessionHook`], which is where a UI sends the
//! user back to its login entry point.

pub mod session_hook;

pub use session_hook::*;
