//! Session credentials: redacted secrets and the access/refresh token pair.

pub mod secret;
pub mod tokens;

pub use secret::*;
pub use tokens::*;
