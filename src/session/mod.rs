// src/session/mod.rs

//! Shopping sessions
//!
//! A session is created when the auth layer logs a user in, updated each time
//! the user adds a recipe to their cart, and removed on logout or expiry:
//!
//! ```text
//! nonexistent --add_session--> active --update_cart--> active
//!                                 |
//!                                 +--remove_session--> nonexistent
//! ```
//!
//! Tokens are opaque and always come from the caller.

mod model;
mod store;

pub use model::{QUANTITY_SEPARATOR, Session};
pub use store::SessionStore;
