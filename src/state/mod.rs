//! Client-side state stores.
//!
//! Explicit store objects, one per concern, owned by the [`crate::app::App`]
//! and passed by reference, never ambient singletons. Each exposes only its
//! synchronization operations; state fields are replaced from server
//! responses, never merged.

pub mod books;
pub mod charms;
pub mod session;

pub use books::BookStore;
pub use charms::CharmStore;
pub use session::SessionStore;
