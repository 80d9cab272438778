pub mod session_store;

pub use session_store::{open_session_store, LocalSessionStore, MemorySessionStore, SessionStore};
