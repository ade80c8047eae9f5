mod profile;
mod store;

pub use profile::{DEFAULT_VISITOR_NAME, USER_NAME_KEY, VisitorProfile};
pub use store::{FileStore, KeyValueStore, MemoryStore};
