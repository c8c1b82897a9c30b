//! Contact persistence for the investment-planning wizard.
//!
//! The wizard remembers one trusted-contact record between sessions. This
//! crate defines the [`ContactStore`] trait plus a JSON-file
//! implementation for real use and an in-memory one for tests.

pub mod json_file;
pub mod memory;
pub mod store;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{CONTACT_KEY, ContactStore, StoreError};
