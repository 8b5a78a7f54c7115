//! Persistence for submitted applications

mod jsonl;
mod record;
mod traits;

pub use jsonl::{JsonlStore, STORE_FILE_NAME};
pub use record::{ApplicationStatus, DocumentId, NewApplication, StoredApplication};
pub use traits::ApplicationStore;

#[cfg(test)]
pub use traits::MockApplicationStore;
