//! Submitted application records

use crate::state::Application;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Review status attached at submission time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
}

/// Opaque identifier handed back by the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the form hands to the store: the application plus its status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    #[serde(flatten)]
    pub application: Application,
    pub status: ApplicationStatus,
}

impl NewApplication {
    pub fn pending(application: Application) -> Self {
        Self {
            application,
            status: ApplicationStatus::Pending,
        }
    }
}

/// A record as persisted, with the store-assigned parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredApplication {
    pub id: DocumentId,
    #[serde(flatten)]
    pub record: NewApplication,
    pub created_at: DateTime<Utc>,
}
