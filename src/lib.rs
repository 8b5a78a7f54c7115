//! Cattle loan application core
//!
//! The form model and its edits (`state`), the validator (`validation`),
//! the submission state machine (`submission`) and the store it hands
//! finished applications to (`store`).

pub mod config;
pub mod error;
pub mod state;
pub mod store;
pub mod submission;
pub mod validation;
