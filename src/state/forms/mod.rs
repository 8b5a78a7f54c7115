//! Form domain layer
//!
//! The loan application value, the registry that owns it, and the field
//! addressing used to edit it.

mod application;
mod field;
mod form_state;
mod location;

pub use application::{
    Applicant, Application, Banking, CattleEntry, CattleType, Farm, Loan, LoanPurpose,
    OwnershipType, DEFAULT_LOAN_TERM,
};
pub use field::{
    ApplicantField, BankingField, CattleField, FarmField, FieldKind, FieldPath, FieldValue,
    LoanField,
};
pub use form_state::FormState;
pub use location::{focus_order, FieldLocation};
