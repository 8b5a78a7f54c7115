//! Field registry holding the live application snapshot

use super::application::Application;
use super::field::{CattleField, FieldPath, FieldValue};
use crate::error::FormError;

/// Owns the one live `Application` and applies edits to it.
///
/// Every edit swaps in a new snapshot; snapshots handed out earlier by
/// [`FormState::snapshot`] keep their contents.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    current: Application,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current application
    pub fn application(&self) -> &Application {
        &self.current
    }

    /// Owned copy of the current application
    pub fn snapshot(&self) -> Application {
        self.current.clone()
    }

    /// Replace one scalar outside the cattle sequence. No validation.
    pub fn set_field(
        &mut self,
        path: FieldPath,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        self.current = self.current.with_field(path, value.into())?;
        Ok(())
    }

    /// Like [`FormState::set_field`], addressed by dotted path
    pub fn set_field_by_path(&mut self, path: &str, value: &str) -> Result<(), FormError> {
        self.set_field(path.parse()?, value)
    }

    pub fn add_cattle_entry(&mut self) {
        self.current = self.current.with_cattle_entry();
    }

    /// Remove the entry at `index`. Keeps the last remaining entry.
    pub fn remove_cattle_entry(&mut self, index: usize) -> Result<(), FormError> {
        self.current = self.current.without_cattle_entry(index)?;
        Ok(())
    }

    pub fn set_cattle_field(
        &mut self,
        index: usize,
        field: CattleField,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        self.current = self.current.with_cattle_field(index, field, value.into())?;
        Ok(())
    }

    /// Discard everything entered and go back to the construction defaults
    pub fn reset(&mut self) {
        self.current = Application::default();
    }

    pub fn cattle_count(&self) -> usize {
        self.current.cattle().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::{ApplicantField, BankingField, FarmField, LoanField};
    use crate::state::forms::application::{CattleEntry, OwnershipType};

    fn filled_form() -> FormState {
        let mut form = FormState::new();
        form.set_field(FieldPath::Applicant(ApplicantField::Name), "Ravi")
            .unwrap();
        form.set_field(FieldPath::Farm(FarmField::LandSize), "5")
            .unwrap();
        form.set_cattle_field(0, CattleField::Breed, "Gir").unwrap();
        form.add_cattle_entry();
        form.set_cattle_field(1, CattleField::Breed, "Murrah")
            .unwrap();
        form
    }

    mod set_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_replaces_only_target() {
            let mut form = filled_form();
            let before = form.snapshot();
            form.set_field(FieldPath::Applicant(ApplicantField::Village), "Anand")
                .unwrap();

            let after = form.application();
            assert_eq!(after.applicant().village, "Anand");
            assert_eq!(after.applicant().name, "Ravi");
            assert_eq!(after.farm(), before.farm());
            assert_eq!(after.cattle(), before.cattle());
            assert_eq!(before.applicant().village, "");
        }

        #[test]
        fn test_performs_no_validation() {
            let mut form = FormState::new();
            form.set_field(FieldPath::Applicant(ApplicantField::Phone), "abc")
                .unwrap();
            assert_eq!(form.application().applicant().phone, "abc");
        }

        #[test]
        fn test_by_dotted_path() {
            let mut form = FormState::new();
            form.set_field_by_path("farm.ownershipType", "Owned")
                .unwrap();
            form.set_field_by_path("banking.ifscCode", "hdfc0001234")
                .unwrap();
            assert_eq!(
                form.application().farm().ownership_type,
                OwnershipType::Owned
            );
            assert_eq!(form.application().banking().ifsc_code, "HDFC0001234");
        }

        #[test]
        fn test_by_unknown_path() {
            let mut form = FormState::new();
            let before = form.snapshot();
            let err = form.set_field_by_path("loan.interest", "9").unwrap_err();
            assert_eq!(err, FormError::UnknownField("loan.interest".to_string()));
            assert_eq!(form.application(), &before);
        }

        #[test]
        fn test_wrong_kind_leaves_state() {
            let mut form = FormState::new();
            let before = form.snapshot();
            assert!(form
                .set_field(FieldPath::Loan(LoanField::Amount), true)
                .is_err());
            assert_eq!(form.application(), &before);
        }
    }

    mod cattle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_then_remove_round_trip() {
            let mut form = filled_form();
            let before = form.snapshot();
            form.add_cattle_entry();
            assert_eq!(form.cattle_count(), 3);
            form.remove_cattle_entry(2).unwrap();
            assert_eq!(form.application().cattle(), before.cattle());
        }

        #[test]
        fn test_remove_with_single_entry_is_noop() {
            let mut form = FormState::new();
            form.set_cattle_field(0, CattleField::Breed, "Gir").unwrap();
            let before = form.snapshot();
            form.remove_cattle_entry(0).unwrap();
            assert_eq!(form.cattle_count(), 1);
            assert_eq!(form.application(), &before);
        }

        #[test]
        fn test_remove_shifts_down() {
            let mut form = filled_form();
            form.remove_cattle_entry(0).unwrap();
            assert_eq!(form.cattle_count(), 1);
            assert_eq!(form.application().cattle()[0].breed, "Murrah");
        }

        #[test]
        fn test_remove_out_of_range() {
            let mut form = filled_form();
            assert_eq!(
                form.remove_cattle_entry(7),
                Err(FormError::IndexOutOfRange { index: 7, len: 2 })
            );
        }

        #[test]
        fn test_set_cattle_field_out_of_range() {
            let mut form = FormState::new();
            assert_eq!(
                form.set_cattle_field(1, CattleField::Quantity, "2"),
                Err(FormError::IndexOutOfRange { index: 1, len: 1 })
            );
        }

        #[test]
        fn test_added_entry_is_blank() {
            let mut form = filled_form();
            form.add_cattle_entry();
            assert_eq!(*form.application().cattle()[2], CattleEntry::default());
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_restores_defaults() {
            let mut form = filled_form();
            form.set_field(FieldPath::Loan(LoanField::Term), "24")
                .unwrap();
            form.set_field(FieldPath::Banking(BankingField::BankName), "SBI")
                .unwrap();
            form.reset();
            assert_eq!(form.application(), &Application::default());
            assert_eq!(form.application().loan().term, "12");
        }

        #[test]
        fn test_is_idempotent() {
            let mut once = filled_form();
            once.reset();
            let mut twice = filled_form();
            twice.reset();
            twice.reset();
            assert_eq!(once.application(), twice.application());
        }
    }
}
