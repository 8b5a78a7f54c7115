//! Application validation
//!
//! Rules run in a fixed order and the first failure wins; the caller gets
//! one reason at a time, never a list.

use crate::state::{
    ApplicantField, Application, BankingField, CattleField, FarmField, FieldLocation, FieldPath,
    LoanField,
};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// The first rule an application breaks.
///
/// `Display` gives the message shown to the user. Entry numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter valid 12-digit Aadhar number")]
    InvalidAadhar,
    #[error("Please enter valid 10-digit phone number")]
    InvalidPhone,
    #[error("Please enter valid land size")]
    InvalidLandSize,
    #[error("Please enter breed for cattle #{entry}")]
    MissingBreed { entry: usize },
    #[error("Please enter valid quantity for cattle #{entry}")]
    InvalidQuantity { entry: usize },
    #[error("Please enter insurance details for cattle #{entry}")]
    MissingInsuranceDetails { entry: usize },
    #[error("Please enter a valid loan amount")]
    InvalidLoanAmount,
    #[error("Please enter valid account number")]
    InvalidAccountNumber,
    #[error("Please enter valid IFSC code")]
    InvalidIfsc,
}

impl ValidationError {
    /// The field the user has to fix
    pub fn location(&self) -> FieldLocation {
        match self {
            Self::MissingName => FieldPath::Applicant(ApplicantField::Name).into(),
            Self::InvalidAadhar => FieldPath::Applicant(ApplicantField::AadharNumber).into(),
            Self::InvalidPhone => FieldPath::Applicant(ApplicantField::Phone).into(),
            Self::InvalidLandSize => FieldPath::Farm(FarmField::LandSize).into(),
            Self::MissingBreed { entry } => FieldLocation::Cattle {
                index: entry - 1,
                field: CattleField::Breed,
            },
            Self::InvalidQuantity { entry } => FieldLocation::Cattle {
                index: entry - 1,
                field: CattleField::Quantity,
            },
            Self::MissingInsuranceDetails { entry } => FieldLocation::Cattle {
                index: entry - 1,
                field: CattleField::InsuranceDetails,
            },
            Self::InvalidLoanAmount => FieldPath::Loan(LoanField::Amount).into(),
            Self::InvalidAccountNumber => FieldPath::Banking(BankingField::AccountNumber).into(),
            Self::InvalidIfsc => FieldPath::Banking(BankingField::IfscCode).into(),
        }
    }
}

fn aadhar_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{12}$").expect("valid aadhar regex"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"))
}

fn account_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{9,18}$").expect("valid account regex"))
}

fn ifsc_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("valid ifsc regex"))
}

/// Non-empty after trimming and parses to a finite decimal
fn is_number(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.parse::<f64>().is_ok_and(f64::is_finite)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check an application snapshot, stopping at the first broken rule
pub fn validate(app: &Application) -> Result<(), ValidationError> {
    let applicant = app.applicant();
    if is_blank(&applicant.name) {
        return Err(ValidationError::MissingName);
    }
    if !aadhar_re().is_match(&applicant.aadhar_number) {
        return Err(ValidationError::InvalidAadhar);
    }
    if !phone_re().is_match(&applicant.phone) {
        return Err(ValidationError::InvalidPhone);
    }

    if !is_number(&app.farm().land_size) {
        return Err(ValidationError::InvalidLandSize);
    }

    for (index, cattle) in app.cattle().iter().enumerate() {
        let entry = index + 1;
        if is_blank(&cattle.breed) {
            return Err(ValidationError::MissingBreed { entry });
        }
        if !is_number(&cattle.quantity) {
            return Err(ValidationError::InvalidQuantity { entry });
        }
        if cattle.insurance_status && is_blank(&cattle.insurance_details) {
            return Err(ValidationError::MissingInsuranceDetails { entry });
        }
    }

    if !is_number(&app.loan().amount) {
        return Err(ValidationError::InvalidLoanAmount);
    }

    let banking = app.banking();
    if !account_re().is_match(&banking.account_number) {
        return Err(ValidationError::InvalidAccountNumber);
    }
    if !ifsc_re().is_match(&banking.ifsc_code) {
        return Err(ValidationError::InvalidIfsc);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormState;

    /// A form that passes every rule
    fn valid_form() -> FormState {
        let mut form = FormState::new();
        form.set_field_by_path("applicant.name", "Ravi").unwrap();
        form.set_field_by_path("applicant.aadharNumber", "111122223333")
            .unwrap();
        form.set_field_by_path("applicant.phone", "9998887777")
            .unwrap();
        form.set_field_by_path("farm.landSize", "5").unwrap();
        form.set_cattle_field(0, CattleField::Breed, "Gir").unwrap();
        form.set_cattle_field(0, CattleField::Quantity, "2").unwrap();
        form.set_field_by_path("loan.amount", "50000").unwrap();
        form.set_field_by_path("banking.accountNumber", "123456789")
            .unwrap();
        form.set_field_by_path("banking.ifscCode", "SBIN0001234")
            .unwrap();
        form
    }

    fn with(path: &str, value: &str) -> Application {
        let mut form = valid_form();
        form.set_field_by_path(path, value).unwrap();
        form.snapshot()
    }

    mod scenarios {
        use super::*;

        #[test]
        fn test_complete_application_is_valid() {
            assert_eq!(validate(valid_form().application()), Ok(()));
        }

        #[test]
        fn test_insured_without_details_fails_on_entry_one() {
            let mut form = valid_form();
            form.set_cattle_field(0, CattleField::InsuranceStatus, true)
                .unwrap();
            let err = validate(form.application()).unwrap_err();
            assert_eq!(err, ValidationError::MissingInsuranceDetails { entry: 1 });
            assert_eq!(
                err.to_string(),
                "Please enter insurance details for cattle #1"
            );
        }

        #[test]
        fn test_insured_with_details_passes() {
            let mut form = valid_form();
            form.set_cattle_field(0, CattleField::InsuranceStatus, true)
                .unwrap();
            form.set_cattle_field(0, CattleField::InsuranceDetails, "LIC policy 42")
                .unwrap();
            assert_eq!(validate(form.application()), Ok(()));
        }

        #[test]
        fn test_empty_form_fails_at_name() {
            assert_eq!(
                validate(&Application::default()),
                Err(ValidationError::MissingName)
            );
        }
    }

    mod applicant {
        use super::*;

        #[test]
        fn test_whitespace_name_fails() {
            assert_eq!(
                validate(&with("applicant.name", "   ")),
                Err(ValidationError::MissingName)
            );
        }

        #[test]
        fn test_short_aadhar_fails() {
            let err = validate(&with("applicant.aadharNumber", "12345")).unwrap_err();
            assert_eq!(err, ValidationError::InvalidAadhar);
            assert!(err.to_string().contains("Aadhar"));
        }

        #[test]
        fn test_aadhar_and_phone_pass() {
            let mut form = valid_form();
            form.set_field_by_path("applicant.aadharNumber", "123456789012")
                .unwrap();
            form.set_field_by_path("applicant.phone", "9876543210")
                .unwrap();
            assert_eq!(validate(form.application()), Ok(()));
        }

        #[test]
        fn test_non_ascii_digits_fail() {
            // Devanagari digits are Unicode digits but not ASCII
            assert_eq!(
                validate(&with("applicant.phone", "९८७६५४३२१०")),
                Err(ValidationError::InvalidPhone)
            );
        }

        #[test]
        fn test_phone_with_letters_fails() {
            assert_eq!(
                validate(&with("applicant.phone", "98765abcde")),
                Err(ValidationError::InvalidPhone)
            );
        }
    }

    mod numbers {
        use super::*;

        #[test]
        fn test_is_number() {
            assert!(is_number("5"));
            assert!(is_number("2.5"));
            assert!(is_number(" 7 "));
            assert!(is_number("1e3"));
            assert!(!is_number(""));
            assert!(!is_number("   "));
            assert!(!is_number("five"));
            assert!(!is_number("NaN"));
            assert!(!is_number("inf"));
        }

        #[test]
        fn test_land_size_not_numeric_fails() {
            assert_eq!(
                validate(&with("farm.landSize", "2 acres")),
                Err(ValidationError::InvalidLandSize)
            );
        }

        #[test]
        fn test_empty_loan_amount_fails() {
            assert_eq!(
                validate(&with("loan.amount", "")),
                Err(ValidationError::InvalidLoanAmount)
            );
        }

        #[test]
        fn test_optional_numbers_are_not_checked() {
            let mut form = valid_form();
            form.set_field_by_path("farm.existingCattle", "many")
                .unwrap();
            form.set_field_by_path("loan.term", "").unwrap();
            form.set_cattle_field(0, CattleField::Age, "old").unwrap();
            assert_eq!(validate(form.application()), Ok(()));
        }
    }

    mod cattle {
        use super::*;

        #[test]
        fn test_second_entry_reported_one_based() {
            let mut form = valid_form();
            form.add_cattle_entry();
            form.set_cattle_field(1, CattleField::Breed, "Murrah")
                .unwrap();
            let err = validate(form.application()).unwrap_err();
            assert_eq!(err, ValidationError::InvalidQuantity { entry: 2 });
            assert_eq!(err.to_string(), "Please enter valid quantity for cattle #2");
        }

        #[test]
        fn test_entry_rules_finish_before_next_entry() {
            let mut form = valid_form();
            form.set_cattle_field(0, CattleField::InsuranceStatus, true)
                .unwrap();
            form.add_cattle_entry();
            // entry 2 is blank, but entry 1's insurance rule comes first
            assert_eq!(
                validate(form.application()),
                Err(ValidationError::MissingInsuranceDetails { entry: 1 })
            );
        }

        #[test]
        fn test_breed_checked_before_quantity() {
            let mut form = valid_form();
            form.set_cattle_field(0, CattleField::Breed, " ").unwrap();
            form.set_cattle_field(0, CattleField::Quantity, "").unwrap();
            assert_eq!(
                validate(form.application()),
                Err(ValidationError::MissingBreed { entry: 1 })
            );
        }
    }

    mod banking {
        use super::*;

        #[test]
        fn test_account_length_bounds() {
            assert_eq!(
                validate(&with("banking.accountNumber", "12345678")),
                Err(ValidationError::InvalidAccountNumber)
            );
            assert_eq!(
                validate(&with("banking.accountNumber", "123456789012345678")),
                Ok(())
            );
            assert_eq!(
                validate(&with("banking.accountNumber", "1234567890123456789")),
                Err(ValidationError::InvalidAccountNumber)
            );
        }

        #[test]
        fn test_lowercase_ifsc_is_normalized_and_passes() {
            let app = with("banking.ifscCode", "hdfc0001234");
            assert_eq!(app.banking().ifsc_code, "HDFC0001234");
            assert_eq!(validate(&app), Ok(()));
        }

        #[test]
        fn test_ifsc_without_literal_zero_fails() {
            assert_eq!(
                validate(&with("banking.ifscCode", "HDFC1001234")),
                Err(ValidationError::InvalidIfsc)
            );
        }
    }

    mod order {
        use super::*;

        #[test]
        fn test_first_broken_rule_wins() {
            let mut form = valid_form();
            form.set_field_by_path("applicant.phone", "1").unwrap();
            form.set_field_by_path("loan.amount", "x").unwrap();
            form.set_field_by_path("banking.ifscCode", "bad").unwrap();
            assert_eq!(
                validate(form.application()),
                Err(ValidationError::InvalidPhone)
            );

            form.set_field_by_path("applicant.phone", "9998887777")
                .unwrap();
            assert_eq!(
                validate(form.application()),
                Err(ValidationError::InvalidLoanAmount)
            );
        }

        #[test]
        fn test_location_points_at_field() {
            assert_eq!(
                ValidationError::MissingBreed { entry: 2 }.location(),
                FieldLocation::Cattle {
                    index: 1,
                    field: CattleField::Breed
                }
            );
            assert_eq!(
                ValidationError::InvalidIfsc.location(),
                FieldLocation::Scalar(FieldPath::Banking(BankingField::IfscCode))
            );
        }
    }
}
