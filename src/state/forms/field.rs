//! Form field addressing and value objects

use super::application::{CattleType, LoanPurpose, OwnershipType};
use crate::error::FormError;
use std::fmt;
use std::str::FromStr;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Ownership(OwnershipType),
    Purpose(LoanPurpose),
    CattleType(CattleType),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<OwnershipType> for FieldValue {
    fn from(value: OwnershipType) -> Self {
        FieldValue::Ownership(value)
    }
}

impl From<LoanPurpose> for FieldValue {
    fn from(value: LoanPurpose) -> Self {
        FieldValue::Purpose(value)
    }
}

impl From<CattleType> for FieldValue {
    fn from(value: CattleType) -> Self {
        FieldValue::CattleType(value)
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for non-text values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "Yes".to_string(),
            FieldValue::Flag(false) => "No".to_string(),
            FieldValue::Ownership(o) => o.label().to_string(),
            FieldValue::Purpose(p) => p.label().to_string(),
            FieldValue::CattleType(c) => c.label().to_string(),
        }
    }

    /// The neighbouring option for choice and flag values; text is unchanged
    pub fn cycled(&self, forward: bool) -> Self {
        match self {
            FieldValue::Text(_) => self.clone(),
            FieldValue::Flag(b) => FieldValue::Flag(!b),
            FieldValue::Ownership(o) => {
                FieldValue::Ownership(if forward { o.next() } else { o.prev() })
            }
            FieldValue::Purpose(p) => {
                FieldValue::Purpose(if forward { p.next() } else { p.prev() })
            }
            FieldValue::CattleType(c) => {
                FieldValue::CattleType(if forward { c.next() } else { c.prev() })
            }
        }
    }

    pub(crate) fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub(crate) fn into_flag(self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(b),
            FieldValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub(crate) fn into_ownership(self) -> Option<OwnershipType> {
        match self {
            FieldValue::Ownership(o) => Some(o),
            FieldValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub(crate) fn into_purpose(self) -> Option<LoanPurpose> {
        match self {
            FieldValue::Purpose(p) => Some(p),
            FieldValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub(crate) fn into_cattle_type(self) -> Option<CattleType> {
        match self {
            FieldValue::CattleType(c) => Some(c),
            FieldValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Text typed on a numeric keypad
    Numeric,
    /// One option of a picker
    Choice,
    /// Yes/no toggle
    Flag,
}

impl FieldKind {
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Text | Self::Numeric => "text",
            Self::Choice => "choice",
            Self::Flag => "yes/no",
        }
    }

    /// Whether a typed character belongs in a field of this kind
    pub fn accepts_char(&self, c: char) -> bool {
        match self {
            Self::Text => !c.is_control(),
            Self::Numeric => c.is_ascii_digit() || c == '.',
            Self::Choice | Self::Flag => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicantField {
    Name,
    FatherName,
    AadharNumber,
    Phone,
    Village,
    District,
    State,
    Pincode,
}

impl ApplicantField {
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::FatherName,
        Self::AadharNumber,
        Self::Phone,
        Self::Village,
        Self::District,
        Self::State,
        Self::Pincode,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::FatherName => "fatherName",
            Self::AadharNumber => "aadharNumber",
            Self::Phone => "phone",
            Self::Village => "village",
            Self::District => "district",
            Self::State => "state",
            Self::Pincode => "pincode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::FatherName => "Father's Name",
            Self::AadharNumber => "Aadhar Number",
            Self::Phone => "Phone Number",
            Self::Village => "Village/Town",
            Self::District => "District",
            Self::State => "State",
            Self::Pincode => "Pincode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FarmField {
    LandSize,
    OwnershipType,
    ExistingCattle,
}

impl FarmField {
    pub const ALL: [Self; 3] = [Self::LandSize, Self::OwnershipType, Self::ExistingCattle];

    pub fn key(&self) -> &'static str {
        match self {
            Self::LandSize => "landSize",
            Self::OwnershipType => "ownershipType",
            Self::ExistingCattle => "existingCattle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::LandSize => "Land Size (acres)",
            Self::OwnershipType => "Ownership Type",
            Self::ExistingCattle => "Existing Cattle Count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanField {
    Amount,
    Purpose,
    Term,
}

impl LoanField {
    pub const ALL: [Self; 3] = [Self::Amount, Self::Purpose, Self::Term];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Purpose => "purpose",
            Self::Term => "term",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Amount => "Loan Amount (₹)",
            Self::Purpose => "Loan Purpose",
            Self::Term => "Loan Term (months)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BankingField {
    AccountNumber,
    BankName,
    Branch,
    IfscCode,
}

impl BankingField {
    pub const ALL: [Self; 4] = [
        Self::AccountNumber,
        Self::BankName,
        Self::Branch,
        Self::IfscCode,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::AccountNumber => "accountNumber",
            Self::BankName => "bankName",
            Self::Branch => "branch",
            Self::IfscCode => "ifscCode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AccountNumber => "Account Number",
            Self::BankName => "Bank Name",
            Self::Branch => "Branch",
            Self::IfscCode => "IFSC Code",
        }
    }
}

/// Fields of one cattle entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CattleField {
    CattleType,
    Breed,
    Quantity,
    Age,
    EstimatedValue,
    InsuranceStatus,
    InsuranceDetails,
}

impl CattleField {
    pub const ALL: [Self; 7] = [
        Self::CattleType,
        Self::Breed,
        Self::Quantity,
        Self::Age,
        Self::EstimatedValue,
        Self::InsuranceStatus,
        Self::InsuranceDetails,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::CattleType => "cattleType",
            Self::Breed => "breed",
            Self::Quantity => "quantity",
            Self::Age => "age",
            Self::EstimatedValue => "estimatedValue",
            Self::InsuranceStatus => "insuranceStatus",
            Self::InsuranceDetails => "insuranceDetails",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CattleType => "Cattle Type",
            Self::Breed => "Breed",
            Self::Quantity => "Quantity",
            Self::Age => "Age (years)",
            Self::EstimatedValue => "Estimated Value (₹)",
            Self::InsuranceStatus => "Insured",
            Self::InsuranceDetails => "Insurance Details",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::CattleType => FieldKind::Choice,
            Self::Quantity | Self::Age | Self::EstimatedValue => FieldKind::Numeric,
            Self::InsuranceStatus => FieldKind::Flag,
            Self::Breed | Self::InsuranceDetails => FieldKind::Text,
        }
    }
}

impl FromStr for CattleField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Address of a scalar field outside the cattle sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Applicant(ApplicantField),
    Farm(FarmField),
    Loan(LoanField),
    Banking(BankingField),
}

impl FieldPath {
    pub fn section(&self) -> &'static str {
        match self {
            Self::Applicant(_) => "applicant",
            Self::Farm(_) => "farm",
            Self::Loan(_) => "loan",
            Self::Banking(_) => "banking",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Applicant(f) => f.key(),
            Self::Farm(f) => f.key(),
            Self::Loan(f) => f.key(),
            Self::Banking(f) => f.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Applicant(f) => f.label(),
            Self::Farm(f) => f.label(),
            Self::Loan(f) => f.label(),
            Self::Banking(f) => f.label(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Applicant(
                ApplicantField::AadharNumber | ApplicantField::Phone | ApplicantField::Pincode,
            ) => FieldKind::Numeric,
            Self::Farm(FarmField::OwnershipType) | Self::Loan(LoanField::Purpose) => {
                FieldKind::Choice
            }
            Self::Farm(_) | Self::Loan(_) => FieldKind::Numeric,
            Self::Banking(BankingField::AccountNumber) => FieldKind::Numeric,
            Self::Applicant(_) | Self::Banking(_) => FieldKind::Text,
        }
    }

    /// Input length cap, where the field has one
    pub fn max_len(&self) -> Option<usize> {
        match self {
            Self::Applicant(ApplicantField::AadharNumber) => Some(12),
            Self::Applicant(ApplicantField::Phone) => Some(10),
            Self::Applicant(ApplicantField::Pincode) => Some(6),
            _ => None,
        }
    }

    /// Apply the field's input rules to raw text
    pub fn normalize(&self, text: &str) -> String {
        let capped: String = match self.max_len() {
            Some(max) => text.chars().take(max).collect(),
            None => text.to_string(),
        };
        match self {
            Self::Banking(BankingField::IfscCode) => capped.to_uppercase(),
            _ => capped,
        }
    }

    pub(crate) fn mismatch(&self) -> FormError {
        FormError::ValueMismatch {
            field: self.to_string(),
            expected: self.kind().expected(),
        }
    }

    /// All scalar paths in display order
    pub fn all() -> impl Iterator<Item = FieldPath> {
        ApplicantField::ALL
            .into_iter()
            .map(FieldPath::Applicant)
            .chain(FarmField::ALL.into_iter().map(FieldPath::Farm))
            .chain(LoanField::ALL.into_iter().map(FieldPath::Loan))
            .chain(BankingField::ALL.into_iter().map(FieldPath::Banking))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section(), self.key())
    }
}

impl FromStr for FieldPath {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::all()
            .find(|p| s.split_once('.') == Some((p.section(), p.key())))
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
