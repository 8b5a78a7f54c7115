//! Loan application aggregate
//!
//! `Application` is an immutable value. Every transition returns a new
//! snapshot; sections are held behind `Arc` so a transition copies only the
//! section it touches and the rest stay shared with the previous snapshot.

use super::field::{
    ApplicantField, BankingField, CattleField, FarmField, FieldPath, FieldValue, LoanField,
};
use crate::error::{FormError, UnknownChoice};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Default loan term in months, on first load and after reset
pub const DEFAULT_LOAN_TERM: &str = "12";

/// Land ownership picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OwnershipType {
    #[default]
    #[serde(rename = "")]
    Unset,
    Owned,
    Rented,
}

impl OwnershipType {
    pub const OPTIONS: [Self; 2] = [Self::Owned, Self::Rented];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Owned => "Owned",
            Self::Rented => "Rented",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "Select Ownership Type",
            other => other.as_str(),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Unset | Self::Rented => Self::Owned,
            Self::Owned => Self::Rented,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Unset | Self::Owned => Self::Rented,
            Self::Rented => Self::Owned,
        }
    }
}

impl FromStr for OwnershipType {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Unset),
            _ => Self::OPTIONS
                .into_iter()
                .find(|o| o.as_str() == s)
                .ok_or_else(|| UnknownChoice(s.to_string())),
        }
    }
}

/// Livestock kind picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CattleType {
    #[default]
    #[serde(rename = "")]
    Unset,
    Cow,
    Buffalo,
    Goat,
    Sheep,
    Other,
}

impl CattleType {
    pub const OPTIONS: [Self; 5] = [
        Self::Cow,
        Self::Buffalo,
        Self::Goat,
        Self::Sheep,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Cow => "Cow",
            Self::Buffalo => "Buffalo",
            Self::Goat => "Goat",
            Self::Sheep => "Sheep",
            Self::Other => "Other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "Select",
            other => other.as_str(),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Unset | Self::Other => Self::Cow,
            Self::Cow => Self::Buffalo,
            Self::Buffalo => Self::Goat,
            Self::Goat => Self::Sheep,
            Self::Sheep => Self::Other,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Unset | Self::Cow => Self::Other,
            Self::Buffalo => Self::Cow,
            Self::Goat => Self::Buffalo,
            Self::Sheep => Self::Goat,
            Self::Other => Self::Sheep,
        }
    }
}

impl FromStr for CattleType {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Unset),
            _ => Self::OPTIONS
                .into_iter()
                .find(|c| c.as_str() == s)
                .ok_or_else(|| UnknownChoice(s.to_string())),
        }
    }
}

/// Loan purpose picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoanPurpose {
    #[default]
    #[serde(rename = "")]
    Unset,
    Purchase,
    Feed,
    Equipment,
    Medical,
    Infrastructure,
    Other,
}

impl LoanPurpose {
    pub const OPTIONS: [Self; 6] = [
        Self::Purchase,
        Self::Feed,
        Self::Equipment,
        Self::Medical,
        Self::Infrastructure,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Purchase => "Purchase",
            Self::Feed => "Feed",
            Self::Equipment => "Equipment",
            Self::Medical => "Medical",
            Self::Infrastructure => "Infrastructure",
            Self::Other => "Other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "Select Loan Purpose",
            Self::Purchase => "Purchase Cattle",
            Self::Feed => "Cattle Feed",
            other => other.as_str(),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Unset | Self::Other => Self::Purchase,
            Self::Purchase => Self::Feed,
            Self::Feed => Self::Equipment,
            Self::Equipment => Self::Medical,
            Self::Medical => Self::Infrastructure,
            Self::Infrastructure => Self::Other,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Unset | Self::Purchase => Self::Other,
            Self::Feed => Self::Purchase,
            Self::Equipment => Self::Feed,
            Self::Medical => Self::Equipment,
            Self::Infrastructure => Self::Medical,
            Self::Other => Self::Infrastructure,
        }
    }
}

impl FromStr for LoanPurpose {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Unset),
            _ => Self::OPTIONS
                .into_iter()
                .find(|p| p.as_str() == s)
                .ok_or_else(|| UnknownChoice(s.to_string())),
        }
    }
}

/// Applicant identity and address
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub name: String,
    pub father_name: String,
    pub aadhar_number: String,
    pub phone: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
}

impl Applicant {
    pub fn get(&self, field: ApplicantField) -> &str {
        match field {
            ApplicantField::Name => &self.name,
            ApplicantField::FatherName => &self.father_name,
            ApplicantField::AadharNumber => &self.aadhar_number,
            ApplicantField::Phone => &self.phone,
            ApplicantField::Village => &self.village,
            ApplicantField::District => &self.district,
            ApplicantField::State => &self.state,
            ApplicantField::Pincode => &self.pincode,
        }
    }

    fn set(&mut self, field: ApplicantField, value: FieldValue) -> Result<(), FormError> {
        let path = FieldPath::Applicant(field);
        let text = path.normalize(&value.into_text().ok_or_else(|| path.mismatch())?);
        let slot = match field {
            ApplicantField::Name => &mut self.name,
            ApplicantField::FatherName => &mut self.father_name,
            ApplicantField::AadharNumber => &mut self.aadhar_number,
            ApplicantField::Phone => &mut self.phone,
            ApplicantField::Village => &mut self.village,
            ApplicantField::District => &mut self.district,
            ApplicantField::State => &mut self.state,
            ApplicantField::Pincode => &mut self.pincode,
        };
        *slot = text;
        Ok(())
    }
}

/// Farm facts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    pub land_size: String,
    pub ownership_type: OwnershipType,
    pub existing_cattle: String,
}

impl Farm {
    fn set(&mut self, field: FarmField, value: FieldValue) -> Result<(), FormError> {
        let path = FieldPath::Farm(field);
        match field {
            FarmField::LandSize => {
                self.land_size = value.into_text().ok_or_else(|| path.mismatch())?;
            }
            FarmField::OwnershipType => {
                self.ownership_type = value.into_ownership().ok_or_else(|| path.mismatch())?;
            }
            FarmField::ExistingCattle => {
                self.existing_cattle = value.into_text().ok_or_else(|| path.mismatch())?;
            }
        }
        Ok(())
    }
}

/// One livestock record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CattleEntry {
    pub cattle_type: CattleType,
    pub breed: String,
    pub quantity: String,
    pub age: String,
    pub estimated_value: String,
    pub insurance_status: bool,
    pub insurance_details: String,
}

impl CattleEntry {
    fn set(&mut self, field: CattleField, value: FieldValue) -> Result<(), FormError> {
        let mismatch = || FormError::ValueMismatch {
            field: format!("cattle.{}", field.key()),
            expected: field.kind().expected(),
        };
        match field {
            CattleField::CattleType => {
                self.cattle_type = value.into_cattle_type().ok_or_else(mismatch)?;
            }
            CattleField::InsuranceStatus => {
                self.insurance_status = value.into_flag().ok_or_else(mismatch)?;
            }
            CattleField::Breed => self.breed = value.into_text().ok_or_else(mismatch)?,
            CattleField::Quantity => self.quantity = value.into_text().ok_or_else(mismatch)?,
            CattleField::Age => self.age = value.into_text().ok_or_else(mismatch)?,
            CattleField::EstimatedValue => {
                self.estimated_value = value.into_text().ok_or_else(mismatch)?;
            }
            CattleField::InsuranceDetails => {
                self.insurance_details = value.into_text().ok_or_else(mismatch)?;
            }
        }
        Ok(())
    }
}

/// Requested loan terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub amount: String,
    pub purpose: LoanPurpose,
    pub term: String,
}

impl Default for Loan {
    fn default() -> Self {
        Self {
            amount: String::new(),
            purpose: LoanPurpose::Unset,
            term: DEFAULT_LOAN_TERM.to_string(),
        }
    }
}

impl Loan {
    fn set(&mut self, field: LoanField, value: FieldValue) -> Result<(), FormError> {
        let path = FieldPath::Loan(field);
        match field {
            LoanField::Amount => self.amount = value.into_text().ok_or_else(|| path.mismatch())?,
            LoanField::Purpose => {
                self.purpose = value.into_purpose().ok_or_else(|| path.mismatch())?;
            }
            LoanField::Term => self.term = value.into_text().ok_or_else(|| path.mismatch())?,
        }
        Ok(())
    }
}

/// Disbursement account
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banking {
    pub account_number: String,
    pub bank_name: String,
    pub branch: String,
    pub ifsc_code: String,
}

impl Banking {
    pub fn get(&self, field: BankingField) -> &str {
        match field {
            BankingField::AccountNumber => &self.account_number,
            BankingField::BankName => &self.bank_name,
            BankingField::Branch => &self.branch,
            BankingField::IfscCode => &self.ifsc_code,
        }
    }

    fn set(&mut self, field: BankingField, value: FieldValue) -> Result<(), FormError> {
        let path = FieldPath::Banking(field);
        let text = path.normalize(&value.into_text().ok_or_else(|| path.mismatch())?);
        let slot = match field {
            BankingField::AccountNumber => &mut self.account_number,
            BankingField::BankName => &mut self.bank_name,
            BankingField::Branch => &mut self.branch,
            BankingField::IfscCode => &mut self.ifsc_code,
        };
        *slot = text;
        Ok(())
    }
}

/// The full loan request, submitted as one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ApplicationWire")]
pub struct Application {
    applicant: Arc<Applicant>,
    farm: Arc<Farm>,
    cattle: Vec<Arc<CattleEntry>>,
    loan: Arc<Loan>,
    banking: Arc<Banking>,
}

/// Unchecked wire shape; converting it enforces the non-empty cattle list
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApplicationWire {
    applicant: Arc<Applicant>,
    farm: Arc<Farm>,
    cattle: Vec<Arc<CattleEntry>>,
    loan: Arc<Loan>,
    banking: Arc<Banking>,
}

impl TryFrom<ApplicationWire> for Application {
    type Error = FormError;

    fn try_from(wire: ApplicationWire) -> Result<Self, Self::Error> {
        if wire.cattle.is_empty() {
            return Err(FormError::NoCattleEntries);
        }
        Ok(Self {
            applicant: wire.applicant,
            farm: wire.farm,
            cattle: wire.cattle,
            loan: wire.loan,
            banking: wire.banking,
        })
    }
}

impl Default for Application {
    fn default() -> Self {
        Self {
            applicant: Arc::default(),
            farm: Arc::default(),
            cattle: vec![Arc::default()],
            loan: Arc::default(),
            banking: Arc::default(),
        }
    }
}

impl Application {
    pub fn applicant(&self) -> &Applicant {
        &self.applicant
    }

    pub fn farm(&self) -> &Farm {
        &self.farm
    }

    pub fn cattle(&self) -> &[Arc<CattleEntry>] {
        &self.cattle
    }

    pub fn loan(&self) -> &Loan {
        &self.loan
    }

    pub fn banking(&self) -> &Banking {
        &self.banking
    }

    /// Current value of a scalar field as a `FieldValue`
    pub fn field(&self, path: FieldPath) -> FieldValue {
        match path {
            FieldPath::Applicant(f) => FieldValue::Text(self.applicant.get(f).to_string()),
            FieldPath::Farm(FarmField::LandSize) => FieldValue::Text(self.farm.land_size.clone()),
            FieldPath::Farm(FarmField::OwnershipType) => {
                FieldValue::Ownership(self.farm.ownership_type)
            }
            FieldPath::Farm(FarmField::ExistingCattle) => {
                FieldValue::Text(self.farm.existing_cattle.clone())
            }
            FieldPath::Loan(LoanField::Amount) => FieldValue::Text(self.loan.amount.clone()),
            FieldPath::Loan(LoanField::Purpose) => FieldValue::Purpose(self.loan.purpose),
            FieldPath::Loan(LoanField::Term) => FieldValue::Text(self.loan.term.clone()),
            FieldPath::Banking(f) => FieldValue::Text(self.banking.get(f).to_string()),
        }
    }

    /// Current value of one cattle entry field, if the entry exists
    pub fn cattle_field(&self, index: usize, field: CattleField) -> Option<FieldValue> {
        let entry = self.cattle.get(index)?;
        Some(match field {
            CattleField::CattleType => FieldValue::CattleType(entry.cattle_type),
            CattleField::Breed => FieldValue::Text(entry.breed.clone()),
            CattleField::Quantity => FieldValue::Text(entry.quantity.clone()),
            CattleField::Age => FieldValue::Text(entry.age.clone()),
            CattleField::EstimatedValue => FieldValue::Text(entry.estimated_value.clone()),
            CattleField::InsuranceStatus => FieldValue::Flag(entry.insurance_status),
            CattleField::InsuranceDetails => FieldValue::Text(entry.insurance_details.clone()),
        })
    }

    /// New snapshot with one scalar replaced
    pub fn with_field(&self, path: FieldPath, value: FieldValue) -> Result<Self, FormError> {
        let mut next = self.clone();
        match path {
            FieldPath::Applicant(f) => Arc::make_mut(&mut next.applicant).set(f, value)?,
            FieldPath::Farm(f) => Arc::make_mut(&mut next.farm).set(f, value)?,
            FieldPath::Loan(f) => Arc::make_mut(&mut next.loan).set(f, value)?,
            FieldPath::Banking(f) => Arc::make_mut(&mut next.banking).set(f, value)?,
        }
        Ok(next)
    }

    /// New snapshot with a blank entry appended
    pub fn with_cattle_entry(&self) -> Self {
        let mut next = self.clone();
        next.cattle.push(Arc::default());
        next
    }

    /// New snapshot without the entry at `index`.
    ///
    /// The last remaining entry is never removed; asking to is a no-op.
    pub fn without_cattle_entry(&self, index: usize) -> Result<Self, FormError> {
        let len = self.cattle.len();
        if index >= len {
            return Err(FormError::IndexOutOfRange { index, len });
        }
        if len <= 1 {
            return Ok(self.clone());
        }
        let mut next = self.clone();
        next.cattle.remove(index);
        Ok(next)
    }

    /// New snapshot with one field of one entry replaced
    pub fn with_cattle_field(
        &self,
        index: usize,
        field: CattleField,
        value: FieldValue,
    ) -> Result<Self, FormError> {
        let len = self.cattle.len();
        let mut next = self.clone();
        let entry = next
            .cattle
            .get_mut(index)
            .ok_or(FormError::IndexOutOfRange { index, len })?;
        Arc::make_mut(entry).set(field, value)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod choices {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_unset_serializes_as_empty_string() {
            let json = serde_json::to_string(&CattleType::Unset).unwrap();
            assert_eq!(json, "\"\"");
            let json = serde_json::to_string(&LoanPurpose::Feed).unwrap();
            assert_eq!(json, "\"Feed\"");
        }

        #[test]
        fn test_from_str_accepts_wire_names() {
            assert_eq!("Buffalo".parse::<CattleType>(), Ok(CattleType::Buffalo));
            assert_eq!("".parse::<OwnershipType>(), Ok(OwnershipType::Unset));
            assert_eq!(
                "Infrastructure".parse::<LoanPurpose>(),
                Ok(LoanPurpose::Infrastructure)
            );
        }

        #[test]
        fn test_from_str_rejects_unknown() {
            assert_eq!(
                "Camel".parse::<CattleType>(),
                Err(UnknownChoice("Camel".to_string()))
            );
            assert!("owned".parse::<OwnershipType>().is_err());
        }

        #[test]
        fn test_next_skips_unset_and_wraps() {
            assert_eq!(CattleType::Unset.next(), CattleType::Cow);
            assert_eq!(CattleType::Other.next(), CattleType::Cow);
            assert_eq!(OwnershipType::Owned.next(), OwnershipType::Rented);
            assert_eq!(LoanPurpose::Other.next(), LoanPurpose::Purchase);
        }

        #[test]
        fn test_prev_is_inverse_of_next() {
            for c in CattleType::OPTIONS {
                assert_eq!(c.next().prev(), c);
            }
            for p in LoanPurpose::OPTIONS {
                assert_eq!(p.next().prev(), p);
            }
            for o in OwnershipType::OPTIONS {
                assert_eq!(o.next().prev(), o);
            }
        }

        #[test]
        fn test_purpose_labels() {
            assert_eq!(LoanPurpose::Purchase.label(), "Purchase Cattle");
            assert_eq!(LoanPurpose::Feed.label(), "Cattle Feed");
            assert_eq!(LoanPurpose::Medical.label(), "Medical");
        }
    }

    mod defaults {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_has_one_blank_entry() {
            let app = Application::default();
            assert_eq!(app.cattle().len(), 1);
            assert_eq!(*app.cattle()[0], CattleEntry::default());
            assert!(!app.cattle()[0].insurance_status);
        }

        #[test]
        fn test_default_loan_term() {
            let app = Application::default();
            assert_eq!(app.loan().term, "12");
            assert_eq!(app.loan().purpose, LoanPurpose::Unset);
        }

        #[test]
        fn test_wire_shape_uses_camel_case() {
            let json = serde_json::to_value(Application::default()).unwrap();
            assert_eq!(json["applicant"]["aadharNumber"], "");
            assert_eq!(json["farm"]["ownershipType"], "");
            assert_eq!(json["cattle"][0]["insuranceStatus"], false);
            assert_eq!(json["loan"]["term"], "12");
            assert_eq!(json["banking"]["ifscCode"], "");
        }

        #[test]
        fn test_deserialize_wire_shape() {
            let app = Application::default()
                .with_field(
                    FieldPath::Applicant(ApplicantField::Name),
                    FieldValue::from("Ravi"),
                )
                .unwrap();
            let json = serde_json::to_string(&app).unwrap();
            let parsed: Application = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, app);
        }

        #[test]
        fn test_deserialize_rejects_empty_cattle() {
            let mut json = serde_json::to_value(Application::default()).unwrap();
            json["cattle"] = serde_json::json!([]);
            let err = serde_json::from_value::<Application>(json).unwrap_err();
            assert!(err
                .to_string()
                .contains("application must hold at least one cattle entry"));
        }
    }

    mod transitions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_with_field_leaves_previous_snapshot_untouched() {
            let before = Application::default();
            let after = before
                .with_field(
                    FieldPath::Applicant(ApplicantField::Name),
                    FieldValue::from("Ravi"),
                )
                .unwrap();
            assert_eq!(before.applicant().name, "");
            assert_eq!(after.applicant().name, "Ravi");
        }

        #[test]
        fn test_with_field_shares_untouched_sections() {
            let before = Application::default();
            let after = before
                .with_field(
                    FieldPath::Banking(BankingField::Branch),
                    FieldValue::from("Anand"),
                )
                .unwrap();
            assert!(Arc::ptr_eq(&before.applicant, &after.applicant));
            assert!(Arc::ptr_eq(&before.farm, &after.farm));
            assert!(Arc::ptr_eq(&before.loan, &after.loan));
            assert!(Arc::ptr_eq(&before.cattle[0], &after.cattle[0]));
            assert!(!Arc::ptr_eq(&before.banking, &after.banking));
        }

        #[test]
        fn test_with_field_uppercases_ifsc() {
            let app = Application::default()
                .with_field(
                    FieldPath::Banking(BankingField::IfscCode),
                    FieldValue::from("hdfc0001234"),
                )
                .unwrap();
            assert_eq!(app.banking().ifsc_code, "HDFC0001234");
        }

        #[test]
        fn test_with_field_caps_aadhar_length() {
            let app = Application::default()
                .with_field(
                    FieldPath::Applicant(ApplicantField::AadharNumber),
                    FieldValue::from("1234567890123456"),
                )
                .unwrap();
            assert_eq!(app.applicant().aadhar_number, "123456789012");
        }

        #[test]
        fn test_with_field_parses_choice_text() {
            let app = Application::default()
                .with_field(
                    FieldPath::Farm(FarmField::OwnershipType),
                    FieldValue::from("Rented"),
                )
                .unwrap();
            assert_eq!(app.farm().ownership_type, OwnershipType::Rented);
        }

        #[test]
        fn test_with_field_rejects_wrong_kind() {
            let err = Application::default()
                .with_field(
                    FieldPath::Loan(LoanField::Purpose),
                    FieldValue::Flag(true),
                )
                .unwrap_err();
            assert_eq!(
                err,
                FormError::ValueMismatch {
                    field: "loan.purpose".to_string(),
                    expected: "choice",
                }
            );
        }

        #[test]
        fn test_with_cattle_entry_appends_blank() {
            let app = Application::default()
                .with_cattle_field(0, CattleField::Breed, FieldValue::from("Gir"))
                .unwrap()
                .with_cattle_entry();
            assert_eq!(app.cattle().len(), 2);
            assert_eq!(app.cattle()[0].breed, "Gir");
            assert_eq!(*app.cattle()[1], CattleEntry::default());
        }

        #[test]
        fn test_without_cattle_entry_shifts_later_entries() {
            let app = Application::default()
                .with_cattle_field(0, CattleField::Breed, FieldValue::from("Gir"))
                .unwrap()
                .with_cattle_entry()
                .with_cattle_field(1, CattleField::Breed, FieldValue::from("Murrah"))
                .unwrap()
                .with_cattle_entry()
                .with_cattle_field(2, CattleField::Breed, FieldValue::from("Sahiwal"))
                .unwrap();

            let app = app.without_cattle_entry(1).unwrap();
            let breeds: Vec<&str> = app.cattle().iter().map(|c| c.breed.as_str()).collect();
            assert_eq!(breeds, vec!["Gir", "Sahiwal"]);
        }

        #[test]
        fn test_without_last_entry_is_noop() {
            let app = Application::default()
                .with_cattle_field(0, CattleField::Breed, FieldValue::from("Gir"))
                .unwrap();
            let after = app.without_cattle_entry(0).unwrap();
            assert_eq!(after, app);
        }

        #[test]
        fn test_without_cattle_entry_out_of_range() {
            let err = Application::default()
                .with_cattle_entry()
                .without_cattle_entry(5)
                .unwrap_err();
            assert_eq!(err, FormError::IndexOutOfRange { index: 5, len: 2 });
        }

        #[test]
        fn test_with_cattle_field_out_of_range() {
            let err = Application::default()
                .with_cattle_field(1, CattleField::Breed, FieldValue::from("Gir"))
                .unwrap_err();
            assert_eq!(err, FormError::IndexOutOfRange { index: 1, len: 1 });
        }

        #[test]
        fn test_with_cattle_field_sets_flag_and_choice() {
            let app = Application::default()
                .with_cattle_field(0, CattleField::InsuranceStatus, FieldValue::Flag(true))
                .unwrap()
                .with_cattle_field(0, CattleField::CattleType, CattleType::Goat.into())
                .unwrap();
            assert!(app.cattle()[0].insurance_status);
            assert_eq!(app.cattle()[0].cattle_type, CattleType::Goat);
        }

        #[test]
        fn test_cattle_field_reads_back() {
            let app = Application::default()
                .with_cattle_field(0, CattleField::Quantity, FieldValue::from("4"))
                .unwrap();
            assert_eq!(
                app.cattle_field(0, CattleField::Quantity),
                Some(FieldValue::from("4"))
            );
            assert_eq!(app.cattle_field(1, CattleField::Quantity), None);
        }
    }
}
