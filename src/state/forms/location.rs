//! Focusable field locations and their display order

use super::application::Application;
use super::field::{CattleField, FieldKind, FieldPath, FieldValue};

/// Where a focusable field lives in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLocation {
    Scalar(FieldPath),
    Cattle { index: usize, field: CattleField },
}

impl FieldLocation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scalar(path) => path.label(),
            Self::Cattle { field, .. } => field.label(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Scalar(path) => path.kind(),
            Self::Cattle { field, .. } => field.kind(),
        }
    }

    /// Current value at this location, if it still exists
    pub fn read(&self, app: &Application) -> Option<FieldValue> {
        match self {
            Self::Scalar(path) => Some(app.field(*path)),
            Self::Cattle { index, field } => app.cattle_field(*index, *field),
        }
    }
}

impl From<FieldPath> for FieldLocation {
    fn from(path: FieldPath) -> Self {
        Self::Scalar(path)
    }
}

/// Every field the user can focus, top to bottom.
///
/// Insurance details only appear for insured entries.
pub fn focus_order(app: &Application) -> Vec<FieldLocation> {
    let mut order: Vec<FieldLocation> = FieldPath::all()
        .filter(|p| matches!(p, FieldPath::Applicant(_) | FieldPath::Farm(_)))
        .map(FieldLocation::Scalar)
        .collect();

    for (index, entry) in app.cattle().iter().enumerate() {
        order.extend(
            CattleField::ALL
                .into_iter()
                .filter(|f| *f != CattleField::InsuranceDetails || entry.insurance_status)
                .map(|field| FieldLocation::Cattle { index, field }),
        );
    }

    order.extend(
        FieldPath::all()
            .filter(|p| matches!(p, FieldPath::Loan(_) | FieldPath::Banking(_)))
            .map(FieldLocation::Scalar),
    );
    order
}
