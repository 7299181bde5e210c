//! Typed application form at the submission boundary.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One employment application submission.
///
/// The web layer delivers raw text for every field; unknown keys are
/// rejected and missing keys fail deserialization, so only this typed
/// record flows past the boundary. Nothing is persisted - the form lives
/// for the duration of one generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub email_address: String,
    /// Format XXXX-XXXX-XXXX
    pub aadhaar_number: String,
    /// Format ABCDE1234E
    pub pan_number: String,
    pub address_line1: String,
    pub street: String,
    pub area: String,
    pub city: String,
    pub zipcode: String,
    pub country: String,
    pub designation: String,
    pub date_of_joining: String,
}

impl ApplicationForm {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Deterministic per-submission folder name, shared by the employer and
    /// employee trees. Spaces inside names become underscores.
    pub fn folder_slug(&self, employee_id: u64) -> String {
        format!("{}_{}", employee_id, self.full_name().replace(' ', "_"))
    }
}
