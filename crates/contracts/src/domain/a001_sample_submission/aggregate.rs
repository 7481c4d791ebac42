use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{SampleType, Season};

// ============================================================================
// Status
// ============================================================================

/// Processing status of a submission on the backend side.
/// The factory portal only ever creates `New` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    New,
}

// ============================================================================
// Wire record
// ============================================================================

/// One sample shipment as posted to `/api/submissions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub factory: String,
    pub style_number: String,
    pub season: Season,
    pub year: i64,
    /// Serialized as `yyyy-MM-dd`
    pub date_sent: NaiveDate,
    pub sample_type: SampleType,
    /// Resolved carrier name, never the literal "Other"
    pub shipper: String,
    pub tracking_number: String,
    pub status: SubmissionStatus,
}

/// Request body: the whole batch goes in a single POST
pub type SubmissionBatch = Vec<SubmissionRecord>;
