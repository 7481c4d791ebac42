use chrono::NaiveDate;
use contracts::domain::a001_sample_submission::{
    SubmissionBatch, SubmissionRecord, SubmissionStatus,
};
use contracts::enums::{SampleType, Season, Shipper};
use uuid::Uuid;

use super::error::SubmitError;
use crate::shared::date_utils::{default_year, format_iso_date, parse_iso_date};

// ============================================================================
// Row
// ============================================================================

/// One sample-shipment entry as it is being edited.
///
/// `year` and `date_sent` hold the raw input text; they are parsed only when
/// the batch is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRow {
    /// Render key, never sent to the backend
    pub id: Uuid,
    pub style_number: String,
    pub season: Season,
    pub year: String,
    pub date_sent: String,
    pub sample_type: SampleType,
    pub shipper: Shipper,
    /// Only meaningful when `shipper` is `Other`
    pub other_shipper: String,
    pub tracking_number: String,
}

impl SubmissionRow {
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            style_number: String::new(),
            season: Season::default(),
            year: default_year(today).to_string(),
            date_sent: format_iso_date(today),
            sample_type: SampleType::default(),
            shipper: Shipper::default(),
            other_shipper: String::new(),
            tracking_number: String::new(),
        }
    }

    /// Current value of a field as the form displays it
    pub fn field_value(&self, field: RowField) -> String {
        match field {
            RowField::StyleNumber => self.style_number.clone(),
            RowField::Season => self.season.label().to_string(),
            RowField::Year => self.year.clone(),
            RowField::DateSent => self.date_sent.clone(),
            RowField::SampleType => self.sample_type.label().to_string(),
            RowField::Shipper => self.shipper.label().to_string(),
            RowField::OtherShipper => self.other_shipper.clone(),
            RowField::TrackingNumber => self.tracking_number.clone(),
        }
    }

    /// Returns false when an enum label is not recognised
    fn set(&mut self, field: RowField, value: &str) -> bool {
        match field {
            RowField::StyleNumber => self.style_number = value.to_string(),
            RowField::Year => self.year = value.to_string(),
            RowField::DateSent => self.date_sent = value.to_string(),
            RowField::OtherShipper => self.other_shipper = value.to_string(),
            RowField::TrackingNumber => self.tracking_number = value.to_string(),
            RowField::Season => match Season::from_label(value) {
                Some(season) => self.season = season,
                None => return false,
            },
            RowField::SampleType => match SampleType::from_label(value) {
                Some(sample_type) => self.sample_type = sample_type,
                None => return false,
            },
            RowField::Shipper => match Shipper::from_label(value) {
                Some(shipper) => self.shipper = shipper,
                None => return false,
            },
        }
        true
    }

    /// Map to the wire record. `item` is the 1-based card number used in messages.
    pub fn to_record(&self, item: usize, factory: &str) -> Result<SubmissionRecord, SubmitError> {
        let required = |field: RowField, value: &str| {
            if value.is_empty() {
                Err(SubmitError::MissingField {
                    item,
                    field: field.label(),
                })
            } else {
                Ok(())
            }
        };
        let invalid = |field: RowField| SubmitError::InvalidField {
            item,
            field: field.label(),
        };

        required(RowField::StyleNumber, &self.style_number)?;
        required(RowField::Year, &self.year)?;
        let year = self
            .year
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid(RowField::Year))?;
        required(RowField::DateSent, &self.date_sent)?;
        let date_sent = parse_iso_date(&self.date_sent).ok_or_else(|| invalid(RowField::DateSent))?;
        if self.shipper.is_other() {
            required(RowField::OtherShipper, &self.other_shipper)?;
        }
        required(RowField::TrackingNumber, &self.tracking_number)?;

        Ok(SubmissionRecord {
            factory: factory.to_string(),
            style_number: self.style_number.clone(),
            season: self.season,
            year,
            date_sent,
            sample_type: self.sample_type,
            shipper: self.shipper.resolve(&self.other_shipper),
            tracking_number: self.tracking_number.clone(),
            status: SubmissionStatus::New,
        })
    }
}

/// Editable fields of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    StyleNumber,
    Season,
    Year,
    DateSent,
    SampleType,
    Shipper,
    OtherShipper,
    TrackingNumber,
}

impl RowField {
    pub fn label(&self) -> &'static str {
        match self {
            RowField::StyleNumber => "Style Number",
            RowField::Season => "Season",
            RowField::Year => "Year",
            RowField::DateSent => "Date Sent",
            RowField::SampleType => "Sample Type",
            RowField::Shipper => "Shipper",
            RowField::OtherShipper => "Specify Shipper",
            RowField::TrackingNumber => "Tracking Number",
        }
    }
}

// ============================================================================
// Form
// ============================================================================

/// Whole state of one visit to the form.
///
/// Invariant: `rows` is never empty while `submitted` is false.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub factory_name: String,
    pub rows: Vec<SubmissionRow>,
    /// Terminal until `reset`
    pub submitted: bool,
    /// A request is in flight
    pub submitting: bool,
    pub notice: Option<String>,
}

impl FormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            factory_name: String::new(),
            rows: vec![SubmissionRow::with_defaults(today)],
            submitted: false,
            submitting: false,
            notice: None,
        }
    }

    pub fn is_editable(&self) -> bool {
        !self.submitted
    }

    /// The remove button is only offered while more than one row exists
    pub fn can_remove_rows(&self) -> bool {
        self.is_editable() && self.rows.len() > 1
    }

    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn row(&self, id: Uuid) -> Option<&SubmissionRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn row_ids(&self) -> Vec<Uuid> {
        self.rows.iter().map(|r| r.id).collect()
    }

    pub fn set_factory_name(&mut self, value: &str) {
        if self.is_editable() {
            self.factory_name = value.to_string();
        }
    }

    pub fn add_row(&mut self, today: NaiveDate) {
        if self.is_editable() {
            self.rows.push(SubmissionRow::with_defaults(today));
        }
    }

    /// Removes the row at `index`. Refused for the last remaining row.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if !self.can_remove_rows() || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Replaces one field of one row. Returns whether anything changed.
    pub fn set_field(&mut self, index: usize, field: RowField, value: &str) -> bool {
        if !self.is_editable() {
            return false;
        }
        match self.rows.get_mut(index) {
            Some(row) => row.set(field, value),
            None => false,
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Validate and flatten all rows into the request body
    pub fn build_batch(&self) -> Result<SubmissionBatch, SubmitError> {
        if self.factory_name.is_empty() {
            return Err(SubmitError::MissingFactoryName);
        }
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| row.to_record(index + 1, &self.factory_name))
            .collect()
    }

    /// "Submit Another Batch": start over with a fresh default row.
    /// Only valid once the previous batch was accepted.
    pub fn reset(&mut self, today: NaiveDate) -> bool {
        if !self.submitted {
            return false;
        }
        *self = FormState::new(today);
        true
    }
}
