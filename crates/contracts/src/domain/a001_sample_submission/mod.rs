pub mod aggregate;

pub use aggregate::{SubmissionBatch, SubmissionRecord, SubmissionStatus};
