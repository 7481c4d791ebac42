pub mod a001_sample_submission;
