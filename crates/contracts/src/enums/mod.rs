pub mod sample_type;
pub mod season;
pub mod shipper;

pub use sample_type::SampleType;
pub use season::Season;
pub use shipper::Shipper;
