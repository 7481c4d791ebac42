use serde::{Deserialize, Serialize};

/// Kind of physical sample shipped by the factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SampleType {
    #[default]
    #[serde(rename = "Lab Dip")]
    LabDip,
    #[serde(rename = "Strike Off")]
    StrikeOff,
    #[serde(rename = "PP Sample")]
    PpSample,
    #[serde(rename = "TOP Sample")]
    TopSample,
}

impl SampleType {
    pub fn label(&self) -> &'static str {
        match self {
            SampleType::LabDip => "Lab Dip",
            SampleType::StrikeOff => "Strike Off",
            SampleType::PpSample => "PP Sample",
            SampleType::TopSample => "TOP Sample",
        }
    }

    pub fn all() -> Vec<SampleType> {
        vec![
            SampleType::LabDip,
            SampleType::StrikeOff,
            SampleType::PpSample,
            SampleType::TopSample,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Lab Dip" => Some(SampleType::LabDip),
            "Strike Off" => Some(SampleType::StrikeOff),
            "PP Sample" => Some(SampleType::PpSample),
            "TOP Sample" => Some(SampleType::TopSample),
            _ => None,
        }
    }
}

impl std::fmt::Display for SampleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
