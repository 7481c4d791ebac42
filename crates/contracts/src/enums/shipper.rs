use serde::{Deserialize, Serialize};

/// Carrier selection in the form.
///
/// `Other` never reaches the backend: the wire record carries the free-text
/// carrier name typed next to it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Shipper {
    #[default]
    #[serde(rename = "DHL")]
    Dhl,
    FedEx,
    #[serde(rename = "UPS")]
    Ups,
    Other,
}

impl Shipper {
    pub fn label(&self) -> &'static str {
        match self {
            Shipper::Dhl => "DHL",
            Shipper::FedEx => "FedEx",
            Shipper::Ups => "UPS",
            Shipper::Other => "Other",
        }
    }

    pub fn all() -> Vec<Shipper> {
        vec![Shipper::Dhl, Shipper::FedEx, Shipper::Ups, Shipper::Other]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "DHL" => Some(Shipper::Dhl),
            "FedEx" => Some(Shipper::FedEx),
            "UPS" => Some(Shipper::Ups),
            "Other" => Some(Shipper::Other),
            _ => None,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Shipper::Other)
    }

    /// Carrier name as sent to the backend
    pub fn resolve(&self, other_shipper: &str) -> String {
        match self {
            Shipper::Other => other_shipper.to_string(),
            known => known.label().to_string(),
        }
    }
}

impl std::fmt::Display for Shipper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for shipper in Shipper::all() {
            assert_eq!(Shipper::from_label(shipper.label()), Some(shipper));
        }
        assert_eq!(Shipper::from_label("Royal Mail"), None);
    }

    #[test]
    fn test_resolve_other_uses_free_text() {
        assert_eq!(Shipper::Other.resolve("Acme Carrier"), "Acme Carrier");
        assert_eq!(Shipper::Other.resolve("  Acme Carrier "), "  Acme Carrier ");
    }

    #[test]
    fn test_resolve_known_carrier_ignores_free_text() {
        assert_eq!(Shipper::Dhl.resolve("Acme Carrier"), "DHL");
        assert_eq!(Shipper::Ups.resolve(""), "UPS");
    }
}
