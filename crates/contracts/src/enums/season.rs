use serde::{Deserialize, Serialize};

/// Collection season a sample belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Season {
    #[default]
    Spring,
    Fall,
}

impl Season {
    /// Label shown in the form and sent on the wire
    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Fall => "Fall",
        }
    }

    pub fn all() -> Vec<Season> {
        vec![Season::Spring, Season::Fall]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Spring" => Some(Season::Spring),
            "Fall" => Some(Season::Fall),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
