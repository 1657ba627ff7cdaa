use serde::{Deserialize, Serialize};

/// Region (state) and country of a party
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jurisdiction {
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
}

impl Jurisdiction {
    pub fn new(region: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            country: country.into(),
        }
    }

    /// True when the region has not been filled in yet
    pub fn region_is_unknown(&self) -> bool {
        self.region.trim().is_empty()
    }

    pub fn same_country(&self, other: &Jurisdiction) -> bool {
        same_place(&self.country, &other.country)
    }

    pub fn same_region(&self, other: &Jurisdiction) -> bool {
        same_place(&self.region, &other.region)
    }
}

/// Place names compare trimmed and case-insensitively
fn same_place(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.region.trim(), self.country.trim()) {
            ("", "") => Ok(()),
            ("", country) => write!(f, "{}", country),
            (region, "") => write!(f, "{}", region),
            (region, country) => write!(f, "{}, {}", region, country),
        }
    }
}
