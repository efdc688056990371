//! Government agricultural scheme registry (static).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeCategory {
    Financial,
    Irrigation,
    Credit,
    Equipment,
    Soil,
}

impl SchemeCategory {
    pub const ALL: [Self; 5] = [Self::Financial, Self::Irrigation, Self::Equipment, Self::Credit, Self::Soil];

    /// Machine value used by the category selector.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Irrigation => "irrigation",
            Self::Credit => "credit",
            Self::Equipment => "equipment",
            Self::Soil => "soil",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Financial => "Financial Support",
            Self::Irrigation => "Irrigation",
            Self::Credit => "Credit & Loans",
            Self::Equipment => "Equipment",
            Self::Soil => "Soil Health",
        }
    }
}

impl fmt::Display for SchemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Category selector value: every scheme, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(SchemeCategory),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, category: SchemeCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Schemes",
            Self::Only(category) => category.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scheme category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "all" {
            return Ok(Self::All);
        }
        SchemeCategory::ALL
            .into_iter()
            .find(|c| c.value() == wanted)
            .map(Self::Only)
            .ok_or(UnknownCategory(wanted))
    }
}

/// A government scheme. `id` is unique within [`SCHEMES`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scheme {
    pub id: &'static str,
    pub name: &'static str,
    pub localized_name: &'static str,
    pub category: SchemeCategory,
    pub subsidy: &'static str,
    pub eligibility: &'static [&'static str],
    /// Free-form; `"Ongoing"` for schemes without a closing date.
    pub deadline: &'static str,
    pub department: &'static str,
    pub description: &'static str,
    pub application_url: &'static str,
    pub documents: &'static [&'static str],
}

pub static SCHEMES: &[Scheme] = &[
    Scheme {
        id: "1",
        name: "Pradhan Mantri Kisan Samman Nidhi",
        localized_name: "ಪ್ರಧಾನ ಮಂತ್ರಿ ಕಿಸಾನ್ ಸಮ್ಮಾನ್ ನಿಧಿ",
        category: SchemeCategory::Financial,
        subsidy: "₹6,000 per year",
        eligibility: &["Small & marginal farmers", "Land holding up to 2 hectares", "Valid Aadhaar card"],
        deadline: "Ongoing",
        department: "Ministry of Agriculture",
        description: "Direct income support to farmer families for procurement of inputs related to agriculture and allied activities.",
        application_url: "https://pmkisan.gov.in",
        documents: &["Aadhaar Card", "Land Records", "Bank Passbook"],
    },
    Scheme {
        id: "2",
        name: "Micro Irrigation Scheme",
        localized_name: "ಸೂಕ್ಷ್ಮ ನೀರಾವರಿ ಯೋಜನೆ",
        category: SchemeCategory::Irrigation,
        subsidy: "Up to 55% subsidy",
        eligibility: &["All categories of farmers", "Minimum 0.2 hectare land", "Water source availability"],
        deadline: "March 31, 2024",
        department: "Dept. of Horticulture",
        description: "Subsidy for drip and sprinkler irrigation systems to improve water use efficiency.",
        application_url: "https://pmksy.gov.in",
        documents: &["Land Documents", "Water Source Certificate", "Bank Details"],
    },
    Scheme {
        id: "3",
        name: "Kisan Credit Card Scheme",
        localized_name: "ಕಿಸಾನ್ ಕ್ರೆಡಿಟ್ ಕಾರ್ಡ್ ಯೋಜನೆ",
        category: SchemeCategory::Credit,
        subsidy: "4% interest rate",
        eligibility: &["All farmers", "Valid land documents", "Clean credit history"],
        deadline: "Ongoing",
        department: "Banking Division",
        description: "Provide credit support for crop production, post-harvest expenses, and asset maintenance.",
        application_url: "https://pmkisan.gov.in/KCC.aspx",
        documents: &["Land Records", "Identity Proof", "Address Proof"],
    },
    Scheme {
        id: "4",
        name: "Custom Hiring Centers",
        localized_name: "ಕಸ್ಟಮ್ ಹೈರಿಂಗ್ ಸೆಂಟರ್‌ಗಳು",
        category: SchemeCategory::Equipment,
        subsidy: "Up to 80% subsidy",
        eligibility: &["Farmer Producer Organizations", "Self Help Groups", "Cooperative Societies"],
        deadline: "December 15, 2024",
        department: "Dept. of Agriculture",
        description: "Establish custom hiring centers for agricultural machinery and equipment.",
        application_url: "https://agrimachinery.nic.in",
        documents: &["Registration Certificate", "Project Proposal", "Land Lease Agreement"],
    },
    Scheme {
        id: "5",
        name: "Soil Health Card Scheme",
        localized_name: "ಮಣ್ಣಿನ ಆರೋಗ್ಯ ಕಾರ್ಡ್ ಯೋಜನೆ",
        category: SchemeCategory::Soil,
        subsidy: "Free soil testing",
        eligibility: &["All farmers", "Farm land ownership", "Active cultivation"],
        deadline: "Ongoing",
        department: "Dept. of Agriculture",
        description: "Free soil testing and nutrient recommendations for sustainable farming.",
        application_url: "https://soilhealth.dac.gov.in",
        documents: &["Land Records", "Farmer ID", "Contact Details"],
    },
];
