//! Canned crop-disease diagnoses.

use std::fmt;

use serde::Serialize;

/// How urgently a detected problem needs treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        })
    }
}

/// One diagnosis outcome. `confidence` is a percentage in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosisRecord {
    pub disease: String,
    pub confidence: u8,
    pub severity: Severity,
    pub treatment: String,
    pub prevention: String,
    pub localized_name: String,
}

pub(crate) struct DiagnosisEntry {
    disease: &'static str,
    confidence: u8,
    severity: Severity,
    treatment: &'static str,
    prevention: &'static str,
    localized_name: &'static str,
}

impl DiagnosisEntry {
    pub(crate) fn to_record(&self) -> DiagnosisRecord {
        DiagnosisRecord {
            disease: self.disease.to_string(),
            confidence: self.confidence,
            severity: self.severity,
            treatment: self.treatment.to_string(),
            prevention: self.prevention.to_string(),
            localized_name: self.localized_name.to_string(),
        }
    }
}

pub(crate) static DIAGNOSES: &[DiagnosisEntry] = &[
    DiagnosisEntry {
        disease: "Late Blight",
        confidence: 94,
        severity: Severity::High,
        treatment: "Apply Metalaxyl + Mancozeb fungicide spray immediately. Spray in evening hours. Repeat after 7 days.",
        prevention: "Ensure proper spacing between plants. Avoid overhead watering. Remove infected leaves.",
        localized_name: "ತಡವಾದ ಬ್ಲೈಟ್",
    },
    DiagnosisEntry {
        disease: "Aphid Infestation",
        confidence: 89,
        severity: Severity::Medium,
        treatment: "Use Neem oil spray (30ml per liter water). Apply insecticidal soap solution. Remove affected parts.",
        prevention: "Use yellow sticky traps. Encourage beneficial insects like ladybugs. Regular monitoring.",
        localized_name: "ಚಿಪ್ಪು ಹುಳು",
    },
];

/// Every record the simulated classifier can return.
#[must_use]
pub fn all() -> Vec<DiagnosisRecord> {
    DIAGNOSES.iter().map(DiagnosisEntry::to_record).collect()
}

/// Capture guidance shown under the upload area.
pub static PHOTO_TIPS: &[&str] = &[
    "Take photos in good natural light",
    "Focus on affected leaves clearly",
    "Include both healthy and affected parts",
];
