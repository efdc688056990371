//! Voice assistant phrase and reply tables.

use std::fmt;

use serde::Serialize;

use crate::locale::{Language, Localized};

/// Reply bucket a query is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseBucket {
    Market,
    Diagnosis,
    Schemes,
}

impl ResponseBucket {
    /// Routing priority; the first bucket whose keywords match wins.
    pub const PRIORITY: [Self; 3] = [Self::Market, Self::Diagnosis, Self::Schemes];

    /// English keywords, matched case-insensitively.
    #[must_use]
    pub fn english_keywords(self) -> &'static [&'static str] {
        match self {
            Self::Market => &["price"],
            Self::Diagnosis => &["spot", "disease"],
            Self::Schemes => &["subsidy", "scheme"],
        }
    }

    /// Kannada keywords, matched as literal substrings.
    #[must_use]
    pub fn kannada_keywords(self) -> &'static [&'static str] {
        match self {
            Self::Market => &["ಬೆಲೆ"],
            Self::Diagnosis => &["ಚುಕ್ಕೆ"],
            Self::Schemes => &["ಸಬ್ಸಿಡಿ"],
        }
    }

    #[must_use]
    pub fn reply(self) -> Localized {
        match self {
            Self::Market => Localized {
                en: "Based on current market data, tomato prices in Bangalore mandi are ₹45 per kg, up 7% from yesterday. This is a good time to sell as demand is high.",
                kn: "ಪ್ರಸ್ತುತ ಮಾರುಕಟ್ಟೆ ಮಾಹಿತಿಯ ಪ್ರಕಾರ, ಬೆಂಗಳೂರು ಮಂಡಿಯಲ್ಲಿ ಟೊಮೆಟೊ ಬೆಲೆ ಕಿಲೋಗೆ ₹45. ಇದು ಮಾರಾಟಕ್ಕೆ ಉತ್ತಮ ಸಮಯ.",
            },
            Self::Diagnosis => Localized {
                en: "Yellow spots on leaves could indicate early blight or bacterial spot. Please take a clear photo and upload it for accurate diagnosis and treatment recommendations.",
                kn: "ಎಲೆಗಳ ಮೇಲಿನ ಹಳದಿ ಚುಕ್ಕೆಗಳು ಅರ್ಲಿ ಬ್ಲೈಟ್ ಅಥವಾ ಬ್ಯಾಕ್ಟೀರಿಯಲ್ ಸ್ಪಾಟ್ ಅನ್ನು ಸೂಚಿಸಬಹುದು. ದಯವಿಟ್ಟು ಸ್ಪಷ್ಟ ಫೋಟೋ ತೆಗೆದು ಅಪ್‌ಲೋಡ್ ಮಾಡಿ.",
            },
            Self::Schemes => Localized {
                en: "The Micro Irrigation Scheme offers up to 55% subsidy for drip irrigation systems. You need land documents and water source certificate to apply.",
                kn: "ಮೈಕ್ರೋ ಇರಿಗೇಷನ್ ಯೋಜನೆ ಡ್ರಿಪ್ ಇರಿಗೇಷನ್ ವ್ಯವಸ್ಥೆಗೆ 55% ವರೆಗೆ ಸಬ್ಸಿಡಿ ನೀಡುತ್ತದೆ. ಅರ್ಜಿ ಸಲ್ಲಿಸಲು ಭೂಮಿ ದಾಖಲೆಗಳು ಮತ್ತು ನೀರಿನ ಮೂಲ ಪ್ರಮಾಣಪತ್ರ ಅಗತ್ಯ.",
            },
        }
    }
}

impl fmt::Display for ResponseBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Market => "market",
            Self::Diagnosis => "diagnosis",
            Self::Schemes => "schemes",
        })
    }
}

/// A predefined phrase the user can trigger instead of speaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleQuery {
    pub text: Localized,
    pub bucket: ResponseBucket,
}

impl SampleQuery {
    #[must_use]
    pub fn text(&self, language: Language) -> &'static str {
        self.text.get(language)
    }
}

pub static SAMPLE_QUERIES: &[SampleQuery] = &[
    SampleQuery {
        text: Localized { en: "What is the current price of tomatoes?", kn: "ಟೊಮೆಟೊ ಬೆಲೆ ಎಷ್ಟು?" },
        bucket: ResponseBucket::Market,
    },
    SampleQuery {
        text: Localized { en: "My crop has yellow spots on leaves", kn: "ನನ್ನ ಬೆಳೆಯ ಎಲೆಗಳಲ್ಲಿ ಹಳದಿ ಚುಕ್ಕೆಗಳಿವೆ" },
        bucket: ResponseBucket::Diagnosis,
    },
    SampleQuery {
        text: Localized { en: "Tell me about drip irrigation subsidy", kn: "ಡ್ರಿಪ್ ಇರಿಗೇಷನ್ ಸಬ್ಸಿಡಿ ಬಗ್ಗೆ ಹೇಳಿ" },
        bucket: ResponseBucket::Schemes,
    },
];

/// First assistant message of every conversation.
pub const GREETING: &str = "ನಮಸ್ಕಾರ! I'm your AI farming assistant. You can ask me about crop diseases, market prices, or government schemes in Kannada or English.";
