//! Simulated async response engine.
//!
//! DESIGN
//! ======
//! Stands in for the inference service. A diagnosis suspends the caller for
//! five fixed steps, reporting progress 20, 40, 60, 80, 100 after each one,
//! then picks a record uniformly at random. A voice query suspends once and
//! is answered from the reply bucket its keywords select. A market refresh
//! suspends once and rebuilds the whole price table.
//!
//! Input is validated before any suspension: a missing image or an empty
//! query fails immediately with `InputMissing`. Nothing can fail after that.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::data::diagnosis::{DIAGNOSES, DiagnosisEntry, DiagnosisRecord};
use crate::data::market::{self, Market, MarketPrice, PricePoint};
use crate::data::voice::ResponseBucket;
use crate::image::ImageRef;
use crate::locale::Language;

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;

/// Progress values reported by a diagnosis, in order.
pub const PROGRESS_STEPS: [u8; 5] = [20, 40, 60, 80, 100];

// =============================================================================
// ERROR TYPE
// =============================================================================

/// The one user-facing failure: an action was triggered without its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("no {input} supplied")]
    InputMissing { input: &'static str },
}

impl AnalysisError {
    /// Stable code printed next to the message by the CLI.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InputMissing { .. } => "E_INPUT_MISSING",
        }
    }
}

// =============================================================================
// ENGINE
// =============================================================================

pub struct ResponseEngine {
    step_delay: Duration,
    reply_delay: Duration,
    market_delay: Duration,
    rng: Mutex<StdRng>,
}

impl ResponseEngine {
    #[must_use]
    pub fn new(config: &DashboardConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            step_delay: config.step_delay,
            reply_delay: config.reply_delay,
            market_delay: config.market_delay,
            rng: Mutex::new(rng),
        }
    }

    /// Run a simulated diagnosis of `image`.
    ///
    /// `on_progress` is called once per value of [`PROGRESS_STEPS`], each
    /// after a `step_delay` suspension.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InputMissing`] without suspending when no
    /// image is supplied.
    pub async fn diagnose(
        &self,
        image: Option<&ImageRef>,
        mut on_progress: impl FnMut(u8),
    ) -> Result<DiagnosisRecord, AnalysisError> {
        let image = image.ok_or(AnalysisError::InputMissing { input: "image" })?;
        info!(file = %image.file_name, bytes = image.len(), "diagnosis started");

        for step in PROGRESS_STEPS {
            tokio::time::sleep(self.step_delay).await;
            debug!(progress = step, "diagnosis progress");
            on_progress(step);
        }

        let record = self.pick_diagnosis();
        info!(disease = %record.disease, confidence = record.confidence, "diagnosis complete");
        Ok(record)
    }

    fn pick_diagnosis(&self) -> DiagnosisRecord {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        // DIAGNOSES is a non-empty static table.
        DIAGNOSES
            .choose(&mut *rng)
            .map_or_else(|| DIAGNOSES[0].to_record(), DiagnosisEntry::to_record)
    }

    /// Answer a voice query in `language` after `reply_delay`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InputMissing`] without suspending when the
    /// query is empty or whitespace.
    pub async fn answer(&self, query: &str, language: Language) -> Result<String, AnalysisError> {
        if query.trim().is_empty() {
            return Err(AnalysisError::InputMissing { input: "query" });
        }
        let bucket = route_query(query);
        debug!(%bucket, %language, "voice query routed");

        tokio::time::sleep(self.reply_delay).await;
        Ok(bucket.reply().get(language).to_string())
    }

    /// Rebuild the price table and 7-day series for `market` after
    /// `market_delay`. Every call returns freshly allocated records.
    pub async fn market_prices(&self, market: Market) -> (Vec<MarketPrice>, Vec<PricePoint>) {
        tokio::time::sleep(self.market_delay).await;
        let prices = market::price_table(market);
        debug!(market = market.value(), records = prices.len(), "market table regenerated");
        (prices, market::price_history())
    }
}

/// Pick the reply bucket for `query`.
///
/// English keywords match case-insensitively, Kannada keywords as literal
/// substrings. Buckets are tried in [`ResponseBucket::PRIORITY`] order and
/// an unmatched query falls back to the market bucket.
#[must_use]
pub fn route_query(query: &str) -> ResponseBucket {
    let lowered = query.to_lowercase();
    ResponseBucket::PRIORITY
        .into_iter()
        .find(|bucket| {
            bucket.english_keywords().iter().any(|k| lowered.contains(k))
                || bucket.kannada_keywords().iter().any(|k| query.contains(k))
        })
        .unwrap_or(ResponseBucket::Market)
}
