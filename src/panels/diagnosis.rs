//! Crop disease diagnosis panel.
//!
//! DESIGN
//! ======
//! Holds at most one image. Selecting a new image drops the previous result.
//! `run_analysis` walks Idle → Busy → Idle around the engine call, mirroring
//! each progress step into the panel state so a renderer sees every value.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{debug, info};

use super::lock;
use crate::data::diagnosis::{DiagnosisRecord, PHOTO_TIPS};
use crate::engine::{AnalysisError, ResponseEngine};
use crate::image::ImageRef;
use crate::notify::Notifier;

#[cfg(test)]
#[path = "diagnosis_test.rs"]
mod tests;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DiagnosisState {
    pub image: Option<ImageRef>,
    pub analyzing: bool,
    pub progress: u8,
    pub result: Option<DiagnosisRecord>,
}

#[derive(Clone)]
pub struct DiagnosisPanel {
    state: Arc<Mutex<DiagnosisState>>,
    engine: Arc<ResponseEngine>,
    notifier: Notifier,
}

impl DiagnosisPanel {
    #[must_use]
    pub fn new(engine: Arc<ResponseEngine>, notifier: Notifier) -> Self {
        Self { state: Arc::new(Mutex::new(DiagnosisState::default())), engine, notifier }
    }

    #[must_use]
    pub fn snapshot(&self) -> DiagnosisState {
        lock(&self.state).clone()
    }

    /// Hold `image`, replacing any previous one and clearing its result.
    pub fn select_image(&self, image: ImageRef) {
        info!(file = %image.file_name, media_type = image.media_type, "image selected");
        let mut state = lock(&self.state);
        state.image = Some(image);
        state.result = None;
    }

    /// Analyze the held image.
    ///
    /// Returns `Ok(None)` without doing anything while an analysis is already
    /// running.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InputMissing`] if no image is held. The
    /// previous result is left untouched.
    pub async fn run_analysis(&self) -> Result<Option<DiagnosisRecord>, AnalysisError> {
        let image = {
            let mut state = lock(&self.state);
            if state.analyzing {
                debug!(panel = "diagnosis", "analysis already running; ignoring trigger");
                return Ok(None);
            }
            match state.image.clone() {
                Some(image) => {
                    state.analyzing = true;
                    state.progress = 0;
                    image
                }
                None => {
                    drop(state);
                    self.notifier
                        .alert("No Image Selected", "Please upload an image of your crop first");
                    return Err(AnalysisError::InputMissing { input: "image" });
                }
            }
        };

        let progress_state = Arc::clone(&self.state);
        let outcome = self
            .engine
            .diagnose(Some(&image), move |step| lock(&progress_state).progress = step)
            .await;

        let mut state = lock(&self.state);
        state.analyzing = false;
        let record = outcome?;
        state.result = Some(record.clone());
        drop(state);

        self.notifier.notify(
            "Analysis Complete",
            format!("{} detected with {}% confidence", record.disease, record.confidence),
        );
        Ok(Some(record))
    }

    /// Capture guidance shown next to the upload area.
    #[must_use]
    pub fn photo_tips(&self) -> &'static [&'static str] {
        PHOTO_TIPS
    }
}
