//! Panel state controllers.
//!
//! ARCHITECTURE
//! ============
//! Each panel is a cheap `Clone` handle over `Arc<Mutex<State>>`. Clones
//! observe the same state, which is how a second trigger can see that the
//! panel is already busy. The lock is only held for short synchronous
//! updates and never across an `.await`. `snapshot()` hands out an owned
//! copy for rendering.

pub mod diagnosis;
pub mod market;
pub mod schemes;
pub mod voice;

pub use diagnosis::DiagnosisPanel;
pub use market::MarketPanel;
pub use schemes::SchemesPanel;
pub use voice::VoicePanel;

use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
