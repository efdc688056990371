//! Project Kisan farming-assistant dashboard core.
//!
//! DESIGN
//! ======
//! Four independent panels (crop diagnosis, market prices, government
//! schemes, voice assistant) share one pattern: local state holds a request,
//! the simulated response engine produces a response after a fixed delay by
//! selecting from a static table, and the panel snapshot is re-rendered.
//! The top-level `Dashboard` owns the one cross-cutting value, the voice
//! listening flag, and hands it to the header and the voice panel.
//!
//! Nothing here talks to a network or a disk. Every "analysis" is a timer
//! followed by a lookup into `data`.

pub mod config;
pub mod dashboard;
pub mod data;
pub mod engine;
pub mod image;
pub mod listening;
pub mod locale;
pub mod notify;
pub mod panels;
pub mod render;

pub use config::DashboardConfig;
pub use dashboard::{Dashboard, Tab};
pub use engine::{AnalysisError, ResponseEngine};
pub use locale::Language;
pub use notify::{Notification, NotificationFeed, Notifier};
