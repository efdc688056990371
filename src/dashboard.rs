//! Top-level dashboard container.
//!
//! DESIGN
//! ======
//! `Dashboard` wires one engine, one notifier and one listening flag into
//! the four panels and the header. It owns the active tab and the listening
//! flag; each panel owns its own state. The header and the voice panel are
//! the only holders of the flag.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::engine::ResponseEngine;
use crate::listening::ListeningFlag;
use crate::notify::Notifier;
use crate::panels::{DiagnosisPanel, MarketPanel, SchemesPanel, VoicePanel};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;

// =============================================================================
// TABS
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Diagnosis,
    Market,
    Schemes,
    Voice,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Diagnosis, Self::Market, Self::Schemes, Self::Voice];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Diagnosis => "Diagnosis",
            Self::Market => "Market",
            Self::Schemes => "Schemes",
            Self::Voice => "Voice",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab '{0}'")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(&wanted))
            .ok_or(UnknownTab(wanted))
    }
}

// =============================================================================
// HEADER
// =============================================================================

/// Header bar. Its mic button toggles the same flag the voice panel reads.
#[derive(Debug, Clone)]
pub struct Header {
    listening: ListeningFlag,
}

impl Header {
    pub fn toggle_voice(&self) -> bool {
        self.listening.toggle()
    }

    #[must_use]
    pub fn mic_label(&self) -> &'static str {
        if self.listening.is_listening() { "Stop Listening" } else { "Start Speaking" }
    }
}

/// A quick-stat card shown above the tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadlineStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static HEADLINE_STATS: &[HeadlineStat] = &[
    HeadlineStat { value: "98%", label: "Diagnosis Accuracy" },
    HeadlineStat { value: "₹45/kg", label: "Tomato Price" },
    HeadlineStat { value: "150+", label: "Govt Schemes" },
    HeadlineStat { value: "₹5L+", label: "Subsidy Available" },
];

// =============================================================================
// DASHBOARD
// =============================================================================

pub struct Dashboard {
    active_tab: Tab,
    header: Header,
    pub diagnosis: DiagnosisPanel,
    pub market: MarketPanel,
    pub schemes: SchemesPanel,
    pub voice: VoicePanel,
}

impl Dashboard {
    #[must_use]
    pub fn new(config: &DashboardConfig, notifier: Notifier) -> Self {
        let engine = Arc::new(ResponseEngine::new(config));
        let listening = ListeningFlag::new(notifier.clone());
        info!(seeded = config.seed.is_some(), language = %config.language, "dashboard initialized");

        Self {
            active_tab: Tab::default(),
            header: Header { listening: listening.clone() },
            diagnosis: DiagnosisPanel::new(Arc::clone(&engine), notifier.clone()),
            market: MarketPanel::new(Arc::clone(&engine)),
            schemes: SchemesPanel::new(),
            voice: VoicePanel::new(engine, notifier, listening, config),
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        debug!(from = %self.active_tab, to = %tab, "tab selected");
        self.active_tab = tab;
    }

    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    #[must_use]
    pub fn headline_stats() -> &'static [HeadlineStat] {
        HEADLINE_STATS
    }
}
