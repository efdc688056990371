//! Plain-text rendering of panel snapshots.
//!
//! Every function takes an owned snapshot and returns the text to print, so
//! rendering never touches live panel state.

use std::fmt::Write;

use crate::dashboard::{HeadlineStat, Tab};
use crate::data::market::Trend;
use crate::data::schemes::Scheme;
use crate::notify::{Notification, Variant};
use crate::panels::diagnosis::DiagnosisState;
use crate::panels::market::MarketState;
use crate::panels::schemes::SchemesState;
use crate::panels::voice::{Role, VoiceState};

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

const BAR_WIDTH: usize = 20;

/// `[#####---------------]  25%`
#[must_use]
pub fn progress_bar(progress: u8) -> String {
    let progress = progress.min(100);
    let filled = usize::from(progress) * BAR_WIDTH / 100;
    format!("[{}{}] {progress:>3}%", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[must_use]
pub fn tabs(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|&t| if t == active { format!("[{t}]") } else { format!(" {t} ") })
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn headline_stats(stats: &[HeadlineStat]) -> String {
    stats
        .iter()
        .map(|s| format!("{} {}", s.value, s.label))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[must_use]
pub fn notification(n: &Notification) -> String {
    match n.variant {
        Variant::Default => format!("[{}] {}", n.title, n.description),
        Variant::Destructive => format!("[!! {}] {}", n.title, n.description),
    }
}

// =============================================================================
// PANELS
// =============================================================================

#[must_use]
pub fn diagnosis(state: &DiagnosisState, tips: &[&str]) -> String {
    let mut out = String::from("Crop Disease Diagnosis\n");
    match &state.image {
        Some(image) if image.is_empty() => {
            let _ = writeln!(out, "  Image: {} ({}, empty file)", image.file_name, image.media_type);
        }
        Some(image) => {
            let _ = writeln!(out, "  Image: {} ({}, {} bytes)", image.file_name, image.media_type, image.len());
        }
        None => out.push_str("  No image uploaded\n"),
    }
    if state.analyzing {
        let _ = writeln!(out, "  Analyzing crop image... {}", progress_bar(state.progress));
    } else if let Some(result) = &state.result {
        let _ = writeln!(out, "  Disease Identified: {} ({})", result.disease, result.localized_name);
        let _ = writeln!(out, "  {}% Confidence | {} Severity", result.confidence, result.severity);
        let _ = writeln!(out, "  Treatment: {}", result.treatment);
        let _ = writeln!(out, "  Prevention Tips: {}", result.prevention);
    }
    if !tips.is_empty() {
        out.push_str("  Photo tips:\n");
        for tip in tips {
            let _ = writeln!(out, "    - {tip}");
        }
    }
    out
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Stable => "■",
    }
}

#[must_use]
pub fn market(state: &MarketState) -> String {
    let mut out = String::from("Real-Time Market Analysis\n");
    let _ = writeln!(
        out,
        "  Crop: {} ({}) | Market: {} Mandi",
        state.crop.name(),
        state.crop.localized_name(),
        state.market.name()
    );
    if state.loading {
        out.push_str("  Updating...\n");
    }
    let Some(snapshot) = &state.snapshot else {
        return out;
    };

    for price in &snapshot.prices {
        let sign = if price.percent_change > 0.0 { "+" } else { "" };
        let _ = writeln!(
            out,
            "  {} {:<8} ₹{} {} (was ₹{}) {sign}{}% | {} Mandi",
            trend_marker(price.trend),
            price.crop,
            price.current_price,
            price.unit,
            price.previous_price,
            price.percent_change,
            price.market
        );
    }

    out.push_str("  7-Day Price Trend:");
    for point in &snapshot.history {
        let _ = write!(out, " {} ₹{}", point.label, point.price);
    }
    out.push('\n');
    if let Some((lo, hi)) = snapshot.price_range() {
        let _ = writeln!(out, "  Range: ₹{lo} - ₹{hi}");
    }
    if let Some(insight) = snapshot.insight(state.crop) {
        let _ = writeln!(out, "  Best Selling Time: {insight}");
    }
    out
}

#[must_use]
pub fn schemes(state: &SchemesState, visible: &[&Scheme]) -> String {
    let mut out = String::from("Government Agricultural Schemes\n");
    let _ = writeln!(out, "  Search: {:?} | Category: {}", state.search, state.category.label());
    if visible.is_empty() {
        out.push_str("  No schemes match your search.\n");
        return out;
    }
    for scheme in visible {
        let _ = writeln!(out, "  #{} {} ({})", scheme.id, scheme.name, scheme.localized_name);
        let _ = writeln!(out, "     {} | {} | Deadline: {}", scheme.category.label(), scheme.subsidy, scheme.deadline);
        let _ = writeln!(out, "     {}", scheme.description);
        let _ = writeln!(out, "     Eligibility: {}", scheme.eligibility.join("; "));
        let _ = writeln!(out, "     Documents: {}", scheme.documents.join(", "));
        let _ = writeln!(out, "     {} | Apply: {}", scheme.department, scheme.application_url);
    }
    out
}

#[must_use]
pub fn voice(state: &VoiceState) -> String {
    let mut out = String::from("Voice Assistant\n");
    let _ = writeln!(
        out,
        "  Language: {} | Mic: {}{}",
        state.language.label(),
        if state.listening { "listening" } else { "off" },
        if state.playing { " | Playing audio..." } else { "" }
    );
    for message in &state.messages {
        let who = match message.role {
            Role::User => "You",
            Role::Assistant => "Kisan",
        };
        let _ = writeln!(out, "  {who} [{}]: {}", message.language, message.text);
    }
    out
}
