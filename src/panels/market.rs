//! Market price analysis panel.
//!
//! DESIGN
//! ======
//! Mounting the panel, changing the selected crop or market, and pressing
//! refresh all regenerate the whole price table and 7-day series. Results
//! are never merged: each completed refresh installs a brand new
//! `Arc<MarketSnapshot>`.
//!
//! TRADE-OFFS
//! ==========
//! Overlapping refreshes are not cancelled. Each is stamped with an issue
//! number and a completion only lands if nothing issued later has landed
//! already, so the panel always shows the latest request's data. `loading`
//! stays set until the last in-flight refresh finishes.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{debug, info};

use super::lock;
use crate::data::market::{Crop, Market, MarketPrice, PricePoint, Trend};
use crate::engine::ResponseEngine;

#[cfg(test)]
#[path = "market_test.rs"]
mod tests;

// =============================================================================
// SNAPSHOT
// =============================================================================

/// One regeneration's worth of market data.
#[derive(Debug, Serialize)]
pub struct MarketSnapshot {
    /// Issue number of the refresh that produced this snapshot.
    pub generation: u64,
    pub market: Market,
    pub prices: Vec<MarketPrice>,
    pub history: Vec<PricePoint>,
}

impl MarketSnapshot {
    #[must_use]
    pub fn price_for(&self, crop: Crop) -> Option<&MarketPrice> {
        self.prices.iter().find(|p| p.crop == crop.name())
    }

    /// Lowest and highest price of the 7-day series.
    #[must_use]
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut prices = self.history.iter().map(|p| p.price);
        let first = prices.next()?;
        Some(prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Selling advice for `crop`, if the table carries it.
    #[must_use]
    pub fn insight(&self, crop: Crop) -> Option<String> {
        let price = self.price_for(crop)?;
        let name = crop.name().to_lowercase();
        let change = price.percent_change.abs();
        Some(match price.trend {
            Trend::Up => format!(
                "Prices are {change}% higher than last week and demand is strong. Consider selling your {name} this week."
            ),
            Trend::Down => format!(
                "Prices are {change}% lower than last week. Consider holding your {name} if storage allows."
            ),
            Trend::Stable => format!("Prices for {name} are steady. Sell according to your harvest schedule."),
        })
    }
}

// =============================================================================
// PANEL
// =============================================================================

#[derive(Debug, Clone, Default, Serialize)]
pub struct MarketState {
    pub crop: Crop,
    pub market: Market,
    pub loading: bool,
    pub snapshot: Option<Arc<MarketSnapshot>>,
    #[serde(skip)]
    pub(crate) issued: u64,
    #[serde(skip)]
    pub(crate) applied: u64,
    #[serde(skip)]
    pub(crate) in_flight: usize,
}

#[derive(Clone)]
pub struct MarketPanel {
    state: Arc<Mutex<MarketState>>,
    engine: Arc<ResponseEngine>,
}

impl MarketPanel {
    #[must_use]
    pub fn new(engine: Arc<ResponseEngine>) -> Self {
        Self { state: Arc::new(Mutex::new(MarketState::default())), engine }
    }

    #[must_use]
    pub fn snapshot(&self) -> MarketState {
        lock(&self.state).clone()
    }

    /// Initial load when the panel is first shown.
    pub async fn mount(&self) -> Arc<MarketSnapshot> {
        self.refresh().await
    }

    /// Change the crop. Regenerates only when the value actually changed.
    pub async fn select_crop(&self, crop: Crop) -> Option<Arc<MarketSnapshot>> {
        {
            let mut state = lock(&self.state);
            if state.crop == crop {
                return None;
            }
            state.crop = crop;
        }
        info!(crop = crop.value(), "crop selected");
        Some(self.refresh().await)
    }

    /// Change the market. Regenerates only when the value actually changed.
    pub async fn select_market(&self, market: Market) -> Option<Arc<MarketSnapshot>> {
        {
            let mut state = lock(&self.state);
            if state.market == market {
                return None;
            }
            state.market = market;
        }
        info!(market = market.value(), "market selected");
        Some(self.refresh().await)
    }

    /// Set both selections and regenerate once.
    pub async fn load(&self, crop: Crop, market: Market) -> Arc<MarketSnapshot> {
        {
            let mut state = lock(&self.state);
            state.crop = crop;
            state.market = market;
        }
        info!(crop = crop.value(), market = market.value(), "selection loaded");
        self.refresh().await
    }

    /// Regenerate the price table and series, replacing the current ones.
    ///
    /// Returns the snapshot displayed once this refresh has finished.
    pub async fn refresh(&self) -> Arc<MarketSnapshot> {
        let (ticket, market) = {
            let mut state = lock(&self.state);
            state.issued += 1;
            state.in_flight += 1;
            state.loading = true;
            (state.issued, state.market)
        };
        debug!(panel = "market", ticket, "refresh started");

        let (prices, history) = self.engine.market_prices(market).await;
        let fresh = Arc::new(MarketSnapshot { generation: ticket, market, prices, history });

        let mut state = lock(&self.state);
        state.in_flight -= 1;
        state.loading = state.in_flight > 0;
        if ticket > state.applied {
            state.applied = ticket;
            state.snapshot = Some(Arc::clone(&fresh));
        } else {
            debug!(panel = "market", ticket, applied = state.applied, "stale refresh discarded");
        }
        state.snapshot.clone().unwrap_or(fresh)
    }
}
