//! Dashboard metrics and the simulated refresh.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed delay of the simulated metrics refresh.
pub const REFRESH_DELAY: Duration = Duration::from_millis(800);

/// One snapshot of the dashboard's headline metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardMetrics {
    /// Revenue recognized this month.
    pub monthly_revenue: Money,
    /// Vehicles delivered this month.
    pub vehicles_sold: u32,
    /// Open deals across the pipeline.
    pub active_deals: u32,
    /// Lead-to-delivery conversion, 0.0..=1.0.
    pub conversion_rate: f64,
    /// Vehicles in dealer stock.
    pub inventory_count: u32,
    /// Month-over-month revenue change, percent.
    pub revenue_delta_pct: f64,
}

impl DashboardMetrics {
    /// Conversion rate as a percent string, e.g. "23.5%".
    pub fn conversion_display(&self) -> String {
        format!("{:.1}%", self.conversion_rate * 100.0)
    }

    /// Signed month-over-month delta, e.g. "+4.2%".
    pub fn revenue_delta_display(&self) -> String {
        format!("{:+.1}%", self.revenue_delta_pct)
    }

    /// Whether revenue is up on last month.
    pub fn revenue_trending_up(&self) -> bool {
        self.revenue_delta_pct >= 0.0
    }
}

/// Simulated metrics refresh: waits [`REFRESH_DELAY`] and resolves with
/// the snapshot. Mirrors a network round trip; no cancellation or retry.
pub async fn refresh(metrics: DashboardMetrics) -> DashboardMetrics {
    sleep(REFRESH_DELAY).await;
    metrics
}

// In the browser the app's futures run on the microtask queue with no
// tokio reactor, so the delay must come from a browser timer there.
#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn snapshot() -> DashboardMetrics {
        DashboardMetrics {
            monthly_revenue: Money::krw(1_240_000_000),
            vehicles_sold: 23,
            active_deals: 41,
            conversion_rate: 0.235,
            inventory_count: 67,
            revenue_delta_pct: 4.2,
        }
    }

    #[test]
    fn test_display_helpers() {
        let m = snapshot();
        assert_eq!(m.conversion_display(), "23.5%");
        assert_eq!(m.revenue_delta_display(), "+4.2%");
        assert!(m.revenue_trending_up());

        let down = DashboardMetrics {
            revenue_delta_pct: -1.3,
            ..snapshot()
        };
        assert_eq!(down.revenue_delta_display(), "-1.3%");
        assert!(!down.revenue_trending_up());
    }

    #[tokio::test]
    async fn test_refresh_waits_and_returns_snapshot() {
        let start = Instant::now();
        let refreshed = refresh(snapshot()).await;
        assert!(start.elapsed() >= REFRESH_DELAY);
        assert_eq!(refreshed, snapshot());
    }

    // Browser timers take a u32 millisecond argument.
    #[test]
    fn test_refresh_delay_fits_browser_timer() {
        assert!(u32::try_from(REFRESH_DELAY.as_millis()).is_ok());
    }
}
