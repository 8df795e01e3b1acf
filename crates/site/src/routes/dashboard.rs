//! Dashboard route handler.
//!
//! Shows the visitor's API key and plan alongside mock usage figures.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;
use crate::i18n::Localizer;
use crate::middleware::{PageContext, RequireAuth};
use crate::services::SessionUser;

/// Invoices processed per month, oldest first.
pub const MONTHLY_USAGE: &[(&str, u32)] = &[
    ("Jan", 45),
    ("Feb", 78),
    ("Mar", 123),
    ("Apr", 95),
    ("May", 156),
    ("Jun", 89),
];

/// Drawing area of the usage chart, in SVG user units.
const CHART_HEIGHT: u32 = 200;
const SLOT_WIDTH: u32 = 60;
const BAR_WIDTH: u32 = 40;

/// A headline figure with its month-over-month change.
#[derive(Debug, Clone)]
pub struct StatCard {
    pub title: String,
    pub value: &'static str,
    pub change: &'static str,
}

/// One bar of the usage chart, already laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub month: &'static str,
    pub invoices: u32,
    pub x: u32,
    pub y: u32,
    pub height: u32,
    /// Horizontal center, for the month label.
    pub label_x: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Activity {
    pub action: &'static str,
    pub detail: &'static str,
    pub time: &'static str,
}

pub const RECENT_ACTIVITY: &[Activity] = &[
    Activity {
        action: "Invoice processed",
        detail: "invoice_2024_001.pdf",
        time: "2 minutes ago",
    },
    Activity {
        action: "API call made",
        detail: "/extract",
        time: "5 minutes ago",
    },
    Activity {
        action: "Invoice processed",
        detail: "facture_012.pdf",
        time: "12 minutes ago",
    },
    Activity {
        action: "Invoice processed",
        detail: "invoice_dz_789.pdf",
        time: "1 hour ago",
    },
];

/// Headline figures in the active language.
#[must_use]
pub fn stat_cards(i18n: &Localizer) -> Vec<StatCard> {
    vec![
        StatCard {
            title: i18n.t("dashboard.processed").to_string(),
            value: "1,247",
            change: "+12%",
        },
        StatCard {
            title: i18n.t("dashboard.thisMonth").to_string(),
            value: "89",
            change: "+5%",
        },
    ]
}

/// Lay out bars scaled so the busiest month fills the chart.
#[must_use]
pub fn chart_bars(data: &[(&'static str, u32)]) -> Vec<ChartBar> {
    let max = data.iter().map(|&(_, n)| n).max().unwrap_or(0);

    (0u32..)
        .zip(data)
        .map(|(i, &(month, invoices))| {
            let height = if max == 0 {
                0
            } else {
                invoices * CHART_HEIGHT / max
            };
            let x = i * SLOT_WIDTH + (SLOT_WIDTH - BAR_WIDTH) / 2;
            ChartBar {
                month,
                invoices,
                x,
                y: CHART_HEIGHT - height,
                height,
                label_x: x + BAR_WIDTH / 2,
            }
        })
        .collect()
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub user: SessionUser,
    pub plan_note: &'static str,
    pub stats: Vec<StatCard>,
    pub bars: Vec<ChartBar>,
    pub chart_width: u32,
    pub chart_height: u32,
    pub activity: &'static [Activity],
}

/// Display the dashboard.
///
/// Anonymous visitors are redirected to `/login` by [`RequireAuth`].
#[instrument(skip_all)]
pub async fn dashboard(RequireAuth(user): RequireAuth, ctx: PageContext) -> impl IntoResponse {
    let bars = chart_bars(MONTHLY_USAGE);
    let chart_width = u32::try_from(bars.len()).unwrap_or(0) * SLOT_WIDTH;

    DashboardTemplate {
        plan_note: if user.current_plan.is_free() {
            "Free plan"
        } else {
            "Premium features"
        },
        stats: stat_cards(&ctx.i18n),
        bars,
        chart_width,
        chart_height: CHART_HEIGHT,
        activity: RECENT_ACTIVITY,
        user,
        ctx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tallest_bar_fills_chart() {
        let bars = chart_bars(MONTHLY_USAGE);

        assert_eq!(bars.len(), 6);
        let may = &bars[4];
        assert_eq!(may.month, "May");
        assert_eq!(may.height, CHART_HEIGHT);
        assert_eq!(may.y, 0);
        assert!(bars.iter().all(|b| b.height <= CHART_HEIGHT));
        assert_eq!(bars[0].height, 45 * CHART_HEIGHT / 156);
    }

    #[test]
    fn test_bars_are_evenly_spaced() {
        let bars = chart_bars(MONTHLY_USAGE);
        for pair in bars.windows(2) {
            assert_eq!(pair[1].x - pair[0].x, SLOT_WIDTH);
        }
        assert_eq!(bars[0].label_x, bars[0].x + BAR_WIDTH / 2);
    }

    #[test]
    fn test_empty_and_zero_usage() {
        assert!(chart_bars(&[]).is_empty());

        let bars = chart_bars(&[("Jan", 0), ("Feb", 0)]);
        assert!(bars.iter().all(|b| b.height == 0 && b.y == CHART_HEIGHT));
    }
}
