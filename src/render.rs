use crate::chart::{summary_chart, ChartSpec};
use crate::client::{fetch_summary, SummaryFetch};
use crate::currency::format_brl;
use crate::errors::TargetError;
use crate::models::SummaryRow;
use crate::stats::{derive_stats, project_series};
use reqwest::Client;
use tracing::{error, info};

pub const BALANCE_CARD_ID: &str = "saldo-acumulado";
pub const LAST_MONTH_CARD_ID: &str = "ultimo-mes";
pub const AVERAGE_CARD_ID: &str = "media-3m";
pub const CHART_SURFACE_ID: &str = "summaryChart";

pub trait DisplayTarget {
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), TargetError>;
    fn render_chart(&mut self, id: &str, spec: &ChartSpec) -> Result<(), TargetError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    NoData,
    Failed,
}

// Never fails outward; fetch and target errors are logged and collapse to
// Failed, leaving the target's defaults in place.
pub async fn render_summary(
    http: &Client,
    api_base: &str,
    target: &mut impl DisplayTarget,
) -> RenderOutcome {
    apply_fetch(fetch_summary(http, api_base).await, target)
}

fn apply_fetch(fetch: SummaryFetch, target: &mut impl DisplayTarget) -> RenderOutcome {
    match fetch {
        SummaryFetch::Loaded(rows) => match apply_rows(&rows, target) {
            Ok(()) => RenderOutcome::Rendered,
            Err(err) => {
                error!("render pass aborted: {err}");
                RenderOutcome::Failed
            }
        },
        SummaryFetch::Empty => {
            info!("no summary data yet");
            RenderOutcome::NoData
        }
        SummaryFetch::Failed(err) => {
            error!("failed to load summary: {err}");
            RenderOutcome::Failed
        }
    }
}

fn apply_rows(rows: &[SummaryRow], target: &mut impl DisplayTarget) -> Result<(), TargetError> {
    let stats = derive_stats(rows);
    target.set_text(BALANCE_CARD_ID, &format_brl(stats.cumulative_balance))?;
    target.set_text(LAST_MONTH_CARD_ID, &format_brl(stats.last_month_total))?;
    target.set_text(AVERAGE_CARD_ID, &format_brl(stats.three_month_average))?;

    let spec = summary_chart(&project_series(rows));
    target.render_chart(CHART_SURFACE_ID, &spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FetchError;

    #[derive(Default)]
    struct FakeTarget {
        texts: Vec<(String, String)>,
        charts: Vec<(String, serde_json::Value)>,
        fail_text_writes: bool,
    }

    impl DisplayTarget for FakeTarget {
        fn set_text(&mut self, id: &str, text: &str) -> Result<(), TargetError> {
            if self.fail_text_writes {
                return Err(TargetError::MissingElement(id.to_string()));
            }
            self.texts.push((id.to_string(), text.to_string()));
            Ok(())
        }

        fn render_chart(&mut self, id: &str, spec: &ChartSpec) -> Result<(), TargetError> {
            self.charts
                .push((id.to_string(), serde_json::to_value(spec)?));
            Ok(())
        }
    }

    fn sample_rows() -> Vec<SummaryRow> {
        vec![
            SummaryRow {
                period: "2024-01".to_string(),
                income: 1000.0,
                expense: -400.0,
                total: 600.0,
                cumulative_balance: 600.0,
            },
            SummaryRow {
                period: "2024-02".to_string(),
                income: 1200.0,
                expense: -500.0,
                total: 700.0,
                cumulative_balance: 1300.0,
            },
        ]
    }

    #[test]
    fn loaded_rows_fill_all_three_cards_then_the_chart() {
        let mut target = FakeTarget::default();
        let outcome = apply_fetch(SummaryFetch::Loaded(sample_rows()), &mut target);

        assert_eq!(outcome, RenderOutcome::Rendered);
        assert_eq!(
            target.texts,
            [
                (BALANCE_CARD_ID.to_string(), "R$ 1.300,00".to_string()),
                (LAST_MONTH_CARD_ID.to_string(), "R$ 700,00".to_string()),
                (AVERAGE_CARD_ID.to_string(), "R$ 650,00".to_string()),
            ]
        );

        assert_eq!(target.charts.len(), 1);
        let (id, spec) = &target.charts[0];
        assert_eq!(id, CHART_SURFACE_ID);
        assert_eq!(spec["data"]["labels"], serde_json::json!(["2024-01", "2024-02"]));
        assert_eq!(
            spec["data"]["datasets"][3]["data"],
            serde_json::json!([600.0, 1300.0])
        );
    }

    #[test]
    fn empty_fetch_touches_nothing() {
        let mut target = FakeTarget::default();
        let outcome = apply_fetch(SummaryFetch::Empty, &mut target);

        assert_eq!(outcome, RenderOutcome::NoData);
        assert!(target.texts.is_empty());
        assert!(target.charts.is_empty());
    }

    #[test]
    fn failed_fetch_touches_nothing() {
        let mut target = FakeTarget::default();
        let err = FetchError::Request(reqwest_error());
        let outcome = apply_fetch(SummaryFetch::Failed(err), &mut target);

        assert_eq!(outcome, RenderOutcome::Failed);
        assert!(target.texts.is_empty());
        assert!(target.charts.is_empty());
    }

    #[test]
    fn target_error_collapses_to_failed_instead_of_propagating() {
        let mut target = FakeTarget {
            fail_text_writes: true,
            ..FakeTarget::default()
        };
        let outcome = apply_fetch(SummaryFetch::Loaded(sample_rows()), &mut target);

        assert_eq!(outcome, RenderOutcome::Failed);
        assert!(target.charts.is_empty());
    }

    fn reqwest_error() -> reqwest::Error {
        // Forces a builder error out of reqwest; the variant doesn't matter.
        reqwest::Client::builder()
            .build()
            .and_then(|client| client.get("not a url").build())
            .unwrap_err()
    }
}
