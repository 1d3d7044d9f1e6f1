use crate::stats::SummarySeries;
use serde::Serialize;

const INCOME_LINE: &str = "rgba(75, 192, 192, 1)";
const INCOME_FILL: &str = "rgba(75, 192, 192, 0.2)";
const EXPENSE_LINE: &str = "rgba(255, 99, 132, 1)";
const EXPENSE_FILL: &str = "rgba(255, 99, 132, 0.2)";
const NET_LINE: &str = "rgba(54, 162, 235, 1)";
const NET_FILL: &str = "rgba(54, 162, 235, 0.2)";
const CUMULATIVE_LINE: &str = "rgba(153, 102, 255, 1)";
const CUMULATIVE_FILL: &str = "rgba(153, 102, 255, 0.2)";

const CURVE_TENSION: f64 = 0.2;
const SECONDARY_AXIS: &str = "y1";

#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    #[serde(rename = "borderColor")]
    pub border_color: &'static str,
    #[serde(rename = "backgroundColor")]
    pub background_color: &'static str,
    pub fill: bool,
    pub tension: f64,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub interaction: Interaction,
    pub stacked: bool,
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize)]
pub struct Interaction {
    pub mode: &'static str,
    pub intersect: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scales {
    pub y: Axis,
    pub y1: Axis,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub position: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<AxisGrid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisGrid {
    #[serde(rename = "drawOnChartArea")]
    pub draw_on_chart_area: bool,
}

pub fn summary_chart(series: &SummarySeries) -> ChartSpec {
    ChartSpec {
        kind: "line",
        data: ChartData {
            labels: series.labels.clone(),
            datasets: vec![
                dataset("Receitas", series.incomes.clone(), INCOME_LINE, INCOME_FILL),
                dataset("Despesas", series.expenses.clone(), EXPENSE_LINE, EXPENSE_FILL),
                dataset("Saldo do mês", series.totals.clone(), NET_LINE, NET_FILL),
                Dataset {
                    y_axis_id: Some(SECONDARY_AXIS),
                    ..dataset(
                        "Saldo acumulado",
                        series.cumulative.clone(),
                        CUMULATIVE_LINE,
                        CUMULATIVE_FILL,
                    )
                },
            ],
        },
        options: ChartOptions {
            responsive: true,
            interaction: Interaction {
                mode: "index",
                intersect: false,
            },
            stacked: false,
            scales: Scales {
                y: Axis {
                    kind: "linear",
                    position: "left",
                    grid: None,
                },
                y1: Axis {
                    kind: "linear",
                    position: "right",
                    grid: Some(AxisGrid {
                        draw_on_chart_area: false,
                    }),
                },
            },
        },
    }
}

fn dataset(
    label: &'static str,
    data: Vec<f64>,
    border_color: &'static str,
    background_color: &'static str,
) -> Dataset {
    Dataset {
        label,
        data,
        border_color,
        background_color,
        fill: true,
        tension: CURVE_TENSION,
        y_axis_id: None,
    }
}
