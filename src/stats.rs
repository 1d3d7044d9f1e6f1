use crate::models::SummaryRow;

#[derive(Debug, Clone)]
pub struct SummarySeries {
    pub labels: Vec<String>,
    pub incomes: Vec<f64>,
    pub expenses: Vec<f64>,
    pub totals: Vec<f64>,
    pub cumulative: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct DerivedStats {
    pub cumulative_balance: f64,
    pub last_month_total: f64,
    pub three_month_average: f64,
}

pub fn project_series(rows: &[SummaryRow]) -> SummarySeries {
    let mut series = SummarySeries {
        labels: Vec::with_capacity(rows.len()),
        incomes: Vec::with_capacity(rows.len()),
        expenses: Vec::with_capacity(rows.len()),
        totals: Vec::with_capacity(rows.len()),
        cumulative: Vec::with_capacity(rows.len()),
    };

    for row in rows {
        series.labels.push(row.period.clone());
        series.incomes.push(row.income);
        series.expenses.push(row.expense);
        series.totals.push(row.total);
        series.cumulative.push(row.cumulative_balance);
    }

    series
}

pub fn derive_stats(rows: &[SummaryRow]) -> DerivedStats {
    let cumulative_balance = rows.last().map(|row| row.cumulative_balance).unwrap_or(0.0);
    let last_month_total = rows.last().map(|row| row.total).unwrap_or(0.0);

    let tail = &rows[rows.len().saturating_sub(3)..];
    let denom = tail.len().max(1) as f64;
    let three_month_average = tail.iter().map(|row| row.total).sum::<f64>() / denom;

    DerivedStats {
        cumulative_balance,
        last_month_total,
        three_month_average,
    }
}
