use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "year_month")]
    pub period: String,
    pub income: f64,
    pub expense: f64,
    pub total: f64,
    pub cumulative_balance: f64,
}

#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub summary: Vec<SummaryRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rows_with_wire_field_names() {
        let body = r#"{
            "summary": [
                {"year_month": "2024-01", "income": 1000.0, "expense": -400.0,
                 "total": 600.0, "cumulative_balance": 600.0}
            ]
        }"#;

        let response: SummaryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.summary.len(), 1);
        let row = &response.summary[0];
        assert_eq!(row.period, "2024-01");
        assert_eq!(row.income, 1000.0);
        assert_eq!(row.expense, -400.0);
        assert_eq!(row.total, 600.0);
        assert_eq!(row.cumulative_balance, 600.0);
    }

    #[test]
    fn missing_summary_key_decodes_as_empty() {
        let response: SummaryResponse = serde_json::from_str("{}").unwrap();
        assert!(response.summary.is_empty());
    }

    #[test]
    fn unknown_top_level_fields_are_ignored() {
        let body = r#"{"summary": [], "generated_at": "2024-03-01T00:00:00Z"}"#;
        let response: SummaryResponse = serde_json::from_str(body).unwrap();
        assert!(response.summary.is_empty());
    }

    #[test]
    fn preserves_wire_order() {
        let body = r#"{
            "summary": [
                {"year_month": "2024-02", "income": 0.0, "expense": 0.0,
                 "total": 0.0, "cumulative_balance": 0.0},
                {"year_month": "2024-01", "income": 0.0, "expense": 0.0,
                 "total": 0.0, "cumulative_balance": 0.0}
            ]
        }"#;

        let response: SummaryResponse = serde_json::from_str(body).unwrap();
        let periods: Vec<&str> = response
            .summary
            .iter()
            .map(|row| row.period.as_str())
            .collect();
        assert_eq!(periods, ["2024-02", "2024-01"]);
    }
}
