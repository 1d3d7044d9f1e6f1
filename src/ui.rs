use crate::chart::ChartSpec;
use crate::errors::TargetError;
use crate::render::{
    AVERAGE_CARD_ID, BALANCE_CARD_ID, CHART_SURFACE_ID, DisplayTarget, LAST_MONTH_CARD_ID,
};

pub const CARD_PLACEHOLDER: &str = "--";

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Dashboard Financeiro</title>
  <script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>
  <style>
    body { font-family: Arial, Helvetica, sans-serif; background: #f4f6f8; color: #222; margin: 0; padding: 2rem; }
    h1 { text-align: center; margin: 0 0 1.5rem; }
    .cards { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; margin-bottom: 2rem; }
    .card { background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.15); min-width: 12rem; padding: 1rem 2rem; text-align: center; }
    .card h2 { color: #666; font-size: 0.9rem; margin: 0 0 0.5rem; text-transform: uppercase; }
    .card p { font-size: 1.6rem; font-weight: bold; margin: 0; }
    .chart-box { background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.15); margin: 0 auto; max-width: 60rem; padding: 1rem; }
  </style>
</head>
<body>
  <h1>Dashboard Financeiro</h1>
  <div class="cards">
    <div class="card">
      <h2>Saldo acumulado</h2>
      <p id="saldo-acumulado">{{saldo-acumulado}}</p>
    </div>
    <div class="card">
      <h2>Último mês</h2>
      <p id="ultimo-mes">{{ultimo-mes}}</p>
    </div>
    <div class="card">
      <h2>Média (3 meses)</h2>
      <p id="media-3m">{{media-3m}}</p>
    </div>
  </div>
  <div class="chart-box">
    <canvas id="summaryChart"></canvas>
  </div>
  <script>
    const summaryConfig = {{summaryChart}};
    if (summaryConfig) {
      new Chart(document.getElementById("summaryChart"), summaryConfig);
    }
  </script>
</body>
</html>
"#;

pub struct DashboardPage {
    html: String,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            html: PAGE_HTML.to_string(),
        }
    }

    pub fn into_html(mut self) -> String {
        for id in [BALANCE_CARD_ID, LAST_MONTH_CARD_ID, AVERAGE_CARD_ID] {
            self.html = self.html.replace(&slot(id), CARD_PLACEHOLDER);
        }
        self.html.replace(&slot(CHART_SURFACE_ID), "null")
    }
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayTarget for DashboardPage {
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), TargetError> {
        let token = slot(id);
        if !self.html.contains(&token) {
            return Err(TargetError::MissingElement(id.to_string()));
        }
        self.html = self.html.replace(&token, text);
        Ok(())
    }

    fn render_chart(&mut self, id: &str, spec: &ChartSpec) -> Result<(), TargetError> {
        let token = slot(id);
        if !self.html.contains(&token) {
            return Err(TargetError::MissingElement(id.to_string()));
        }
        // a label containing </script> must not close the inline script
        let json = serde_json::to_string(spec)?.replace("</", "<\\/");
        self.html = self.html.replace(&token, &json);
        Ok(())
    }
}

fn slot(id: &str) -> String {
    format!("{{{{{id}}}}}")
}
