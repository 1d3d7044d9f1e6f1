use crate::render::render_summary;
use crate::state::AppState;
use crate::ui::DashboardPage;
use axum::{extract::State, response::Html};
use tracing::debug;

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let mut page = DashboardPage::new();
    let outcome = render_summary(&state.http, &state.api_base, &mut page).await;
    debug!("dashboard render pass finished: {outcome:?}");
    Html(page.into_html())
}
