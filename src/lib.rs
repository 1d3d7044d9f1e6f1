pub mod app;
pub mod chart;
pub mod client;
pub mod currency;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod render;
pub mod stats;
pub mod ui;
pub mod state;

pub use app::router;
pub use client::{fetch_summary, resolve_api_base, SummaryFetch};
pub use render::{render_summary, DisplayTarget, RenderOutcome};
pub use state::AppState;
