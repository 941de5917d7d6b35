use app::catalog::NavigationEntry;

pub const URL_PATH: &str = "/links.json";

/// The catalog the page renders, as JSON.
pub async fn handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
) -> axum::Json<&'static [NavigationEntry]> {
    log::debug!("exporting {} navigation entries", ctx.catalog.len());
    axum::Json(ctx.catalog.entries())
}
