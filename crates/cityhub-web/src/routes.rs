//! Route handlers. Each one loads the datasets it needs, hands them to the
//! filter engine and renders the result; nothing is kept between requests.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use cityhub_core::{
    filter,
    search::{self, SearchRequest},
    Dataset, Resource,
};

use crate::{error::AppError, pages, state::AppContext};

/// `?city=` on the listing pages. Absent means "no filter".
#[derive(Debug, Default, Deserialize)]
pub struct CityParams {
    #[serde(default)]
    pub city: String,
}

// ---------------------------------------------------------------------------
// HTML pages
// ---------------------------------------------------------------------------

pub async fn index(State(ctx): State<Arc<AppContext>>) -> Html<String> {
    let dataset = ctx.loader.load(Resource::Cities);
    let cities: Vec<_> = dataset.collection(Resource::Cities).collect();
    Html(pages::index(&cities))
}

pub async fn city_dashboard(
    State(ctx): State<Arc<AppContext>>,
    Path(city_name): Path<String>,
) -> Result<Html<String>, AppError> {
    let cities = ctx.loader.load(Resource::Cities);
    let help_centers = ctx.loader.load(Resource::HelpCenters);
    let schemes = ctx.loader.load(Resource::Schemes);

    let Some(city) = filter::find_city(&cities, &city_name) else {
        debug!(%city_name, "dashboard requested for unknown city");
        return Err(AppError::CityNotFound(city_name));
    };

    let centers = filter::help_centers_for(&help_centers, &city_name);
    let featured = filter::schemes_for_state(
        &schemes,
        city.state(),
        Some(ctx.limits.featured_schemes),
    );

    Ok(Html(pages::city_dashboard(&city, &centers, &featured)))
}

pub async fn schemes_page(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<CityParams>,
) -> Html<String> {
    let schemes = ctx.loader.load(Resource::Schemes);
    let cities = ctx.loader.load(Resource::Cities);

    let joined = if params.city.is_empty() {
        None
    } else {
        filter::schemes_for_city(&cities, &schemes, &params.city, None)
    };
    // An unknown city falls back to the full list.
    let listed = joined.unwrap_or_else(|| schemes.collection(Resource::Schemes).collect());

    Html(pages::schemes(&listed, &params.city))
}

pub async fn events_page(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<CityParams>,
) -> Html<String> {
    let events = ctx.loader.load(Resource::Events);

    let listed: Vec<_> = if params.city.is_empty() {
        events.collection(Resource::Events).collect()
    } else {
        filter::events_for_city(&events, &params.city)
    };

    Html(pages::events(&listed, &params.city))
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

pub async fn api_cities(State(ctx): State<Arc<AppContext>>) -> Json<Dataset> {
    Json(ctx.loader.load(Resource::Cities))
}

pub async fn api_help_centers(
    State(ctx): State<Arc<AppContext>>,
    Path(city_name): Path<String>,
) -> Response {
    let help_centers = ctx.loader.load(Resource::HelpCenters);
    let empty = serde_json::Value::Array(Vec::new());
    let centers = filter::help_centers_entry(&help_centers, &city_name).unwrap_or(&empty);
    Json(centers).into_response()
}

pub async fn api_search(
    State(ctx): State<Arc<AppContext>>,
    Query(request): Query<SearchRequest>,
) -> Json<Vec<search::SearchHit>> {
    let schemes = ctx.loader.load(Resource::Schemes);
    let help_centers = if request.city.is_empty() {
        Dataset::empty()
    } else {
        ctx.loader.load(Resource::HelpCenters)
    };

    let hits = search::search(&schemes, &help_centers, &request, ctx.limits.search_results);
    debug!(q = %request.q, city = %request.city, hits = hits.len(), "search");
    Json(hits)
}

pub async fn healthz() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
