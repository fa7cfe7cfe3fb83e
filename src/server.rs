use crate::catalog;
use crate::db::Database;
use crate::errors::{AppError, AppResult};
use crate::models::ListingFilters;
use crate::presentation::Presentation;
use crate::render::Renderer;
use crate::views::{self, CreateOutcome, ListingForm};
use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    db: Arc<Database>,
    renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(db: Database, renderer: Renderer) -> Self {
        Self {
            db: Arc::new(db),
            renderer: Arc::new(renderer),
        }
    }

    /// Runs one screen's store work on the blocking pool.
    async fn with_db<T, F>(&self, job: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> AppResult<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || job(&db)).await?
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    city: Option<String>,
    food_type: Option<String>,
    meal_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    report: Option<String>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .route("/healthz", get(healthz))
        .route("/dashboard", get(dashboard))
        .route("/listings", get(listings))
        .route("/listings/new", get(new_listing_form).post(create_listing))
        .route("/claims", get(claims))
        .route("/reports", get(reports))
        .route("/api/reports/{number}", get(report_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    Json(json!({"ok": true}))
}

async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, ErrorPage> {
    let screen = state.with_db(views::dashboard).await.map_err(|error| state.error(error))?;
    Ok(Html(state.renderer.dashboard(&screen)))
}

async fn listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, ErrorPage> {
    let filters = ListingFilters::from_selection(
        query.city.as_deref(),
        query.food_type.as_deref(),
        query.meal_type.as_deref(),
    );
    let screen = state
        .with_db(move |db| views::listing_browser(db, &filters))
        .await
        .map_err(|error| state.error(error))?;
    Ok(Html(state.renderer.listing_browser(&screen)))
}

async fn claims(State(state): State<AppState>) -> Result<Html<String>, ErrorPage> {
    let screen = state.with_db(views::claims_browser).await.map_err(|error| state.error(error))?;
    Ok(Html(state.renderer.claims_browser(&screen)))
}

async fn reports(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Html<String>, ErrorPage> {
    let report = views::resolve_report(query.report.as_deref()).map_err(|error| state.error(error))?;
    let screen = state
        .with_db(move |db| views::report_runner(db, report))
        .await
        .map_err(|error| state.error(error))?;
    Ok(Html(state.renderer.report_runner(&screen)))
}

async fn report_json(
    State(state): State<AppState>,
    Path(number): Path<u8>,
) -> Result<Json<Presentation>, AppError> {
    let report = catalog::find_by_number(number)
        .ok_or_else(|| AppError::NotFound(format!("unknown report: {number}")))?;
    let screen = state.with_db(move |db| views::report_runner(db, report)).await?;
    Ok(Json(screen.result))
}

async fn new_listing_form(State(state): State<AppState>) -> Html<String> {
    Html(state.renderer.listing_creator(&views::listing_creator(today())))
}

async fn create_listing(State(state): State<AppState>, Form(form): Form<ListingForm>) -> Response {
    let today = today();
    let result = state
        .with_db(move |db| views::create_listing(db, form, today))
        .await;
    match result {
        Ok(screen) => {
            let status = match screen.outcome {
                Some(CreateOutcome::Rejected { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::OK,
            };
            (status, Html(state.renderer.listing_creator(&screen))).into_response()
        }
        Err(error) => state.error(error).into_response(),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A failed screen render: the full page chrome around a generic message.
pub struct ErrorPage {
    status: StatusCode,
    html: String,
}

impl AppState {
    fn error(&self, error: AppError) -> ErrorPage {
        let status = status_for(&error);
        log_failure(&error, status);
        let message = match &error {
            AppError::NotFound(detail) | AppError::Validation(detail) => detail.clone(),
            _ => "Something went wrong while loading this screen.".to_string(),
        };
        ErrorPage {
            status,
            html: self.renderer.failure(&message),
        }
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        (self.status, Html(self.html)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        log_failure(&self, status);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Query(_) | AppError::Io(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_failure(error: &AppError, status: StatusCode) {
    if status.is_server_error() {
        tracing::error!(error = %error, status = status.as_u16(), "screen render failed");
    } else {
        tracing::warn!(error = %error, status = status.as_u16(), "request rejected");
    }
}
