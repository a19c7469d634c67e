//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::{generate_articles, generate_ideas};
use crate::models::{GeneratedArticle, Idea, Style};
use crate::profiles::ProfileStatus;
use crate::state::AppState;

pub const MIN_IDEAS: i64 = 1;
pub const MAX_IDEAS: i64 = 20;
pub const MAX_ARTICLE_BATCH: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateIdeasRequest {
    pub style: String,
    pub n: i64,
}

#[derive(Debug, Serialize)]
pub struct GenerateIdeasResponse {
    pub ideas: Vec<Idea>,
    pub requested: u32,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateArticlesRequest {
    pub ideas: Vec<Idea>,
}

#[derive(Debug, Serialize)]
pub struct GenerateArticlesResponse {
    pub articles: Vec<GeneratedArticle>,
}

#[derive(Debug, Serialize)]
pub struct StyleInfo {
    pub id: Style,
    pub label: &'static str,
    pub guidance: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProfilesStatusResponse {
    #[serde(flatten)]
    pub profiles: ProfileStatus,
    pub credential_configured: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

/// Checks style and count before anything touches the filesystem or provider.
pub fn validate_ideas_request(request: &GenerateIdeasRequest) -> Result<(Style, u32), AppError> {
    let style = request
        .style
        .parse::<Style>()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if !(MIN_IDEAS..=MAX_IDEAS).contains(&request.n) {
        return Err(AppError::Validation(format!(
            "n must be between {MIN_IDEAS} and {MAX_IDEAS} (got {})",
            request.n
        )));
    }

    Ok((style, request.n as u32))
}

pub fn validate_articles_request(request: &GenerateArticlesRequest) -> Result<(), AppError> {
    if request.ideas.is_empty() {
        return Err(AppError::Validation(
            "ideas must contain at least one idea".to_string(),
        ));
    }
    if request.ideas.len() > MAX_ARTICLE_BATCH {
        return Err(AppError::Validation(format!(
            "At most {MAX_ARTICLE_BATCH} ideas can be expanded per request (got {})",
            request.ideas.len()
        )));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ideas/generate
///
/// Brainstorms `n` ideas in the requested style from a single completion.
/// Provider failures abort the whole request; no partial ideas are returned.
pub async fn handle_generate_ideas(
    State(state): State<AppState>,
    payload: Result<Json<GenerateIdeasRequest>, JsonRejection>,
) -> Result<Json<GenerateIdeasResponse>, AppError> {
    let Json(request) = payload?;
    let (style, count) = validate_ideas_request(&request)?;

    state
        .llm
        .ensure_configured()
        .map_err(|e| AppError::from_llm("Failed to generate ideas", e))?;
    let profiles = state.profiles.load().await?;

    let ideas = generate_ideas(state.llm.as_ref(), &profiles, style, count)
        .await
        .map_err(|e| AppError::from_llm("Failed to generate ideas", e))?;

    info!("Returning {}/{} ideas (style={})", ideas.len(), count, style);

    Ok(Json(GenerateIdeasResponse {
        ideas,
        requested: count,
        generated_at: Utc::now(),
    }))
}

/// POST /api/v1/articles/generate
///
/// Expands each submitted idea into an article, one at a time.
/// Configuration problems fail the request up front; per-idea provider
/// failures come back as placeholder articles.
pub async fn handle_generate_articles(
    State(state): State<AppState>,
    payload: Result<Json<GenerateArticlesRequest>, JsonRejection>,
) -> Result<Json<GenerateArticlesResponse>, AppError> {
    let Json(request) = payload?;
    validate_articles_request(&request)?;

    state
        .llm
        .ensure_configured()
        .map_err(|e| AppError::from_llm("Failed to generate articles", e))?;
    let profiles = state.profiles.load().await?;

    let articles = generate_articles(state.llm.as_ref(), &request.ideas, &profiles).await;

    Ok(Json(GenerateArticlesResponse { articles }))
}

/// GET /api/v1/styles
///
/// The four style selectors with display labels and guidance text.
pub async fn handle_list_styles() -> Json<Vec<StyleInfo>> {
    Json(
        Style::ALL
            .into_iter()
            .map(|style| StyleInfo {
                id: style,
                label: style.label(),
                guidance: style.guidance(),
            })
            .collect(),
    )
}

/// GET /api/v1/profiles/status
///
/// Lets an operator see which profile files are present and whether a
/// credential is configured, without reading any profile contents.
pub async fn handle_profiles_status(
    State(state): State<AppState>,
) -> Json<ProfilesStatusResponse> {
    Json(ProfilesStatusResponse {
        profiles: state.profiles.status().await,
        credential_configured: state.llm.ensure_configured().is_ok(),
    })
}
