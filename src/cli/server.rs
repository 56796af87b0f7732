//! HTTP server mode for REST API access to the question bank

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bank::{Bank, QuestionDraft};
use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::page::{paginate, resolve_page};
use crate::quiz::{self, QuizOutcome};
use crate::types::{CategoryFilter, CategoryId, QuestionId};

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    bank: Arc<dyn Bank>,
    config: ServiceConfig,
}

/// Page query parameter accepted by the listing endpoints
#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<i64>,
}

/// Build the application router
pub fn router(bank: Arc<dyn Bank>, config: ServiceConfig) -> Router {
    let state = AppState { bank, config };

    // Allow all origins - the bank serves a public browser frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/categories", get(list_categories))
        .route("/categories/:id/questions", get(questions_by_category))
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/:id", delete(delete_question))
        .route("/questions/search", post(search_questions))
        .route("/quizzes/next", post(quiz_next))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(bank: Arc<dyn Bank>, config: ServiceConfig) -> Result<()> {
    let port = config.port;
    let app = router(bank, config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// JSON error body matching the API's error contract
fn error_response(err: &Error) -> Response {
    let status =
        StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if !err.is_client_error() {
        tracing::error!(error = %err, "request failed");
    }
    (
        status,
        Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}

fn ok_response(body: Value) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

// ============================================================================
// Request body helpers
// ============================================================================

fn require_field<'a>(body: &'a Value, key: &str) -> Result<&'a Value> {
    body.get(key)
        .ok_or_else(|| Error::invalid_argument(format!("missing required field '{key}'")))
}

fn require_str<'a>(body: &'a Value, key: &str) -> Result<&'a str> {
    require_field(body, key)?
        .as_str()
        .ok_or_else(|| Error::invalid_argument(format!("field '{key}' must be a string")))
}

fn require_u64(body: &Value, key: &str) -> Result<u64> {
    require_field(body, key)?
        .as_u64()
        .ok_or_else(|| {
            Error::invalid_argument(format!("field '{key}' must be a non-negative integer"))
        })
}

fn draft_from_body(body: &Value) -> Result<QuestionDraft> {
    let difficulty = require_u64(body, "difficulty")?;
    Ok(QuestionDraft {
        question: require_str(body, "question")?.to_string(),
        answer: require_str(body, "answer")?.to_string(),
        difficulty: u8::try_from(difficulty)
            .map_err(|_| Error::invalid_argument("difficulty out of range"))?,
        category: CategoryId(require_u64(body, "category")?),
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Paginated category listing
async fn list_categories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Response {
    let result = async {
        let page = resolve_page(query.page)?;
        let categories = state.bank.list_categories().await?;
        if categories.is_empty() {
            return Err(Error::not_found("the bank has no categories"));
        }

        let shaped = paginate(&categories, page, state.config.categories_per_page)?;
        Ok(json!({
            "success": true,
            "categories": shaped.items,
            "total_categories": shaped.total,
        }))
    }
    .await;

    match result {
        Ok(body) => ok_response(body),
        Err(e) => error_response(&e),
    }
}

/// Paginated question listing across all categories
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Response {
    let result = async {
        let page = resolve_page(query.page)?;
        let questions = state.bank.list_questions(CategoryFilter::Any).await?;
        if questions.is_empty() {
            return Err(Error::not_found("the bank has no questions"));
        }

        let shaped = paginate(&questions, page, state.config.questions_per_page)?;
        let categories = state.bank.list_categories().await?;
        Ok(json!({
            "success": true,
            "questions": shaped.items,
            "total_questions": shaped.total,
            "categories": categories,
            "current_category": Value::Null,
        }))
    }
    .await;

    match result {
        Ok(body) => ok_response(body),
        Err(e) => error_response(&e),
    }
}

/// Create a new question
async fn create_question(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    let result = async {
        let draft = draft_from_body(&body)?;
        let question = state.bank.insert_question(draft).await?;
        tracing::info!(id = %question.id, "created question");
        Ok(json!({
            "success": true,
            "created_with_id": question.id,
        }))
    }
    .await;

    match result {
        Ok(body) => ok_response(body),
        Err(e) => error_response(&e),
    }
}

/// Delete a question by id
async fn delete_question(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> Response {
    let id = QuestionId(id);
    match state.bank.delete_question(id).await {
        Ok(()) => {
            tracing::info!(id = %id, "deleted question");
            ok_response(json!({
                "success": true,
                "deleted": id,
            }))
        }
        Err(e) => error_response(&e),
    }
}

/// Substring search over question and answer text
async fn search_questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    Json(body): Json<Value>,
) -> Response {
    let result = async {
        let term = require_str(&body, "searchTerm")?;
        let page = resolve_page(query.page)?;

        let matches = state.bank.search_questions(term).await?;
        if matches.is_empty() {
            return Err(Error::not_found(format!("no questions match '{term}'")));
        }

        let shaped = paginate(&matches, page, state.config.questions_per_page)?;
        Ok(json!({
            "success": true,
            "questions": shaped.items,
            "total_questions": shaped.total,
            "current_category": Value::Null,
        }))
    }
    .await;

    match result {
        Ok(body) => ok_response(body),
        Err(e) => error_response(&e),
    }
}

/// Paginated question listing for one category
async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Query(query): Query<PageQuery>,
) -> Response {
    let result = async {
        let page = resolve_page(query.page)?;
        let category = state
            .bank
            .get_category(CategoryId(id))
            .await?
            .ok_or_else(|| Error::not_found(format!("category {id} does not exist")))?;

        let questions = state
            .bank
            .list_questions(CategoryFilter::Category(category.id))
            .await?;
        let shaped = paginate(&questions, page, state.config.questions_per_page)?;
        Ok(json!({
            "success": true,
            "questions": shaped.items,
            "total_questions": shaped.total,
            "current_category": category.kind,
        }))
    }
    .await;

    match result {
        Ok(body) => ok_response(body),
        Err(e) => error_response(&e),
    }
}

/// Quiz-play endpoint: one random unseen question for a category.
///
/// Category id 0 means "any category". An exhausted session responds with
/// `question: null` and success, distinct from the 404 of a category that
/// has no questions at all.
async fn quiz_next(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> Response {
    let result = async {
        let category = require_field(&body, "quiz_category")?;
        let category_id = require_u64(category, "id")?;
        let previous = require_field(&body, "previous_questions")?
            .as_array()
            .ok_or_else(|| Error::invalid_argument("'previous_questions' must be an array"))?;

        let previously_seen: HashSet<QuestionId> = previous
            .iter()
            .map(|v| {
                v.as_u64().map(QuestionId).ok_or_else(|| {
                    Error::invalid_argument("'previous_questions' entries must be question ids")
                })
            })
            .collect::<Result<_>>()?;

        let filter = CategoryFilter::from_wire(category_id);
        let pool = state.bank.list_questions(filter).await?;
        let outcome = quiz::select_next(&pool, &previously_seen, &mut rand::thread_rng())?;

        Ok(match outcome {
            QuizOutcome::Picked(question) => json!({
                "success": true,
                "question": question,
            }),
            QuizOutcome::Exhausted => json!({
                "success": true,
                "question": Value::Null,
            }),
        })
    }
    .await;

    match result {
        Ok(body) => ok_response(body),
        Err(e) => error_response(&e),
    }
}
