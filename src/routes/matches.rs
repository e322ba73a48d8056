use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{score_breakdown, summarize, GroupMatcher, MatchError};
use crate::models::{ErrorResponse, HealthResponse, MatchRequest, MatchResponse, ScorePairRequest};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: GroupMatcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/pair", web::post().to(pair_population))
        .route("/scores/pair", web::post().to(score_pair));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn unprocessable(err: MatchError) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: "Invalid population".to_string(),
        message: err.to_string(),
        status_code: 422,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Pair a population
///
/// POST /api/v1/matches/pair
///
/// Request body:
/// ```json
/// {
///   "people": { "Bob": [1, 2], "Eve": [5, 1] },
///   "groups": { "Bob": "A", "Eve": "C" }
/// }
/// ```
async fn pair_population(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for pair request: {:?}", errors);
        return validation_failed(errors);
    }

    let run_id = uuid::Uuid::new_v4().to_string();

    tracing::info!("Run {}: pairing {} people", run_id, req.people.len());

    let outcome = match state.matcher.run(&req.people, &req.groups) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!("Run {} rejected: {}", run_id, e);
            return unprocessable(e);
        }
    };

    let summary = match summarize(&outcome.match_map, &req.people) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Run {} could not be summarized: {}", run_id, e);
            return unprocessable(e);
        }
    };

    tracing::info!(
        "Run {}: {} pairs, {} unmatched, {} same-group skips",
        run_id,
        summary.total_pairs,
        summary.total_unmatched,
        outcome.skipped_same_group
    );

    HttpResponse::Ok().json(MatchResponse {
        run_id,
        matches: outcome.match_map,
        summary,
    })
}

/// Score two answer sets
///
/// POST /api/v1/scores/pair
///
/// Request body:
/// ```json
/// { "a": [1, 2], "b": [2, 3] }
/// ```
async fn score_pair(req: web::Json<ScorePairRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match score_breakdown(req.a, req.b) {
        Ok(breakdown) => HttpResponse::Ok().json(breakdown),
        Err(e) => unprocessable(e),
    }
}
