use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, HealthResponse, NoMatchesResponse, SchoolQuery, SearchOutcome, SearchSchoolsRequest};
use crate::core::SchoolMatcher;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: SchoolMatcher,
}

/// Configure school directory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/school")
                .route("/addresses", web::get().to(list_addresses))
                .route("/boards", web::get().to(list_boards))
                .route("/fees", web::get().to(list_fees))
                .route("/search-schools", web::post().to(search_schools)),
        );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let schools = state.matcher.catalog().len();
    let status = if schools > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        schools,
    })
}

/// GET /api/school/addresses
async fn list_addresses(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.matcher.addresses())
}

/// GET /api/school/boards
async fn list_boards(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.matcher.boards())
}

/// GET /api/school/fees
///
/// Brackets are ordered by their numeric lower bound.
async fn list_fees(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.matcher.fee_brackets())
}

/// Search schools endpoint
///
/// POST /api/school/search-schools
///
/// Request body:
/// ```json
/// {
///   "addresses": ["string"],
///   "boards": ["string"],
///   "fees": "10000-50000"
/// }
/// ```
///
/// Responds 404 with `{"message": ...}` when no school matches any criterion.
async fn search_schools(
    state: web::Data<AppState>,
    req: web::Json<SearchSchoolsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let query = SchoolQuery::from(req.into_inner());

    tracing::debug!(
        "Searching schools: addresses={:?}, boards={:?}, fees={:?}",
        query.addresses,
        query.boards,
        query.fees
    );

    match state.matcher.search(&query) {
        SearchOutcome::Matches(schools) => {
            tracing::info!("Returning {} matching schools", schools.len());
            HttpResponse::Ok().json(schools)
        }
        SearchOutcome::NoMatches { message } => {
            tracing::info!("No schools matched the search");
            HttpResponse::NotFound().json(NoMatchesResponse { message })
        }
    }
}
