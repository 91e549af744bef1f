use crate::core::{compatibility_score, score_breakdown, Matcher};
use crate::models::{
    CompatibilityResponse, ErrorResponse, HealthResponse, MatchListResponse, WelcomeResponse,
};
use crate::services::ProfileStore;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

/// Application state shared across all handlers
///
/// The store is read-only for the process lifetime, so sharing the Arc
/// across workers needs no further synchronization.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStore>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/match/{user_id}", web::post().to(find_matches))
        .route(
            "/compatibility/{user_id1}/{user_id2}",
            web::get().to(get_compatibility),
        );
}

/// Root welcome endpoint
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse {
        message: "Welcome to the Ember matchmaking API".to_string(),
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    // No external dependencies to degrade: the dataset is in memory
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/match/{user_id}
///
/// Ranks every other profile in the dataset against the subject and
/// returns the non-zero matches sorted by descending compatibility score.
async fn find_matches(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    let subject = match state.store.get(&user_id) {
        Some(profile) => profile,
        None => {
            tracing::info!("Match request for unknown user: {}", user_id);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "User not found".to_string(),
                message: format!("No profile with id '{}'", user_id),
                status_code: 404,
            });
        }
    };

    let outcome = state.matcher.rank(subject, state.store.all());

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        outcome.matches.len(),
        user_id,
        outcome.total_candidates
    );

    HttpResponse::Ok().json(MatchListResponse {
        user_id,
        matches: outcome.matches,
        total_candidates: outcome.total_candidates,
    })
}

/// Pairwise compatibility endpoint
///
/// GET /api/v1/compatibility/{user_id1}/{user_id2}
///
/// Returns the rounded compatibility score plus the per-dimension
/// sub-score breakdown. The breakdown is reported even when the
/// gender-preference gate zeroes the total.
async fn get_compatibility(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (user_id1, user_id2) = path.into_inner();

    let (user1, user2) = match (state.store.get(&user_id1), state.store.get(&user_id2)) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            tracing::info!(
                "Compatibility request with unknown user(s): {} / {}",
                user_id1,
                user_id2
            );
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "User not found".to_string(),
                message: "One or both users not found".to_string(),
                status_code: 404,
            });
        }
    };

    let score = compatibility_score(user1, user2, state.matcher.params());
    let breakdown = score_breakdown(user1, user2, state.matcher.params());

    HttpResponse::Ok().json(CompatibilityResponse {
        user1_id: user_id1,
        user2_id: user_id2,
        compatibility_score: score,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    const DATASET: &str = r#"{
        "users": [
            {
                "id": "u1",
                "name": "Alice",
                "age": 29,
                "gender": "female",
                "interested_in": "male",
                "location": "New York",
                "hobbies": ["cooking", "hiking"],
                "interests": ["travel", "music"],
                "occupation": "Designer",
                "education_level": "Masters",
                "personality_traits": ["creative"]
            },
            {
                "id": "u2",
                "name": "Bob",
                "age": 31,
                "gender": "male",
                "interested_in": "female",
                "location": "New York",
                "hobbies": ["cooking"],
                "interests": ["travel", "music"],
                "occupation": "Engineer",
                "education_level": "Masters",
                "personality_traits": ["analytical"]
            }
        ]
    }"#;

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(ProfileStore::from_json(DATASET).unwrap()),
            matcher: Matcher::with_default_params(),
        }
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "healthy");
    }

    #[actix_web::test]
    async fn test_find_matches_unknown_user() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/v1/match/nobody").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_find_matches_returns_ranked_list() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/v1/match/u1").to_request();
        let resp: MatchListResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.user_id, "u1");
        assert_eq!(resp.total_candidates, 2);
        assert_eq!(resp.matches.len(), 1);
        assert_eq!(resp.matches[0].user_id, "u2");
        assert!(resp.matches[0].compatibility_score > 0.0);
    }

    #[actix_web::test]
    async fn test_compatibility_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/compatibility/u1/u2")
            .to_request();
        let resp: CompatibilityResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.user1_id, "u1");
        assert_eq!(resp.user2_id, "u2");
        assert!(resp.compatibility_score > 0.0 && resp.compatibility_score <= 1.0);
        assert_eq!(resp.breakdown.location, 1.0);
    }

    #[actix_web::test]
    async fn test_compatibility_unknown_user() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/compatibility/u1/nobody")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_welcome_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
