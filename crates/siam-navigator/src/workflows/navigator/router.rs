use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::legal::{LegalDomain, LegalError};
use super::profile::UserProfile;
use super::service::NavigatorService;
use super::AnalysisError;
use crate::workflows::response::ServiceResponse;

/// Router builder exposing the visa, tax, and legal lookups.
pub fn navigator_router(service: Arc<NavigatorService>) -> Router {
    Router::new()
        .route("/api/v1/navigator/analysis", post(analysis_handler))
        .route("/api/v1/navigator/tax", post(tax_handler))
        .route(
            "/api/v1/navigator/tax/treaties/:nationality",
            get(treaty_handler),
        )
        .route("/api/v1/navigator/legal/:domain", get(domain_topics_handler))
        .route("/api/v1/navigator/legal/:domain/:topic", get(topic_handler))
        .route("/api/v1/navigator/legal-resources", get(resources_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResourceQuery {
    pub category: Option<String>,
}

pub(crate) async fn analysis_handler(
    State(service): State<Arc<NavigatorService>>,
    axum::Json(profile): axum::Json<UserProfile>,
) -> Response {
    match service.analyze(&profile) {
        Ok(output) => respond(StatusCode::OK, ServiceResponse::ok(output)),
        Err(err) => internal_error(err),
    }
}

pub(crate) async fn tax_handler(
    State(service): State<Arc<NavigatorService>>,
    axum::Json(profile): axum::Json<UserProfile>,
) -> Response {
    match service.analyze_tax(&profile) {
        Ok(analysis) => respond(StatusCode::OK, ServiceResponse::ok(analysis)),
        Err(err) => internal_error(err),
    }
}

pub(crate) async fn treaty_handler(
    State(service): State<Arc<NavigatorService>>,
    Path(nationality): Path<String>,
) -> Response {
    respond(StatusCode::OK, ServiceResponse::ok(service.treaty(&nationality)))
}

pub(crate) async fn domain_topics_handler(
    State(service): State<Arc<NavigatorService>>,
    Path(domain): Path<String>,
) -> Response {
    match domain.parse::<LegalDomain>() {
        Ok(domain) => respond(StatusCode::OK, ServiceResponse::ok(service.domain_topics(domain))),
        Err(err) => respond(
            StatusCode::BAD_REQUEST,
            ServiceResponse::<()>::failure(err.to_string()),
        ),
    }
}

pub(crate) async fn topic_handler(
    State(service): State<Arc<NavigatorService>>,
    Path((domain, topic)): Path<(String, String)>,
) -> Response {
    let domain = match domain.parse::<LegalDomain>() {
        Ok(domain) => domain,
        Err(err) => {
            return respond(
                StatusCode::BAD_REQUEST,
                ServiceResponse::<()>::failure(err.to_string()),
            )
        }
    };

    match service.legal_topic(domain, &topic) {
        Ok(topic) => respond(StatusCode::OK, ServiceResponse::ok(topic)),
        Err(err @ LegalError::TopicNotFound { .. }) => respond(
            StatusCode::NOT_FOUND,
            ServiceResponse::<()>::failure(err.to_string()),
        ),
    }
}

pub(crate) async fn resources_handler(
    State(service): State<Arc<NavigatorService>>,
    Query(query): Query<ResourceQuery>,
) -> Response {
    let resources = service.legal_resources(query.category.as_deref());
    respond(StatusCode::OK, ServiceResponse::ok(resources))
}

fn respond<T: Serialize>(status: StatusCode, body: ServiceResponse<T>) -> Response {
    (status, axum::Json(body)).into_response()
}

fn internal_error(err: AnalysisError) -> Response {
    error!(error = %err, "navigator analysis failed");
    respond(
        StatusCode::INTERNAL_SERVER_ERROR,
        ServiceResponse::<()>::failure(err.to_string()),
    )
}
