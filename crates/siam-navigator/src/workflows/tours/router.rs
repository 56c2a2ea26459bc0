use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::booking::{booking_financials, BookingCosts};
use super::estimate::{estimate_cost, CostEstimateRequest};
use super::feedback::Feedback;
use super::financial::{
    agent_performance, monthly, summarize, BookingLedgerEntry, MonthlyFinancialData,
};
use super::guide::{Guide, TourType};
use super::package::TourPackage;
use super::quote::{generate_quote, Lead};
use super::TourError;
use crate::workflows::response::ServiceResponse;

/// Router builder for the stateless tour pricing and rollup endpoints.
pub fn tours_router() -> Router {
    Router::new()
        .route("/api/v1/tours/estimate", post(estimate_handler))
        .route("/api/v1/tours/bookings/financials", post(booking_handler))
        .route("/api/v1/tours/leads/quote", post(quote_handler))
        .route("/api/v1/tours/financials/summary", post(summary_handler))
        .route("/api/v1/tours/financials/monthly", post(monthly_handler))
        .route("/api/v1/tours/financials/agents", post(agents_handler))
        .route("/api/v1/tours/guides/rate", post(guide_rate_handler))
        .route("/api/v1/tours/feedback", post(feedback_handler))
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EstimatePayload {
    pub package: TourPackage,
    pub request: CostEstimateRequest,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookingPayload {
    pub actual_revenue: f64,
    #[serde(default)]
    pub costs: BookingCosts,
    #[serde(default)]
    pub commission_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuotePayload {
    pub lead: Lead,
    pub package: TourPackage,
    /// Defaults to today (UTC).
    #[serde(default)]
    pub generated_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LedgerPayload {
    #[serde(default)]
    pub bookings: Vec<BookingLedgerEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MonthlyPayload {
    #[serde(default)]
    pub bookings: Vec<BookingLedgerEntry>,
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GuideRatePayload {
    pub guide: Guide,
    pub tour_type: TourType,
    pub duration: u32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideRate {
    pub guide_id: String,
    pub available: bool,
    pub daily_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeedbackPayload {
    pub feedback: Feedback,
    /// Defaults to today (UTC).
    #[serde(default)]
    pub submitted_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReview {
    pub feedback: Feedback,
    pub average_category_rating: f64,
}

pub(crate) async fn estimate_handler(axum::Json(payload): axum::Json<EstimatePayload>) -> Response {
    let request = &payload.request;
    if let Err(err) = payload
        .package
        .check_party(request.number_of_adults, request.number_of_children)
    {
        return bad_request(err);
    }

    let estimate = estimate_cost(&payload.package, &payload.request);
    debug!(
        package = %estimate.package_code,
        people = estimate.total_people,
        season = estimate.season.label(),
        "tour estimate computed"
    );
    respond(StatusCode::OK, ServiceResponse::ok(estimate))
}

pub(crate) async fn booking_handler(axum::Json(payload): axum::Json<BookingPayload>) -> Response {
    let financials = booking_financials(payload.actual_revenue, &payload.costs, payload.commission_rate);
    respond(StatusCode::OK, ServiceResponse::ok(financials))
}

pub(crate) async fn quote_handler(axum::Json(payload): axum::Json<QuotePayload>) -> Response {
    let lead = &payload.lead;
    if let Err(err) = payload
        .package
        .check_party(lead.number_of_adults, lead.number_of_children)
    {
        return bad_request(err);
    }

    let generated_on = payload
        .generated_on
        .unwrap_or_else(|| Utc::now().date_naive());
    let quote = generate_quote(&payload.lead, &payload.package, generated_on);
    respond(StatusCode::OK, ServiceResponse::ok(quote))
}

pub(crate) async fn summary_handler(axum::Json(payload): axum::Json<LedgerPayload>) -> Response {
    respond(StatusCode::OK, ServiceResponse::ok(summarize(&payload.bookings)))
}

pub(crate) async fn monthly_handler(axum::Json(payload): axum::Json<MonthlyPayload>) -> Response {
    let result = monthly(&payload.bookings, payload.year, payload.month);
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(err) => {
            warn!(error = %err, "rejected tour request");
            StatusCode::BAD_REQUEST
        }
    };
    respond(status, ServiceResponse::<MonthlyFinancialData>::from(result))
}

pub(crate) async fn agents_handler(axum::Json(payload): axum::Json<LedgerPayload>) -> Response {
    respond(
        StatusCode::OK,
        ServiceResponse::ok(agent_performance(&payload.bookings)),
    )
}

pub(crate) async fn guide_rate_handler(
    axum::Json(payload): axum::Json<GuideRatePayload>,
) -> Response {
    let guide = &payload.guide;
    let rate = GuideRate {
        guide_id: guide.guide_id.clone(),
        available: guide.is_available_on(payload.date),
        daily_rate: guide.daily_rate(payload.tour_type, payload.duration),
    };
    respond(StatusCode::OK, ServiceResponse::ok(rate))
}

pub(crate) async fn feedback_handler(axum::Json(payload): axum::Json<FeedbackPayload>) -> Response {
    if let Err(err) = payload.feedback.validate() {
        return bad_request(err);
    }

    let submitted_on = payload
        .submitted_on
        .unwrap_or_else(|| Utc::now().date_naive());
    let feedback = payload.feedback.submit(submitted_on);
    debug!(
        booking = %feedback.booking_id,
        status = ?feedback.status,
        "feedback received"
    );
    let review = FeedbackReview {
        average_category_rating: feedback.average_category_rating(),
        feedback,
    };
    respond(StatusCode::OK, ServiceResponse::ok(review))
}

fn respond<T: Serialize>(status: StatusCode, body: ServiceResponse<T>) -> Response {
    (status, axum::Json(body)).into_response()
}

fn bad_request(err: TourError) -> Response {
    warn!(error = %err, "rejected tour request");
    respond(
        StatusCode::BAD_REQUEST,
        ServiceResponse::<()>::failure(err.to_string()),
    )
}
