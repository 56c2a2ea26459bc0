use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::navigator::{
    navigator_router, NavigatorService, PurposeOfStay, StayDuration, UserProfile,
};

pub(super) fn short_term_visitor(nationality: &str) -> UserProfile {
    let mut profile = UserProfile::new(nationality);
    profile.intended_stay_duration = Some(StayDuration::ShortTerm);
    profile
}

pub(super) fn retiree(age: u32, monthly_income: f64) -> UserProfile {
    let mut profile = UserProfile::new("usa");
    profile.purpose_of_stay.insert(PurposeOfStay::Retirement);
    profile.age = Some(age);
    profile.monthly_income = Some(monthly_income);
    profile
}

pub(super) fn remote_worker(monthly_income: f64) -> UserProfile {
    let mut profile = UserProfile::new("germany");
    profile.purpose_of_stay.insert(PurposeOfStay::DigitalNomad);
    profile.has_foreign_income = true;
    profile.monthly_income = Some(monthly_income);
    profile
}

pub(super) fn service() -> Arc<NavigatorService> {
    Arc::new(NavigatorService::standard())
}

pub(super) fn router() -> axum::Router {
    navigator_router(service())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}
