use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use siam_navigator::error::AppError;
use siam_navigator::workflows::navigator::{LegalDomain, UnknownLegalDomain};
use siam_navigator::workflows::tours::{HotelLevel, TourError};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_domain(raw: &str) -> Result<LegalDomain, String> {
    raw.parse().map_err(|err: UnknownLegalDomain| err.to_string())
}

pub(crate) fn parse_hotel_level(raw: &str) -> Result<HotelLevel, String> {
    raw.parse().map_err(|err: TourError| err.to_string())
}

/// Reads a JSON document from disk into `T`.
pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use siam_navigator::workflows::navigator::UserProfile;
    use std::io::Write;

    #[test]
    fn dates_must_be_iso_formatted() {
        assert_eq!(
            parse_date(" 2025-02-28 "),
            Ok(NaiveDate::from_ymd_opt(2025, 2, 28).expect("valid date"))
        );
        let err = parse_date("28/02/2025").expect_err("not ISO");
        assert!(err.contains("YYYY-MM-DD"));
    }

    #[test]
    fn json_files_surface_payload_errors() {
        let path = std::env::temp_dir().join(format!("siam-api-{}-profile.json", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("create profile");
        file.write_all(br#"{"nationality": "USA", "intendedStayDuration": "forever"}"#)
            .expect("write profile");

        let result = read_json_file::<UserProfile>(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AppError::Payload(_))));

        let missing = read_json_file::<UserProfile>(Path::new("/nonexistent/profile.json"));
        assert!(matches!(missing, Err(AppError::Io(_))));
    }
}
