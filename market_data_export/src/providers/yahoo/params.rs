use crate::models::request_params::HistoryRequest;

/// Builds the query string for a chart request.
///
/// `period` and `interval` go out untouched; Yahoo is the one that decides
/// whether a combination is acceptable.
pub fn construct_params(request: &HistoryRequest) -> Vec<(String, String)> {
    vec![
        ("range".to_string(), request.period.clone()),
        ("interval".to_string(), request.interval.clone()),
        ("includeAdjustedClose".to_string(), "true".to_string()),
        ("events".to_string(), "div,splits".to_string()),
    ]
}
