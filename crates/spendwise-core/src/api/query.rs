use chrono::NaiveDate;

pub(crate) fn build_params<const N: usize>(
    pairs: [Option<(String, String)>; N],
) -> Vec<(String, String)> {
    pairs.into_iter().flatten().collect()
}

pub(crate) fn opt_param(key: &str, value: Option<String>) -> Option<(String, String)> {
    value.map(|value| (key.to_string(), value))
}

pub(crate) fn date_param(key: &str, value: Option<NaiveDate>) -> Option<(String, String)> {
    opt_param(key, value.map(|date| date.format("%Y-%m-%d").to_string()))
}

/// Comma-joined id list, the form the backend accepts for multi-category filters.
pub(crate) fn ids_param(key: &str, ids: &[i64]) -> Option<(String, String)> {
    if ids.is_empty() {
        return None;
    }
    let joined = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    Some((key.to_string(), joined))
}
