use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::query::{build_params, date_param, ids_param, opt_param};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilters {
    pub category: Vec<i64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub description: Option<String>,
}

impl ReportFilters {
    pub fn to_query(&self) -> Vec<(String, String)> {
        build_params([
            ids_param("category", &self.category),
            date_param("date_from", self.date_from),
            date_param("date_to", self.date_to),
            opt_param("description", self.description.clone()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    #[serde(rename = "category__name")]
    pub category_name: String,
    #[serde(rename = "category__id")]
    pub category_id: i64,
    #[serde(deserialize_with = "number_or_string")]
    pub total: f64,
    #[serde(deserialize_with = "count_or_string")]
    pub count: u64,
}

/// Filters echoed back by the server, as it understood them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilters {
    #[serde(default, deserialize_with = "opt_text_or_number")]
    pub category: Option<String>,
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(deserialize_with = "number_or_string")]
    pub total_amount: f64,
    #[serde(deserialize_with = "count_or_string")]
    pub total_count: u64,
    #[serde(default)]
    pub category_totals: Vec<CategoryTotal>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub average_daily: Option<f64>,
    #[serde(default)]
    pub filters: AppliedFilters,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid number: {text}"))),
        }
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_f64()
}

fn opt_number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(NumberOrString::into_f64)
        .transpose()
}

fn count_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = number_or_string(deserializer)?;
    if value < 0.0 || value.fract() != 0.0 {
        return Err(serde::de::Error::custom(format!("invalid count: {value}")));
    }
    Ok(value as u64)
}

fn opt_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}
