use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::categories::ExpenseCategory;
use super::query::{build_params, date_param, ids_param, opt_param};

/// One expense record.
///
/// List endpoints return the lightweight shape (`category_name`, no `user`),
/// detail endpoints nest the full `category` and add `user` and `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ExpenseCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Expense {
    pub fn category_label(&self) -> Option<&str> {
        self.category_name
            .as_deref()
            .or_else(|| self.category.as_ref().map(|category| category.name.as_str()))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilters {
    pub category: Vec<i64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub search: Option<String>,
}

impl ExpenseFilters {
    pub fn to_query(&self) -> Vec<(String, String)> {
        build_params([
            ids_param("category", &self.category),
            date_param("date_from", self.date_from),
            date_param("date_to", self.date_to),
            opt_param("search", self.search.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_shape_decodes() {
        let value = json!({
            "id": 7,
            "amount": "12.50",
            "description": "Lunch",
            "category_name": "Food",
            "date": "2024-03-01",
            "created_at": "2024-03-01T12:00:00Z"
        });
        let expense: Expense = serde_json::from_value(value).expect("expense");
        assert_eq!(expense.id, 7);
        assert_eq!(expense.amount, "12.50");
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 3, 1).expect("date"));
        assert_eq!(expense.category_label(), Some("Food"));
        assert!(expense.updated_at.is_none());
    }

    #[test]
    fn detail_shape_decodes_nested_category() {
        let value = json!({
            "id": 7,
            "amount": "12.50",
            "description": "Lunch",
            "category": {
                "id": 2,
                "name": "Food",
                "description": null,
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            },
            "date": "2024-03-01",
            "user": "alice",
            "created_at": "2024-03-01T12:00:00Z",
            "updated_at": "2024-03-02T08:00:00Z"
        });
        let expense: Expense = serde_json::from_value(value).expect("expense");
        assert_eq!(expense.category_label(), Some("Food"));
        assert_eq!(expense.user.as_deref(), Some("alice"));
    }

    #[test]
    fn input_omits_unset_fields() {
        let input = ExpenseInput {
            amount: Some("3.20".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 5, 6),
            ..ExpenseInput::default()
        };
        let body = serde_json::to_value(&input).expect("serialize");
        assert_eq!(body, json!({ "amount": "3.20", "date": "2024-05-06" }));
    }

    #[test]
    fn filters_encode_categories_comma_separated() {
        let filters = ExpenseFilters {
            category: vec![1, 4],
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1),
            date_to: None,
            search: Some("taxi".to_string()),
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("category".to_string(), "1,4".to_string()),
                ("date_from".to_string(), "2024-01-01".to_string()),
                ("search".to_string(), "taxi".to_string()),
            ]
        );
        assert!(ExpenseFilters::default().to_query().is_empty());
    }
}
