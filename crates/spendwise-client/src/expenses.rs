use spendwise_core::{paths, Expense, ExpenseFilters, ExpenseInput};

use crate::error::ClientError;
use crate::http::RequestContext;
use crate::ApiClient;

impl ApiClient {
    pub async fn list_expenses(
        &self,
        filters: &ExpenseFilters,
    ) -> Result<Vec<Expense>, ClientError> {
        let ctx = RequestContext::get(paths::EXPENSES).with_query(filters.to_query());
        self.request_list(ctx).await
    }

    pub async fn get_expense(&self, id: i64) -> Result<Expense, ClientError> {
        self.request_json(RequestContext::get(paths::expense(id))).await
    }

    pub async fn create_expense(&self, input: &ExpenseInput) -> Result<Expense, ClientError> {
        let ctx = RequestContext::post(paths::EXPENSES).with_json(input)?;
        self.request_json(ctx).await
    }

    pub async fn update_expense(
        &self,
        id: i64,
        input: &ExpenseInput,
    ) -> Result<Expense, ClientError> {
        let ctx = RequestContext::put(paths::expense(id)).with_json(input)?;
        self.request_json(ctx).await
    }

    pub async fn delete_expense(&self, id: i64) -> Result<(), ClientError> {
        self.request(RequestContext::delete(paths::expense(id))).await?;
        Ok(())
    }
}
