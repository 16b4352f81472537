use spendwise_core::{paths, CategoryInput, ExpenseCategory};

use crate::error::ClientError;
use crate::http::RequestContext;
use crate::ApiClient;

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<ExpenseCategory>, ClientError> {
        self.request_list(RequestContext::get(paths::CATEGORIES)).await
    }

    pub async fn get_category(&self, id: i64) -> Result<ExpenseCategory, ClientError> {
        self.request_json(RequestContext::get(paths::category(id))).await
    }

    pub async fn create_category(
        &self,
        input: &CategoryInput,
    ) -> Result<ExpenseCategory, ClientError> {
        let ctx = RequestContext::post(paths::CATEGORIES).with_json(input)?;
        self.request_json(ctx).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        input: &CategoryInput,
    ) -> Result<ExpenseCategory, ClientError> {
        let ctx = RequestContext::put(paths::category(id)).with_json(input)?;
        self.request_json(ctx).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ClientError> {
        self.request(RequestContext::delete(paths::category(id))).await?;
        Ok(())
    }
}
