use spendwise_core::{paths, ReportFilters, ReportSummary};

use crate::error::ClientError;
use crate::http::RequestContext;
use crate::ApiClient;

impl ApiClient {
    pub async fn report_summary(
        &self,
        filters: &ReportFilters,
    ) -> Result<ReportSummary, ClientError> {
        let ctx = RequestContext::get(paths::REPORT_SUMMARY).with_query(filters.to_query());
        self.request_json(ctx).await
    }
}
