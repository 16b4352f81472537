pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Secure-storage key holding the current access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Secure-storage key holding the current refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

pub mod paths {
    pub const LOGIN: &str = "/auth/login/";
    pub const REFRESH: &str = "/auth/refresh/";
    pub const EXPENSES: &str = "/expenses/";
    pub const CATEGORIES: &str = "/categories/";
    pub const REPORT_SUMMARY: &str = "/reports/summary/";

    pub fn expense(id: i64) -> String {
        format!("/expenses/{id}/")
    }

    pub fn category(id: i64) -> String {
        format!("/categories/{id}/")
    }
}
