use serde::Deserialize;

/// List endpoints answer with either a bare array or a paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Paginated {
        #[serde(default = "Option::default")]
        results: Option<Vec<T>>,
    },
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) => items,
            Self::Paginated { results } => results.unwrap_or_default(),
        }
    }
}
