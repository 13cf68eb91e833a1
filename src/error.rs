use thiserror::Error;

/// Errors raised by the in-memory dataset.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DatasetError {
    #[error("no dataset is loaded")]
    EmptyDataset,

    #[error("no data for {group} / {sub}")]
    NoMatchingItems { group: String, sub: String },

    #[error("unknown label: {0}")]
    UnknownLabel(String),

    #[error("header is {len} characters long, the limit is 30")]
    HeaderTooLong { len: usize },
}
