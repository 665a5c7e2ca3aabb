use thiserror::Error;

pub type ReportResult<T, E = ReportError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("query-failed: {0}")]
    QueryFailed(#[from] kube::Error),

    #[error(
        "list-chunk-failed: {kind} (fieldSelector={field_selector:?}, limit={limit:?}, continue={continue_token:?}): {source}"
    )]
    ListChunkFailed {
        kind: &'static str,
        field_selector: Option<String>,
        limit: Option<u32>,
        continue_token: Option<String>,
        source: kube::Error,
    },

    #[error("invalid-quantity: {owner} {resource}={value:?}: {reason}")]
    InvalidQuantity {
        owner: String,
        resource: String,
        value: String,
        reason: String,
    },

    #[error("sum-overflow: {owner} {resource}")]
    SumOverflow { owner: String, resource: String },

    #[error("output-failed: {0}")]
    Output(#[from] std::io::Error),
}
