use crate::constants::{INTERNAL_ERROR_CODE, INVALID_PARAMS_ERROR_CODE};
use crate::numeric::BlockNumber;
use fee_history_types::Hash;
use strum::IntoStaticStr;
use thiserror::Error;

pub type FeeHistoryResultOf<T> = Result<T, FeeHistoryError>;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum FeeHistoryError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] InvalidRequestError),
    #[error("internal error: {0}")]
    InternalInconsistency(#[from] InternalError),
}

impl FeeHistoryError {
    /// JSON-RPC error code reported to the caller.
    pub fn code(&self) -> i64 {
        match self {
            FeeHistoryError::InvalidRequest(_) => INVALID_PARAMS_ERROR_CODE,
            FeeHistoryError::InternalInconsistency(_) => INTERNAL_ERROR_CODE,
        }
    }

    /// Short snake_case name of the underlying error, used as a metric label.
    pub fn kind(&self) -> &'static str {
        match self {
            FeeHistoryError::InvalidRequest(e) => e.into(),
            FeeHistoryError::InternalInconsistency(e) => e.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum InvalidRequestError {
    #[error("block count must be between 1 and 1024, got {0}")]
    BlockCountOutOfRange(u64),
    #[error("requested block {requested} is after chain head {chain_head}")]
    BlockAfterChainHead {
        requested: BlockNumber,
        chain_head: BlockNumber,
    },
    #[error("reward percentile must be between 0 and 100, got {0}")]
    InvalidRewardPercentile(f64),
}

#[derive(Clone, Debug, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum InternalError {
    #[error("no receipt for transaction {transaction} of finalized block {block}")]
    MissingReceipt { block: BlockNumber, transaction: Hash },
}
