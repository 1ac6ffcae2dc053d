use crate::BlockTag;
use candid::CandidType;
use serde::Deserialize;

/// Arguments of an `eth_feeHistory` call.
#[derive(Clone, Debug, PartialEq, CandidType, Deserialize)]
pub struct FeeHistoryArgs {
    /// Number of blocks in the requested range.
    /// Must be between 1 and 1024.
    pub block_count: u64,

    /// Highest block of the requested range.
    /// `Latest`, `Pending`, `Safe` and `Finalized` all select the chain head, `Earliest` selects genesis.
    pub newest_block: BlockTag,

    /// A list of percentile values between 0 and 100, in any order.
    /// For each block in the requested range, the transactions will be sorted in ascending order
    /// by effective tip per gas and the corresponding effective tip for the percentile
    /// will be determined, accounting for gas consumed.
    pub reward_percentiles: Option<Vec<f64>>,
}
