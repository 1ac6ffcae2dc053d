//! Conversion between the public candid types and the engine types.

use crate::chain::BlockchainQueries;
use crate::fee_history::{FeeHistoryRequest, FeeHistoryResult};
use crate::numeric::BlockNumber;
use fee_history_types::{BlockTag, FeeHistoryArgs, Nat256};

/// Block number selected by `tag`, given the current chain head.
///
/// Only finalized blocks are served, so every symbolic tag but `Earliest` is the chain head.
pub(super) fn resolve_block_tag<C: BlockchainQueries>(chain: &C, tag: BlockTag) -> BlockNumber {
    match tag {
        BlockTag::Number(n) => BlockNumber::from(n),
        BlockTag::Earliest => BlockNumber::ZERO,
        BlockTag::Latest | BlockTag::Pending | BlockTag::Safe | BlockTag::Finalized => {
            chain.chain_head_block_number()
        }
    }
}

pub(super) fn into_fee_history_request<C: BlockchainQueries>(
    chain: &C,
    args: FeeHistoryArgs,
) -> FeeHistoryRequest {
    FeeHistoryRequest {
        block_count: args.block_count,
        highest_block: resolve_block_tag(chain, args.newest_block),
        reward_percentiles: args.reward_percentiles,
    }
}

pub(super) fn from_fee_history(value: FeeHistoryResult) -> fee_history_types::FeeHistory {
    fee_history_types::FeeHistory {
        oldest_block: Nat256::from(value.oldest_block),
        base_fee_per_gas: value
            .base_fee_per_gas
            .into_iter()
            .map(Nat256::from)
            .collect(),
        gas_used_ratio: value.gas_used_ratio,
        reward: value.reward.map(|reward| {
            reward
                .into_iter()
                .map(|x| x.into_iter().map(Nat256::from).collect())
                .collect()
        }),
    }
}
