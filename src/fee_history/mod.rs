//! Fee history over a window of finalized blocks: base fees, gas usage and priority fee percentiles.

mod base_fee;
mod range;
mod rewards;

pub use base_fee::{base_fee_or_zero, gas_used_ratio, next_block_base_fee};
pub use range::BlockRange;
pub use rewards::{block_rewards, sorted_percentiles};

use crate::chain::BlockchainQueries;
use crate::constants::{MAX_BLOCK_COUNT, MAX_REWARD_PERCENTILE, MIN_REWARD_PERCENTILE};
use crate::error::{FeeHistoryResultOf, InternalError, InvalidRequestError};
use crate::fee_market::FeeMarketSchedule;
use crate::logs::{DEBUG, INFO};
use crate::numeric::{BlockNumber, WeiPerGas};
use crate::{add_metric, add_metric_entry};
use ic_canister_log::log;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
pub struct FeeHistoryRequest {
    /// Number of blocks in the requested range, between 1 and 1024.
    pub block_count: u64,
    /// Newest block of the range, already resolved from any block tag.
    pub highest_block: BlockNumber,
    /// Percentiles of priority fees to report for each block, in any order.
    pub reward_percentiles: Option<Vec<f64>>,
}

impl FeeHistoryRequest {
    pub fn validate(&self) -> Result<(), InvalidRequestError> {
        if !(1..=MAX_BLOCK_COUNT).contains(&self.block_count) {
            return Err(InvalidRequestError::BlockCountOutOfRange(self.block_count));
        }
        if let Some(percentile) = self
            .reward_percentiles
            .iter()
            .flatten()
            .find(|p| !(MIN_REWARD_PERCENTILE..=MAX_REWARD_PERCENTILE).contains(*p))
        {
            return Err(InvalidRequestError::InvalidRewardPercentile(*percentile));
        }
        Ok(())
    }
}

/// Fee history of a range of blocks.
///
/// `base_fee_per_gas` has one more entry than `gas_used_ratio`: the base fee of the block
/// following the range. When present, each entry of `reward` lists the priority fees of one
/// block at the requested percentiles sorted in ascending order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeeHistoryResult {
    #[serde(rename = "oldestBlock")]
    pub oldest_block: BlockNumber,
    #[serde(rename = "baseFeePerGas")]
    pub base_fee_per_gas: Vec<WeiPerGas>,
    #[serde(rename = "gasUsedRatio")]
    pub gas_used_ratio: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<Vec<Vec<WeiPerGas>>>,
}

/// Computes fee histories from finalized chain data.
///
/// The engine never mutates the chain and holds no state of its own, so identical requests
/// against an identical chain give identical results.
#[derive(Clone, Debug)]
pub struct FeeHistoryEngine<C, S> {
    chain: C,
    schedule: S,
}

impl<C: BlockchainQueries, S: FeeMarketSchedule> FeeHistoryEngine<C, S> {
    pub fn new(chain: C, schedule: S) -> Self {
        Self { chain, schedule }
    }

    pub fn chain(&self) -> &C {
        &self.chain
    }

    pub fn compute_fee_history(
        &self,
        request: &FeeHistoryRequest,
    ) -> FeeHistoryResultOf<FeeHistoryResult> {
        add_metric!(requests, 1);
        let result = self.try_compute_fee_history(request);
        match &result {
            Ok(fee_history) => {
                add_metric!(blocks_served, fee_history.gas_used_ratio.len() as u64);
            }
            Err(e) => {
                log!(INFO, "[compute_fee_history]: failed for {:?}: {}", request, e);
                add_metric_entry!(errors, e.into(), 1);
            }
        }
        result
    }

    fn try_compute_fee_history(
        &self,
        request: &FeeHistoryRequest,
    ) -> FeeHistoryResultOf<FeeHistoryResult> {
        request.validate()?;
        let chain_head = self.chain.chain_head_block_number();
        let range = BlockRange::resolve(request.block_count, request.highest_block, chain_head)?;
        let headers = range.headers(&self.chain);

        let mut base_fee_per_gas: Vec<WeiPerGas> = headers.iter().map(base_fee_or_zero).collect();
        let next_base_fee = match range.next_block() {
            Some(next_block) => {
                next_block_base_fee(&self.chain, &self.schedule, next_block, headers.last())
            }
            None => WeiPerGas::ZERO,
        };
        base_fee_per_gas.push(next_base_fee);
        let gas_used_ratio = headers.iter().map(gas_used_ratio).collect();

        let reward = request
            .reward_percentiles
            .as_deref()
            .map(|percentiles| self.rewards(&range, &sorted_percentiles(percentiles)))
            .transpose()?;

        log!(
            DEBUG,
            "[compute_fee_history]: blocks {}..={} with {} headers, next base fee {}",
            range.oldest(),
            range.newest(),
            headers.len(),
            next_base_fee
        );
        Ok(FeeHistoryResult {
            oldest_block: range.oldest(),
            base_fee_per_gas,
            gas_used_ratio,
            reward,
        })
    }

    // Blocks missing from the chain are skipped. The first failing block fails the whole range.
    fn rewards(
        &self,
        range: &BlockRange,
        sorted_percentiles: &[f64],
    ) -> Result<Vec<Vec<WeiPerGas>>, InternalError> {
        range
            .block_numbers()
            .filter_map(|number| self.chain.block_by_number(number))
            .map(|block| {
                block_rewards(&block, sorted_percentiles, |hash| {
                    self.chain
                        .transaction_receipt(hash)
                        .map(|receipt| receipt.gas_used)
                })
            })
            .collect()
    }
}
