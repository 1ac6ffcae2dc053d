//! Entry point for `eth_feeHistory` calls expressed with the public candid types.

mod conversion;
#[cfg(test)]
mod tests;

use crate::chain::BlockchainQueries;
use crate::error::FeeHistoryResultOf;
use crate::fee_history::FeeHistoryEngine;
use crate::fee_market::FeeMarketSchedule;
use conversion::{from_fee_history, into_fee_history_request};
use fee_history_types::{FeeHistory, FeeHistoryArgs};

pub fn eth_fee_history<C, S>(
    engine: &FeeHistoryEngine<C, S>,
    args: FeeHistoryArgs,
) -> FeeHistoryResultOf<FeeHistory>
where
    C: BlockchainQueries,
    S: FeeMarketSchedule,
{
    let request = into_fee_history_request(engine.chain(), args);
    engine
        .compute_fee_history(&request)
        .map(from_fee_history)
}
