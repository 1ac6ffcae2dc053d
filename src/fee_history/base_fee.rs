use crate::chain::{BlockHeaderView, BlockchainQueries};
use crate::fee_market::FeeMarketSchedule;
use crate::numeric::{BlockNumber, GasAmount, WeiPerGas};

/// Base fee stored in the header. Blocks before the fee market count as zero.
pub fn base_fee_or_zero(header: &BlockHeaderView) -> WeiPerGas {
    header.base_fee_per_gas.unwrap_or(WeiPerGas::ZERO)
}

/// Fraction of the block gas limit that was consumed.
pub fn gas_used_ratio(header: &BlockHeaderView) -> f64 {
    if header.gas_limit == GasAmount::ZERO {
        return 0.0;
    }
    header.gas_used.as_f64() / header.gas_limit.as_f64()
}

/// Base fee of the block following the requested range.
///
/// The stored value wins when that block already exists. Otherwise the fee is projected from
/// `last_header` with the fee market in effect at `next_block`, or zero without a fee market.
pub fn next_block_base_fee<C, S>(
    chain: &C,
    schedule: &S,
    next_block: BlockNumber,
    last_header: Option<&BlockHeaderView>,
) -> WeiPerGas
where
    C: BlockchainQueries,
    S: FeeMarketSchedule,
{
    if let Some(header) = chain.block_header(next_block) {
        return base_fee_or_zero(&header);
    }
    match (schedule.fee_market_at(next_block), last_header) {
        (Some(fee_market), Some(parent)) => fee_market.compute_base_fee(
            next_block,
            base_fee_or_zero(parent),
            parent.gas_used,
            fee_market.target_gas_used(parent),
        ),
        _ => WeiPerGas::ZERO,
    }
}
