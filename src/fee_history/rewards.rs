use crate::chain::{BlockView, TransactionView};
use crate::error::InternalError;
use crate::numeric::{GasAmount, WeiPerGas};
use fee_history_types::Hash;

/// Percentiles in ascending order, duplicates kept.
pub fn sorted_percentiles(percentiles: &[f64]) -> Vec<f64> {
    let mut sorted = percentiles.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Effective priority fees of `block` at the given ascending `percentiles`, weighted by gas used.
///
/// Transactions are ranked by effective priority fee, ties keeping block order. Walking that
/// ranking, each percentile is assigned the fee of the first transaction at which the cumulative
/// gas used reaches that share of the block gas used. A percentile never reached gets no entry.
pub fn block_rewards<F>(
    block: &BlockView,
    percentiles: &[f64],
    mut receipt_gas_used: F,
) -> Result<Vec<WeiPerGas>, InternalError>
where
    F: FnMut(&Hash) -> Option<GasAmount>,
{
    if block.transactions.is_empty() {
        return Ok(vec![WeiPerGas::ZERO; percentiles.len()]);
    }

    let base_fee = block.header.base_fee_per_gas;
    let mut ranked: Vec<(WeiPerGas, &TransactionView)> = block
        .transactions
        .iter()
        .map(|transaction| {
            (
                transaction.effective_priority_fee_per_gas(base_fee),
                transaction,
            )
        })
        .collect();
    // stable: equal fees stay in block order
    ranked.sort_by_key(|(fee, _)| *fee);

    let block_gas_used = block.header.gas_used.as_f64();
    let mut rewards = Vec::with_capacity(percentiles.len());
    let mut percentile_index = 0;
    let mut gas_used = GasAmount::ZERO;
    for (fee, transaction) in ranked {
        let transaction_gas_used =
            receipt_gas_used(&transaction.hash).ok_or_else(|| InternalError::MissingReceipt {
                block: block.header.number,
                transaction: transaction.hash.clone(),
            })?;
        gas_used = gas_used
            .checked_add(transaction_gas_used)
            .unwrap_or(GasAmount::MAX);

        while percentile_index < percentiles.len()
            && 100.0 * gas_used.as_f64() / block_gas_used >= percentiles[percentile_index]
        {
            rewards.push(fee);
            percentile_index += 1;
        }
    }
    Ok(rewards)
}
