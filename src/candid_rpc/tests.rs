use crate::candid_rpc::conversion::resolve_block_tag;
use crate::candid_rpc::eth_fee_history;
use crate::chain::{BlockHeaderView, BlockView, InMemoryChain};
use crate::error::{FeeHistoryError, InvalidRequestError};
use crate::fee_history::FeeHistoryEngine;
use crate::fee_market::{ForkSchedule, LondonFeeMarket};
use crate::numeric::{BlockNumber, GasAmount, WeiPerGas};
use assert_matches::assert_matches;
use fee_history_types::{BlockTag, FeeHistory, FeeHistoryArgs, Hash, Nat256};

const CHAIN_HEAD: u64 = 20;

fn chain() -> InMemoryChain {
    let mut chain = InMemoryChain::new(BlockNumber::from(CHAIN_HEAD));
    for number in 0..=CHAIN_HEAD {
        chain.insert_block(BlockView {
            header: BlockHeaderView {
                number: BlockNumber::from(number),
                base_fee_per_gas: Some(WeiPerGas::from(1_000 + number)),
                gas_used: GasAmount::from(15_000_000_u64),
                gas_limit: GasAmount::from(30_000_000_u64),
                hash: Hash::new([number as u8; 32]),
            },
            transactions: vec![],
        });
    }
    chain
}

fn engine() -> FeeHistoryEngine<InMemoryChain, ForkSchedule> {
    FeeHistoryEngine::new(
        chain(),
        ForkSchedule::with_london(LondonFeeMarket::new(BlockNumber::ZERO)),
    )
}

#[test]
fn should_resolve_block_tags() {
    let chain = chain();
    let head = BlockNumber::from(CHAIN_HEAD);

    assert_eq!(resolve_block_tag(&chain, BlockTag::Latest), head);
    assert_eq!(resolve_block_tag(&chain, BlockTag::Pending), head);
    assert_eq!(resolve_block_tag(&chain, BlockTag::Safe), head);
    assert_eq!(resolve_block_tag(&chain, BlockTag::Finalized), head);
    assert_eq!(resolve_block_tag(&chain, BlockTag::Earliest), BlockNumber::ZERO);
    assert_eq!(
        resolve_block_tag(&chain, BlockTag::from(7)),
        BlockNumber::from(7_u8)
    );
}

#[test]
fn should_convert_fee_history() {
    let fee_history = eth_fee_history(
        &engine(),
        FeeHistoryArgs {
            block_count: 3,
            newest_block: BlockTag::Latest,
            reward_percentiles: Some(vec![50.0, 10.0]),
        },
    )
    .unwrap();

    assert_eq!(
        fee_history,
        FeeHistory {
            oldest_block: Nat256::from(18_u8),
            base_fee_per_gas: vec![
                Nat256::from(1_018_u32),
                Nat256::from(1_019_u32),
                Nat256::from(1_020_u32),
                // on target, the base fee stays the same
                Nat256::from(1_020_u32),
            ],
            gas_used_ratio: vec![0.5, 0.5, 0.5],
            reward: Some(vec![vec![Nat256::from(0_u8), Nat256::from(0_u8)]; 3]),
        }
    );
}

#[test]
fn should_omit_rewards_when_no_percentiles_requested() {
    let fee_history = eth_fee_history(
        &engine(),
        FeeHistoryArgs {
            block_count: 1,
            newest_block: BlockTag::Earliest,
            reward_percentiles: None,
        },
    )
    .unwrap();

    assert_eq!(fee_history.oldest_block, Nat256::from(0_u8));
    assert_eq!(fee_history.gas_used_ratio, vec![0.5]);
    assert_eq!(fee_history.reward, None);
}

#[test]
fn should_reject_invalid_arguments() {
    let engine = engine();
    let call = |block_count: u64, newest_block: BlockTag, reward_percentiles| {
        eth_fee_history(
            &engine,
            FeeHistoryArgs {
                block_count,
                newest_block,
                reward_percentiles,
            },
        )
    };

    assert_matches!(
        call(0, BlockTag::Latest, None),
        Err(FeeHistoryError::InvalidRequest(
            InvalidRequestError::BlockCountOutOfRange(0)
        ))
    );
    assert_matches!(
        call(1_025, BlockTag::Latest, None),
        Err(FeeHistoryError::InvalidRequest(
            InvalidRequestError::BlockCountOutOfRange(1_025)
        ))
    );
    assert_matches!(
        call(1, BlockTag::from(CHAIN_HEAD + 1), None),
        Err(FeeHistoryError::InvalidRequest(
            InvalidRequestError::BlockAfterChainHead { .. }
        ))
    );
    assert_matches!(
        call(1, BlockTag::Latest, Some(vec![10.0, f64::NAN])),
        Err(FeeHistoryError::InvalidRequest(
            InvalidRequestError::InvalidRewardPercentile(p)
        )) if p.is_nan()
    );
    assert_matches!(
        call(1, BlockTag::Latest, Some(vec![-0.5])),
        Err(e) if e.code() == -32602
    );
}
