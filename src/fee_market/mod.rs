//! Base fee adjustment (EIP-1559) and the schedule telling which blocks it applies to.


use crate::chain::BlockHeaderView;
use crate::checked_amount::CheckedAmountOf;
use crate::constants::{
    DEFAULT_BASE_FEE_MAX_CHANGE_DENOMINATOR, DEFAULT_ELASTICITY_MULTIPLIER,
    DEFAULT_INITIAL_BASE_FEE,
};
use crate::numeric::{BlockNumber, GasAmount, WeiPerGas};
use fee_history_types::FeeMarketArgs;
use std::cmp::Ordering;

/// Fee-adjustment capability of the protocol version in effect at some block.
pub trait FeeMarket {
    /// Base fee of `block_number`, derived from its parent.
    fn compute_base_fee(
        &self,
        block_number: BlockNumber,
        parent_base_fee: WeiPerGas,
        parent_gas_used: GasAmount,
        target_gas_used: GasAmount,
    ) -> WeiPerGas;

    /// Gas the next block should consume for its base fee to stay unchanged.
    fn target_gas_used(&self, parent: &BlockHeaderView) -> GasAmount;
}

/// Maps block numbers to the fee market in effect, if any.
pub trait FeeMarketSchedule {
    fn fee_market_at(&self, block_number: BlockNumber) -> Option<&dyn FeeMarket>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LondonFeeMarket {
    activation_block: BlockNumber,
    initial_base_fee: WeiPerGas,
    elasticity_multiplier: CheckedAmountOf<()>,
    base_fee_max_change_denominator: CheckedAmountOf<()>,
}

impl LondonFeeMarket {
    pub fn new(activation_block: BlockNumber) -> Self {
        Self {
            activation_block,
            initial_base_fee: DEFAULT_INITIAL_BASE_FEE,
            elasticity_multiplier: DEFAULT_ELASTICITY_MULTIPLIER,
            base_fee_max_change_denominator: DEFAULT_BASE_FEE_MAX_CHANGE_DENOMINATOR,
        }
    }

    pub fn activation_block(&self) -> BlockNumber {
        self.activation_block
    }

    fn increased_base_fee(
        &self,
        parent_base_fee: WeiPerGas,
        gas_delta: GasAmount,
        target_gas_used: GasAmount,
    ) -> WeiPerGas {
        let fee_delta = self
            .base_fee_delta(parent_base_fee, gas_delta, target_gas_used)
            .max(WeiPerGas::ONE);
        parent_base_fee
            .checked_add(fee_delta)
            .unwrap_or(WeiPerGas::MAX)
    }

    fn decreased_base_fee(
        &self,
        parent_base_fee: WeiPerGas,
        gas_delta: GasAmount,
        target_gas_used: GasAmount,
    ) -> WeiPerGas {
        let fee_delta = self.base_fee_delta(parent_base_fee, gas_delta, target_gas_used);
        parent_base_fee.saturating_sub(fee_delta)
    }

    // parent_base_fee * gas_delta / target_gas_used / denominator, truncating at each division
    fn base_fee_delta(
        &self,
        parent_base_fee: WeiPerGas,
        gas_delta: GasAmount,
        target_gas_used: GasAmount,
    ) -> WeiPerGas {
        parent_base_fee
            .checked_mul(gas_delta)
            .and_then(|fee| fee.checked_div_floor(target_gas_used))
            .and_then(|fee| fee.checked_div_floor(self.base_fee_max_change_denominator))
            .unwrap_or(WeiPerGas::MAX)
    }
}

impl FeeMarket for LondonFeeMarket {
    fn compute_base_fee(
        &self,
        block_number: BlockNumber,
        parent_base_fee: WeiPerGas,
        parent_gas_used: GasAmount,
        target_gas_used: GasAmount,
    ) -> WeiPerGas {
        if block_number == self.activation_block {
            return self.initial_base_fee;
        }
        if target_gas_used == GasAmount::ZERO {
            return parent_base_fee;
        }
        match parent_gas_used.cmp(&target_gas_used) {
            Ordering::Equal => parent_base_fee,
            Ordering::Greater => self.increased_base_fee(
                parent_base_fee,
                parent_gas_used.saturating_sub(target_gas_used),
                target_gas_used,
            ),
            Ordering::Less => self.decreased_base_fee(
                parent_base_fee,
                target_gas_used.saturating_sub(parent_gas_used),
                target_gas_used,
            ),
        }
    }

    fn target_gas_used(&self, parent: &BlockHeaderView) -> GasAmount {
        parent
            .gas_limit
            .checked_div_floor(self.elasticity_multiplier)
            .unwrap_or(GasAmount::ZERO)
    }
}

impl From<FeeMarketArgs> for LondonFeeMarket {
    fn from(args: FeeMarketArgs) -> Self {
        let defaults = LondonFeeMarket::new(BlockNumber::from(args.activation_block));
        Self {
            initial_base_fee: args
                .initial_base_fee
                .map(WeiPerGas::from)
                .unwrap_or(defaults.initial_base_fee),
            elasticity_multiplier: args
                .elasticity_multiplier
                .filter(|multiplier| *multiplier > 0)
                .map(CheckedAmountOf::from)
                .unwrap_or(defaults.elasticity_multiplier),
            base_fee_max_change_denominator: args
                .base_fee_max_change_denominator
                .filter(|denominator| *denominator > 0)
                .map(CheckedAmountOf::from)
                .unwrap_or(defaults.base_fee_max_change_denominator),
            ..defaults
        }
    }
}

/// Fee market schedule with a single activation block: no fee market before it,
/// London rules from it onwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForkSchedule {
    london: Option<LondonFeeMarket>,
}

impl ForkSchedule {
    /// A chain that never activates the fee market.
    pub fn without_fee_market() -> Self {
        Self { london: None }
    }

    pub fn with_london(fee_market: LondonFeeMarket) -> Self {
        Self {
            london: Some(fee_market),
        }
    }
}

impl From<Option<FeeMarketArgs>> for ForkSchedule {
    fn from(args: Option<FeeMarketArgs>) -> Self {
        match args {
            Some(args) => Self::with_london(LondonFeeMarket::from(args)),
            None => Self::without_fee_market(),
        }
    }
}

impl FeeMarketSchedule for ForkSchedule {
    fn fee_market_at(&self, block_number: BlockNumber) -> Option<&dyn FeeMarket> {
        self.london
            .as_ref()
            .filter(|london| block_number >= london.activation_block())
            .map(|london| london as &dyn FeeMarket)
    }
}
