use crate::checked_amount::CheckedAmountOf;
use crate::numeric::WeiPerGas;

/// Largest block range a single fee history request may cover.
pub const MAX_BLOCK_COUNT: u64 = 1024;

pub const MIN_REWARD_PERCENTILE: f64 = 0.0;
pub const MAX_REWARD_PERCENTILE: f64 = 100.0;

// EIP-1559 parameters
pub const DEFAULT_INITIAL_BASE_FEE: WeiPerGas = WeiPerGas::new(1_000_000_000);
pub const DEFAULT_ELASTICITY_MULTIPLIER: CheckedAmountOf<()> = CheckedAmountOf::new(2);
pub const DEFAULT_BASE_FEE_MAX_CHANGE_DENOMINATOR: CheckedAmountOf<()> = CheckedAmountOf::new(8);

// JSON-RPC 2.0 error codes
pub const INVALID_PARAMS_ERROR_CODE: i64 = -32602;
pub const INTERNAL_ERROR_CODE: i64 = -32603;
