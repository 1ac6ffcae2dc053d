//! Numeric types for Ethereum.


use crate::checked_amount::CheckedAmountOf;

pub enum WeiPerGasUnit {}
/// Price of one unit of gas: base fees, priority fees and gas prices.
pub type WeiPerGas = CheckedAmountOf<WeiPerGasUnit>;

pub enum BlockNumberTag {}
pub type BlockNumber = CheckedAmountOf<BlockNumberTag>;

pub enum GasUnit {}
/// A number of gas units, e.g. consumed by a transaction or allowed in a block.
pub type GasAmount = CheckedAmountOf<GasUnit>;
