use candid::CandidType;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, CandidType, Deserialize)]
pub struct InstallArgs {
    #[serde(rename = "logFilter")]
    pub log_filter: Option<LogFilter>,
    /// Fee market parameters. `None` disables next-block base fee projection.
    #[serde(rename = "feeMarket")]
    pub fee_market: Option<FeeMarketArgs>,
}

/// Parameters of an EIP-1559 fee market.
#[derive(Clone, Debug, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct FeeMarketArgs {
    /// First block governed by the fee market.
    #[serde(rename = "activationBlock")]
    pub activation_block: u64,
    /// Base fee of the activation block, in wei. Defaults to 1 Gwei.
    #[serde(rename = "initialBaseFee")]
    pub initial_base_fee: Option<u64>,
    /// Defaults to 2.
    #[serde(rename = "elasticityMultiplier")]
    pub elasticity_multiplier: Option<u64>,
    /// Defaults to 8.
    #[serde(rename = "baseFeeMaxChangeDenominator")]
    pub base_fee_max_change_denominator: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub enum LogFilter {
    ShowAll,
    HideAll,
    ShowPattern(RegexString),
    HidePattern(RegexString),
}

#[derive(Clone, Debug, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct RegexString(pub String);
