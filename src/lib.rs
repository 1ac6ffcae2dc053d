pub mod candid_rpc;
pub mod chain;
pub mod checked_amount;
pub mod constants;
pub mod error;
pub mod fee_history;
pub mod fee_market;
pub mod lifecycle;
pub mod logs;
pub mod memory;
pub mod metrics;
pub mod numeric;
pub mod types;

pub use crate::candid_rpc::eth_fee_history;
pub use crate::chain::{BlockchainQueries, InMemoryChain};
pub use crate::error::{FeeHistoryError, FeeHistoryResultOf};
pub use crate::fee_history::{FeeHistoryEngine, FeeHistoryRequest, FeeHistoryResult};
pub use crate::fee_market::{FeeMarket, FeeMarketSchedule, ForkSchedule, LondonFeeMarket};
pub use crate::metrics::encode_metrics;
