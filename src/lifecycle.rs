use crate::fee_market::ForkSchedule;
use crate::logs::INFO;
use crate::memory::set_log_filter;
use crate::types::LogFilter;
use fee_history_types::InstallArgs;
use ic_canister_log::log;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum InitError {
    #[error("invalid log filter: {0}")]
    InvalidLogFilter(#[from] regex::Error),
}

/// Applies the install arguments and returns the fee market schedule they describe.
///
/// The log filter is only replaced when one is given, so that upgrades without arguments keep it.
pub fn init(args: InstallArgs) -> Result<ForkSchedule, InitError> {
    if let Some(filter) = args.log_filter {
        let filter = LogFilter::from(filter);
        filter.validate()?;
        set_log_filter(filter);
    }
    let schedule = ForkSchedule::from(args.fee_market);
    log!(INFO, "[init]: fee market schedule {:?}", schedule);
    Ok(schedule)
}
