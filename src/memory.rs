use std::cell::RefCell;

use crate::types::{LogFilter, Metrics};

thread_local! {
    // Unstable static data: this is reset when the canister is upgraded.
    pub static UNSTABLE_METRICS: RefCell<Metrics> = RefCell::new(Metrics::default());
    static UNSTABLE_LOG_FILTER: RefCell<LogFilter> = RefCell::new(LogFilter::default());
}

pub fn get_log_filter() -> LogFilter {
    UNSTABLE_LOG_FILTER.with_borrow(|filter| filter.clone())
}

pub fn set_log_filter(filter: LogFilter) {
    UNSTABLE_LOG_FILTER.with_borrow_mut(|current| *current = filter)
}

pub fn get_metrics() -> Metrics {
    UNSTABLE_METRICS.with_borrow(|metrics| metrics.clone())
}

#[cfg(test)]
mod test {
    use crate::memory::{get_log_filter, set_log_filter};
    use crate::types::LogFilter;

    #[test]
    fn test_log_filter() {
        assert_eq!(get_log_filter(), LogFilter::ShowAll);

        set_log_filter(LogFilter::HidePattern("^DEBUG ".into()));
        assert_eq!(get_log_filter(), LogFilter::HidePattern("^DEBUG ".into()));

        set_log_filter(LogFilter::HideAll);
        assert_eq!(get_log_filter(), LogFilter::HideAll);
    }
}
