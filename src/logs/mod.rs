#[cfg(test)]
mod tests;

use ic_canister_log::{declare_log_buffer, export as export_logs, GlobalBuffer, Sink};

use crate::memory::get_log_filter;

// High-priority messages: failed requests and configuration changes.
declare_log_buffer!(name = INFO_BUF, capacity = 1000);

// Low-priority messages: one summary per computed fee history.
declare_log_buffer!(name = DEBUG_BUF, capacity = 1000);

pub const INFO: PrintProxySink = PrintProxySink(&Priority::Info, &INFO_BUF);
pub const DEBUG: PrintProxySink = PrintProxySink(&Priority::Debug, &DEBUG_BUF);

#[cfg(test)]
thread_local! {
    static DISPLAYED_LOG_ENTRIES: std::cell::RefCell<Vec<String>> =
        const { std::cell::RefCell::new(Vec::new()) };
}

/// Sink appending to a log buffer and printing the entries matching the configured [`crate::types::LogFilter`].
#[derive(Debug)]
pub struct PrintProxySink(&'static Priority, &'static GlobalBuffer);

impl Sink for PrintProxySink {
    fn append(&self, entry: ic_canister_log::LogEntry) {
        let line = format!(
            "{} {}:{} {}",
            self.0.as_str_uppercase(),
            entry.file,
            entry.line,
            entry.message
        );
        if get_log_filter().is_match(&line) {
            display(&line, &entry);
        }
        self.1.append(entry)
    }
}

#[cfg(test)]
fn display(_line: &str, entry: &ic_canister_log::LogEntry) {
    DISPLAYED_LOG_ENTRIES.with_borrow_mut(|entries| entries.push(entry.message.clone()));
}

#[cfg(all(not(test), target_arch = "wasm32"))]
fn display(line: &str, _entry: &ic_canister_log::LogEntry) {
    ic_cdk::println!("{}", line)
}

#[cfg(all(not(test), not(target_arch = "wasm32")))]
fn display(line: &str, _entry: &ic_canister_log::LogEntry) {
    println!("{}", line)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Priority {
    Info,
    Debug,
}

impl Priority {
    pub fn as_str_uppercase(self) -> &'static str {
        match self {
            Priority::Info => "INFO",
            Priority::Debug => "DEBUG",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogEntry {
    pub timestamp: u64,
    pub priority: Priority,
    pub file: String,
    pub line: u32,
    pub message: String,
    pub counter: u64,
}

/// Snapshot of the buffered log entries, `INFO` first.
#[derive(Clone, Debug, Default)]
pub struct Log {
    pub entries: Vec<LogEntry>,
}

impl Log {
    pub fn push_logs(&mut self, priority: Priority) {
        let logs = match priority {
            Priority::Info => export_logs(&INFO_BUF),
            Priority::Debug => export_logs(&DEBUG_BUF),
        };
        self.entries.extend(logs.into_iter().map(|entry| LogEntry {
            timestamp: entry.timestamp,
            counter: entry.counter,
            priority,
            file: entry.file.to_string(),
            line: entry.line,
            message: entry.message,
        }));
    }

    pub fn push_all(&mut self) {
        self.push_logs(Priority::Info);
        self.push_logs(Priority::Debug);
    }
}
