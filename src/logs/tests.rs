use crate::{
    logs::{Log, Priority, DEBUG, INFO},
    memory::set_log_filter,
    types::LogFilter,
};
use ic_canister_log::log;

fn get_messages() -> Vec<String> {
    super::DISPLAYED_LOG_ENTRIES.with_borrow(|buffer| buffer.iter().cloned().collect())
}

#[test]
fn should_show_all() {
    set_log_filter(LogFilter::ShowAll);
    log!(INFO, "ABC");
    log!(INFO, "123");
    log!(INFO, "!@#");
    assert_eq!(get_messages(), vec!["ABC", "123", "!@#"]);
}

#[test]
fn should_hide_all() {
    set_log_filter(LogFilter::HideAll);
    log!(INFO, "ABC");
    log!(INFO, "123");
    log!(INFO, "!@#");
    assert_eq!(get_messages().len(), 0);
}

#[test]
fn should_show_pattern() {
    set_log_filter(LogFilter::ShowPattern("end$".into()));
    log!(INFO, "message");
    log!(INFO, "message end");
    log!(INFO, "end message");
    assert_eq!(get_messages(), vec!["message end"]);
}

#[test]
fn should_match_pattern_against_priority_and_location() {
    set_log_filter(LogFilter::ShowPattern("^INFO [^ ]* 123".into()));
    log!(INFO, "123");
    log!(INFO, "INFO 123");
    log!(INFO, "");
    log!(INFO, "123456");
    assert_eq!(get_messages(), vec!["123", "123456"]);
}

#[test]
fn should_hide_pattern() {
    set_log_filter(LogFilter::HidePattern("[ABC]".into()));
    log!(INFO, "remove A");
    log!(INFO, "...B...");
    log!(INFO, "C");
    log!(INFO, "message");
    assert_eq!(get_messages(), vec!["message"]);
}

#[test]
fn should_match_priority_prefix() {
    set_log_filter(LogFilter::HidePattern("^DEBUG ".into()));
    log!(DEBUG, "hidden");
    log!(INFO, "shown");
    assert_eq!(get_messages(), vec!["shown"]);
}

#[test]
fn should_hide_everything_with_invalid_show_pattern() {
    set_log_filter(LogFilter::ShowPattern("(".into()));
    log!(INFO, "message");
    assert_eq!(get_messages().len(), 0);
}

#[test]
fn should_buffer_entries_regardless_of_filter() {
    set_log_filter(LogFilter::HideAll);
    log!(INFO, "first");
    log!(DEBUG, "second");

    let mut log = Log::default();
    log.push_all();

    assert_eq!(get_messages().len(), 0);
    let messages: Vec<_> = log
        .entries
        .iter()
        .map(|entry| (entry.priority, entry.message.as_str()))
        .collect();
    assert_eq!(
        messages,
        vec![(Priority::Info, "first"), (Priority::Debug, "second")]
    );
}
