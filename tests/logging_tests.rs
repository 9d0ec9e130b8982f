use broadside::{init_logging, level_from, LOG_ENV};
use log::LevelFilter;

#[test]
fn test_level_from_env_value() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
    assert_eq!(level_from(Some("loud")), LevelFilter::Info);
}

#[test]
fn test_init_logging_can_run_twice() {
    let expected = level_from(std::env::var(LOG_ENV).ok().as_deref());
    assert_eq!(init_logging(), expected);
    assert_eq!(init_logging(), expected);
    assert_eq!(log::max_level(), expected);
}
