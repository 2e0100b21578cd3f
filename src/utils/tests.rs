use super::error::Error;
use super::logging;

#[test]
fn logging_init_accepts_levels() {
    // try_init makes repeated initialisation a no-op
    logging::init("info");
    logging::init("debug");
    logging::init("warn");
}

#[test]
fn test_parse_level_falls_back_to_info() {
    assert_eq!(logging::parse_level("WARNING"), tracing::Level::WARN);
    assert_eq!(logging::parse_level(" trace "), tracing::Level::TRACE);
    assert_eq!(logging::parse_level("verbose"), tracing::Level::INFO);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::EmptySsid.to_string(),
        "subscription id must contain at least a contract"
    );
    assert_eq!(
        Error::SubscriberClosed("abc".to_string()).to_string(),
        "subscriber abc is no longer receiving"
    );
}

#[test]
fn test_serde_error_converts() {
    let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, Error::Serialization(_)));
}
