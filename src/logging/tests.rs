// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_range() {
    assert_eq!(LogLevel::new(0).unwrap(), LogLevel::OFF);
    assert_eq!(LogLevel::try_from(5).unwrap(), LogLevel::TRACE);

    let err = LogLevel::new(9).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value for 'log_level' in section '[global]': log level must be 0-5, got 9"
    );
}

#[test]
fn test_log_level_directives() {
    let directives: Vec<String> = (0..=5)
        .map(|n| LogLevel::new(n).unwrap().to_string())
        .collect();
    assert_eq!(directives, ["off", "error", "warn", "info", "debug", "trace"]);
    assert!(LogLevel::WARN < LogLevel::DEBUG);
}

#[test]
fn test_log_level_serializes_as_number() {
    insta::assert_yaml_snapshot!(LogLevel::DEBUG, @"4");
    assert_eq!(u8::from(LogLevel::INFO), 3);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());

    let custom = LogConfig::builder()
        .with_console_level(LogLevel::DEBUG)
        .with_log_file("pt.log".to_string())
        .build();
    assert_eq!(custom.console_level(), LogLevel::DEBUG);
    assert_eq!(custom.log_file(), Some("pt.log"));
}
