// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogFormat, LogLevel, file_layer};

#[test]
fn test_log_level_directives() {
    let directives: Vec<_> = (0..=6)
        .map(|n| LogLevel::try_from(n).expect("in range").directives())
        .collect();
    insta::assert_debug_snapshot!(directives, @r#"
    [
        "off",
        "error",
        "warn",
        "warn,gitrun=info",
        "warn,gitrun=debug",
        "warn,gitrun=trace",
        "trace",
    ]
    "#);
}

#[test]
fn test_log_level_out_of_range() {
    let err = LogLevel::try_from(7).expect_err("7 is out of range");
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 7");
    assert_eq!(u8::from(LogLevel::Dump), 6);
    assert!(LogLevel::Debug > LogLevel::Info);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::Info);
    assert_eq!(config.file_level(), LogLevel::Trace);
    assert_eq!(config.file_format(), LogFormat::Text);
    assert!(config.log_file().is_none());
    assert!(!config.console_timestamps());
}

#[test]
fn test_file_layer_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("logs/nested/gitrun.log");
    let config = LogConfig::builder()
        .with_log_file(path.clone())
        .with_file_format(LogFormat::Json)
        .build();

    let (_layer, guard) = file_layer(&path, &config).expect("file layer");
    drop(guard);
    assert!(path.is_file());
}
