//! Command line parsing and config merging

use std::io::Write;

use clap::Parser;
use ll_cli::{Cli, Command};
use ll_engine::Scheme;
use ll_model::{Color, PackFormat};

#[test]
fn test_stream_flags_override_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "device": "/dev/ttyUSB7", "baud_rate": 57600, "strip_length": 32, "trials": 10 }}"#
    )
    .unwrap();
    let config_path = file.path().to_str().unwrap().to_string();

    let cli = Cli::try_parse_from([
        "ledlink",
        "stream",
        "--config",
        config_path.as_str(),
        "--baud",
        "38400",
        "--half",
        "--no-wait",
        "--scheme",
        "random",
    ])
    .unwrap();

    let Command::Stream(args) = cli.command else {
        panic!("expected stream command");
    };
    assert_eq!(args.scheme, Scheme::Random);

    let config = args.link.resolve().unwrap();
    assert_eq!(config.device, "/dev/ttyUSB7");
    assert_eq!(config.baud_rate, 38400);
    assert_eq!(config.strip_length, 32);
    assert_eq!(config.trials, 10);
    assert_eq!(config.format, PackFormat::Half);
    assert_eq!(config.ready_timeout(), None);
}

#[test]
fn test_patterns_tint_parses_color() {
    let cli = Cli::try_parse_from(["ledlink", "-vv", "patterns", "--tint", "#102030", "-n", "8"])
        .unwrap();
    assert_eq!(cli.verbose, 2);

    let Command::Patterns(args) = cli.command else {
        panic!("expected patterns command");
    };
    assert_eq!(args.tint, Some(Color::new(0x10, 0x20, 0x30)));
    assert_eq!(args.step_ms, 20);
    assert_eq!(args.link.resolve().unwrap().strip_length, 8);
}

#[test]
fn test_unknown_scheme_is_rejected() {
    assert!(Cli::try_parse_from(["ledlink", "stream", "--scheme", "sparkle"]).is_err());
}

#[test]
fn test_missing_config_file_fails() {
    let cli = Cli::try_parse_from(["ledlink", "stream", "--config", "/nonexistent/ledlink.json"])
        .unwrap();
    let Command::Stream(args) = cli.command else {
        panic!("expected stream command");
    };
    assert!(args.link.resolve().is_err());
}
