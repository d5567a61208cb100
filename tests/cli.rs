use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use realize::cli::{Cli, Command};
use realize::config::FlagSource;
use realize::config::flags;

#[test]
fn parses_init_with_defaults() {
    let cli = Cli::try_parse_from(["realize", "init"]).expect("cli parse should work");
    assert!(matches!(cli.command, Command::Init));
    assert_eq!(cli.config_file, "realize.yaml");
    assert!(cli.dir.is_none());

    let parsed = &cli.flags;
    assert!(!parsed.no_config);
    assert_eq!(parsed.flimit, 0);
    assert_eq!(parsed.legacy_delay, Duration::from_millis(1500));
    assert_eq!(parsed.serv_host, "localhost");
    assert_eq!(parsed.serv_port, 5002);
}

#[test]
fn parses_settings_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "realize",
        "init",
        "--flimit",
        "100",
        "--legacy",
        "--legacy-delay",
        "5s",
        "--serv-open",
        "--serv-host",
        "127.0.0.1",
        "--serv-port",
        "5001",
        "--dir",
        "/tmp/project",
    ])
    .expect("cli parse should work");

    assert_eq!(cli.dir, Some(PathBuf::from("/tmp/project")));
    let parsed = &cli.flags;
    assert_eq!(parsed.uint64(flags::FILE_LIMIT), 100);
    assert!(parsed.bool(flags::LEGACY));
    assert_eq!(parsed.duration(flags::LEGACY_DELAY), Duration::from_secs(5));
    assert!(parsed.bool(flags::SERVER_OPEN));
    assert_eq!(parsed.string(flags::SERVER_HOST), "127.0.0.1");
    assert_eq!(parsed.int(flags::SERVER_PORT), 5001);
}

#[test]
fn opt_out_flags_map_to_their_names() {
    let cli = Cli::try_parse_from(["realize", "--no-config", "--no-server", "show"])
        .expect("cli parse should work");
    assert!(matches!(cli.command, Command::Show));
    assert!(cli.flags.bool(flags::NO_CONFIG));
    assert!(cli.flags.bool(flags::NO_SERVER));
    assert!(!cli.flags.bool("unknown"));
}

#[test]
fn rejects_bad_legacy_delay() {
    let result = Cli::try_parse_from(["realize", "init", "--legacy-delay", "soon"]);
    assert!(result.is_err());
}

#[test]
fn parses_clean_and_path() {
    let cli = Cli::try_parse_from(["realize", "clean", "--json"]).expect("cli parse should work");
    assert!(matches!(cli.command, Command::Clean));
    assert!(cli.json);

    let cli = Cli::try_parse_from(["realize", "-vv", "path"]).expect("cli parse should work");
    assert!(matches!(cli.command, Command::Path));
    assert_eq!(cli.verbose, 2);
}
