use clap::Parser;

use super::*;

#[test]
fn check_requires_a_path() {
    let result = Cli::try_parse_from(["style-guard", "check"]);
    assert!(result.is_err());
}

#[test]
fn check_parses_path_and_defaults() {
    let cli = Cli::try_parse_from(["style-guard", "check", "src"]).unwrap();
    let Commands::Check(args) = &cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.path, PathBuf::from("src"));
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.exclude.is_empty());
    assert!(!cli.quiet);
}

#[test]
fn check_accepts_repeated_excludes() {
    let cli = Cli::try_parse_from([
        "style-guard",
        "check",
        ".",
        "-x",
        "**/build/**",
        "-x",
        "**/dist/**",
        "--exclude-name",
        "setup.py",
    ])
    .unwrap();
    let Commands::Check(args) = &cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.exclude.len(), 2);
    assert_eq!(args.exclude_name, vec!["setup.py".to_string()]);
}

#[test]
fn check_parses_json_format() {
    let cli = Cli::try_parse_from(["style-guard", "check", ".", "--format", "json"]).unwrap();
    let Commands::Check(args) = &cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn check_rejects_unknown_format() {
    let result = Cli::try_parse_from(["style-guard", "check", ".", "--format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn global_flags_parse_after_subcommand() {
    let cli = Cli::try_parse_from(["style-guard", "check", ".", "--quiet", "--no-config"]).unwrap();
    assert!(cli.quiet);
    assert!(cli.no_config);
}

#[test]
fn rules_subcommand_parses() {
    let cli = Cli::try_parse_from(["style-guard", "rules"]).unwrap();
    assert!(matches!(cli.command, Commands::Rules));
}

#[test]
fn init_defaults_to_local_config_name() {
    let cli = Cli::try_parse_from(["style-guard", "init"]).unwrap();
    let Commands::Init(args) = &cli.command else {
        panic!("expected init command");
    };
    assert_eq!(args.output, PathBuf::from(".style-guard.toml"));
    assert!(!args.force);
}
