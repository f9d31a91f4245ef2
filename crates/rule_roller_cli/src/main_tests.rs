use super::*;

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["rule-roller"]).expect("Parse failed");
    assert_eq!(cli.config, "config.yml");
    assert!(!cli.version);
    assert!(!cli.license);
    assert!(!cli.dump_resolved);
}

#[test]
fn test_all_flags() {
    let cli = Cli::try_parse_from([
        "rule-roller",
        "--config",
        "monitoring/main.yaml",
        "--dump-resolved",
        "--license",
        "--version",
    ])
    .expect("Parse failed");

    assert_eq!(cli.config, "monitoring/main.yaml");
    assert!(cli.dump_resolved);
    assert!(cli.license);
    assert!(cli.version);
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Cli::try_parse_from(["rule-roller", "--bogus"]).is_err());
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn test_run_missing_config_fails() {
    let cli = Cli::try_parse_from(["rule-roller", "--config", "/nonexistent/rule-roller.yml"])
        .expect("Parse failed");

    assert!(matches!(run(&cli), Err(Error::Config(_))));
}

#[test]
fn test_failed_run_diagnostic_names_program_and_cause() {
    let cli = Cli::try_parse_from(["rule-roller", "--config", "/nonexistent/rule-roller.yml"])
        .expect("Parse failed");
    let error = run(&cli).expect_err("Run should fail");

    let line = diagnostic(PROGRAM_NAME, &error);
    assert!(line.starts_with("rule-roller: Configuration error: "));
    assert!(line.contains("/nonexistent/rule-roller.yml"));
}
