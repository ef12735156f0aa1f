use clap::Parser;
use ophub_cli::{Cli, parse_assignment, run};
use ophub_kernel::domain::config::OptionsConfig;
use ophub_kernel::domain::value::FlagValue;
use serde_json::{Value, json};

fn exec(args: &[&str], config: &OptionsConfig) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("ophub").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(&cli, config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn list_json_has_fields_and_flags() {
    let out = exec(&["list", "--json"], &OptionsConfig::default()).unwrap();
    let listed: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(listed["alignment"], json!(false));
    assert_eq!(listed["concatStrategy"], json!("faithful"));
    assert_eq!(listed["segment_max_length"], json!(128));
}

#[test]
fn get_sees_config_overrides() {
    let mut config = OptionsConfig::default();
    config.response.alignment = true;
    config.flags.insert("quality_word_scores".to_owned(), FlagValue::Bool(true));

    let out = exec(&["get", "alignment", "quality_word_scores"], &config).unwrap();
    assert_eq!(out, "alignment\ttrue\nquality_word_scores\ttrue\n");
}

#[test]
fn integral_config_value_fills_float_flag() {
    let mut config = OptionsConfig::default();
    config.flags.insert("quality_threshold".to_owned(), FlagValue::Int(1));

    let out = exec(&["get", "quality_threshold"], &config).unwrap();
    assert_eq!(out, "quality_threshold\t1.0\n");
}

#[test]
fn set_prints_written_values() {
    let out = exec(
        &["set", "segment_max_length=64", "concatStrategy=space", "inlineTags=b,em"],
        &OptionsConfig::default(),
    )
    .unwrap();
    assert!(out.contains("segment_max_length\t64"));
    assert!(out.contains("concatStrategy\t\"space\""));
    assert!(out.contains("inlineTags\t\"b,em\""));
}

#[test]
fn set_reports_wrong_type_and_unknown_name() {
    let config = OptionsConfig::default();

    let err = exec(&["set", "segment_max_length=long"], &config).unwrap_err();
    assert!(format!("{err:#}").contains("Type mismatch"));

    let err = exec(&["get", "nope"], &config).unwrap_err();
    assert!(format!("{err:#}").contains("Unknown flag"));
}

#[test]
fn rejected_config_override_fails_the_command() {
    let mut config = OptionsConfig::default();
    config.flags.insert("ghost".to_owned(), FlagValue::Bool(true));

    let err = exec(&["get", "html"], &config).unwrap_err();
    assert!(format!("{err:#}").contains("config flags"));
}

#[test]
fn assignments_parse_json_scalars_with_string_fallback() {
    assert_eq!(parse_assignment("a=3").unwrap(), ("a", json!(3)));
    assert_eq!(parse_assignment("a=true").unwrap(), ("a", json!(true)));
    assert_eq!(parse_assignment("a=space").unwrap(), ("a", json!("space")));
    assert_eq!(parse_assignment("a=x=y").unwrap(), ("a", json!("x=y")));
    assert!(parse_assignment("novalue").is_err());
    assert!(parse_assignment("=1").is_err());
}

#[test]
fn global_flags_parse_anywhere() {
    let cli = Cli::try_parse_from(["ophub", "get", "html", "-vv", "--log-level", "warn"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.log_level.as_deref(), Some("warn"));
}
