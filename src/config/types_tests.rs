//! Tests for types

use super::*;
use proptest::prelude::*;

// Feature: config-system, Property 1: Valid mode parsing
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_valid_mode_parsing(mode in prop::sample::select(vec!["native", "manual"])) {
        let toml_content = format!("[interceptor]\nmode = \"{}\"\n", mode);

        let config: Result<Config, _> = toml::from_str(&toml_content);
        prop_assert!(config.is_ok(), "Failed to parse valid mode: {}", mode);

        let expected = match mode {
            "native" => InterceptMode::Native,
            "manual" => InterceptMode::Manual,
            _ => unreachable!(),
        };
        prop_assert_eq!(config.unwrap().interceptor.mode, expected);
    }
}

// Feature: config-system, Property 2: Missing fields use defaults
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_missing_interceptor_fields_use_defaults(
        include_section in prop::bool::ANY,
        include_mode in prop::bool::ANY
    ) {
        let toml_content = if !include_section {
            String::new()
        } else if !include_mode {
            "[interceptor]\n".to_string()
        } else {
            "[interceptor]\nmode = \"native\"\n".to_string()
        };

        let config: Config = toml::from_str(&toml_content).unwrap();

        if !include_section || !include_mode {
            prop_assert_eq!(config.interceptor.mode, InterceptMode::Manual);
        } else {
            prop_assert_eq!(config.interceptor.mode, InterceptMode::Native);
        }
    }
}

#[test]
fn test_intercept_mode_default() {
    assert_eq!(InterceptMode::default(), InterceptMode::Manual);
}

#[test]
fn test_parse_memory_backend() {
    let toml = r#"
[clipboard]
backend = "memory"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.clipboard.backend, ClipboardBackend::Memory);
}

#[test]
fn test_invalid_mode_rejected() {
    let toml = r#"
[interceptor]
mode = "sometimes"
"#;
    let result: Result<Config, _> = toml::from_str(toml);
    assert!(result.is_err());
}

#[test]
fn test_config_serializes_back_to_toml() {
    let config = Config::default();
    let rendered = toml::to_string(&config).unwrap();
    assert!(rendered.contains("backend = \"auto\""));
    assert!(rendered.contains("mode = \"manual\""));

    let parsed: Config = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed.interceptor.mode, InterceptMode::Manual);
}
