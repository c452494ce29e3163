//! Behavioural tests for CLI configuration loading.

use ortho_config::MergeComposer;
use pillars::PillarsConfig;
use pillars::config::DEFAULT_API_BASE;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};

/// State for CLI configuration scenarios.
///
/// Uses JSON values to represent configuration layers since `MergeComposer`
/// doesn't implement Clone. The composer is built fresh in `build_config`.
#[derive(ScenarioState, Default)]
struct ConfigState {
    defaults_layer: Slot<Value>,
    env_layer: Slot<Value>,
    cli_layer: Slot<Value>,
    config: Slot<PillarsConfig>,
}

#[fixture]
fn config_state() -> ConfigState {
    ConfigState::default()
}

/// Builds and stores the configuration from the accumulated layers.
fn build_config(state: &ConfigState) {
    let mut composer = MergeComposer::new();

    // The base defaults give the merge a layer with the struct's shape.
    let base_defaults = json!({"api_base": null, "default_pillar": null});
    let defaults = state
        .defaults_layer
        .get()
        .unwrap_or_else(|| base_defaults.clone());
    composer.push_defaults(merge_json(base_defaults, defaults));

    if let Some(env) = state.env_layer.get() {
        composer.push_environment(env);
    }

    if let Some(cli) = state.cli_layer.get() {
        composer.push_cli(cli);
    }

    match PillarsConfig::merge_from_layers(composer.layers()) {
        Ok(config) => {
            state.config.set(config);
        }
        Err(error) => panic!("failed to merge configuration: {error}"),
    }
}

/// Merges two JSON values, with `overlay` values taking precedence over `base`.
fn merge_json(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                base_map.insert(key, value);
            }
            Value::Object(base_map)
        }
        (_, other) => other,
    }
}

fn built_config(state: &ConfigState) -> PillarsConfig {
    state
        .config
        .get()
        .unwrap_or_else(|| panic!("configuration not built"))
}

// --- Given steps ---

#[given("a configuration with no api_base set")]
fn no_api_base_set(config_state: &ConfigState) {
    config_state.defaults_layer.set(json!({}));
}

#[given("a configuration with environment api_base {url}")]
#[expect(clippy::needless_pass_by_value, reason = "rstest-bdd passes owned step arguments")]
fn env_api_base_set(config_state: &ConfigState, url: String) {
    config_state
        .env_layer
        .set(json!({"api_base": url.trim_matches('"')}));
}

#[given("a configuration with environment default_pillar {pillar}")]
#[expect(clippy::needless_pass_by_value, reason = "rstest-bdd passes owned step arguments")]
fn env_default_pillar_set(config_state: &ConfigState, pillar: String) {
    config_state
        .env_layer
        .set(json!({"default_pillar": pillar.trim_matches('"')}));
}

#[given("a configuration with environment request_timeout_seconds {seconds:u64}")]
fn env_timeout_set(config_state: &ConfigState, seconds: u64) {
    config_state
        .env_layer
        .set(json!({"request_timeout_seconds": seconds}));
}

// --- When steps ---

#[when("the CLI receives api_base {url}")]
#[expect(clippy::needless_pass_by_value, reason = "rstest-bdd passes owned step arguments")]
fn cli_receives_api_base(config_state: &ConfigState, url: String) {
    config_state
        .cli_layer
        .set(json!({"api_base": url.trim_matches('"')}));
    build_config(config_state);
}

#[when("the CLI receives no api_base")]
fn cli_receives_no_api_base(config_state: &ConfigState) {
    build_config(config_state);
}

// --- Then steps ---

#[then("the configuration uses the reference deployment")]
fn assert_reference_deployment(config_state: &ConfigState) {
    let config = built_config(config_state);

    assert_eq!(config.api_base(), DEFAULT_API_BASE);
    assert!(config.validate().is_ok(), "defaults should validate");
}

#[then("the configuration api_base is {expected}")]
#[expect(clippy::needless_pass_by_value, reason = "rstest-bdd passes owned step arguments")]
fn assert_api_base(config_state: &ConfigState, expected: String) {
    let config = built_config(config_state);

    assert_eq!(
        config.api_base(),
        expected.trim_matches('"'),
        "api_base mismatch"
    );
}

#[then("the default pillar is {expected}")]
#[expect(clippy::needless_pass_by_value, reason = "rstest-bdd passes owned step arguments")]
fn assert_default_pillar(config_state: &ConfigState, expected: String) {
    let config = built_config(config_state);

    assert_eq!(config.default_pillar(), expected.trim_matches('"'));
}

#[then("validating the configuration fails mentioning {expected}")]
#[expect(clippy::needless_pass_by_value, reason = "rstest-bdd passes owned step arguments")]
fn assert_validation_error(config_state: &ConfigState, expected: String) {
    let config = built_config(config_state);

    let Err(error) = config.validate() else {
        panic!("expected validation to fail");
    };
    let needle = expected.trim_matches('"');
    assert!(
        error.to_string().contains(needle),
        "'{error}' does not mention '{needle}'"
    );
}

// --- Scenario bindings ---

#[scenario(path = "tests/features/cli_config.feature", index = 0)]
fn reference_deployment_by_default(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 1)]
fn load_api_base_from_cli(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 2)]
fn cli_api_base_overrides_env(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 3)]
fn env_default_pillar_used(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 4)]
fn non_http_api_base_rejected(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 5)]
fn zero_timeout_rejected(config_state: ConfigState) {
    let _ = config_state;
}
