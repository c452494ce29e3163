//! Tests for configuration consistency validation.

use rstest::rstest;

use crate::PillarsConfig;
use crate::questionnaire::QuestionnaireError;

#[rstest]
fn defaults_are_valid() {
    assert!(PillarsConfig::default().validate().is_ok());
}

#[rstest]
#[case::not_a_url(Some("definitely not a url"), None, None)]
#[case::unsupported_scheme(Some("ftp://example.test"), None, None)]
#[case::zero_timeout(None, Some(0), None)]
#[case::blank_pillar(None, None, Some("   "))]
fn rejects_inconsistent_values(
    #[case] api_base: Option<&str>,
    #[case] request_timeout_seconds: Option<u64>,
    #[case] default_pillar: Option<&str>,
) {
    let config = PillarsConfig {
        api_base: api_base.map(str::to_owned),
        request_timeout_seconds,
        default_pillar: default_pillar.map(str::to_owned),
        ..Default::default()
    };

    let result = config.validate();

    assert!(
        matches!(result, Err(QuestionnaireError::Configuration { .. })),
        "expected configuration error, got {result:?}"
    );
}

#[rstest]
fn accepts_custom_http_endpoint_and_timeout() {
    let config = PillarsConfig {
        api_base: Some("http://localhost:3000/Prod".to_owned()),
        request_timeout_seconds: Some(10),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}
