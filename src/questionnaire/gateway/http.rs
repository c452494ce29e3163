//! HTTP implementation of the questionnaire gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::QuestionnaireGateway;
use crate::questionnaire::error::QuestionnaireError;
use crate::questionnaire::model::{AnswerSet, PillarGroup, ReviewSubmission, SubmitReceipt};

const QUESTIONS_RESOURCE: &str = "questions";
const SUBMIT_RESOURCE: &str = "submit-review";

/// Questionnaire gateway backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpQuestionnaireGateway {
    client: Client,
    base_url: Url,
}

impl HttpQuestionnaireGateway {
    /// Creates a gateway for the service rooted at `base_url`.
    ///
    /// `timeout` bounds each request; `None` keeps the transport default.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionnaireError::Configuration`] when `base_url` is not an
    /// absolute HTTP(S) URL or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, QuestionnaireError> {
        let parsed = Url::parse(base_url).map_err(|error| QuestionnaireError::Configuration {
            message: format!("invalid API base URL '{base_url}': {error}"),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(QuestionnaireError::Configuration {
                message: format!("API base URL must use http or https: {base_url}"),
            });
        }

        let builder = Client::builder();
        let configured = match timeout {
            Some(duration) => builder.timeout(duration),
            None => builder,
        };
        let client = configured
            .build()
            .map_err(|error| QuestionnaireError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{resource}", self.base_url.as_str().trim_end_matches('/'))
    }
}

#[async_trait]
impl QuestionnaireGateway for HttpQuestionnaireGateway {
    async fn fetch_questions(&self) -> Result<PillarGroup, QuestionnaireError> {
        let endpoint = self.endpoint(QUESTIONS_RESOURCE);
        tracing::debug!("fetching questions from {endpoint}");

        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(|error| transport_error(&error))?;
        let success = ensure_success(response).await?;

        let questions: PillarGroup = decode_body(success).await?;
        questions.validate()?;

        Ok(questions)
    }

    async fn submit_review(
        &self,
        answers: &AnswerSet,
    ) -> Result<SubmitReceipt, QuestionnaireError> {
        let endpoint = self.endpoint(SUBMIT_RESOURCE);
        tracing::debug!("submitting {} answers to {endpoint}", answers.len());

        // `json` also declares the `application/json` content type.
        let response = self
            .client
            .post(endpoint)
            .json(&ReviewSubmission { answers })
            .send()
            .await
            .map_err(|error| transport_error(&error))?;
        let success = ensure_success(response).await?;

        decode_body(success).await
    }
}

fn transport_error(error: &reqwest::Error) -> QuestionnaireError {
    QuestionnaireError::Network {
        message: error.to_string(),
    }
}

/// Passes 2xx responses through and turns anything else into a status error
/// carrying the response body.
async fn ensure_success(response: Response) -> Result<Response, QuestionnaireError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "(failed to read error response body)".to_owned());
    tracing::debug!("questionnaire service answered {status}");

    Err(QuestionnaireError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Decodes a 2xx body, reporting the decoder's own account of what was
/// wrong with it.
async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T, QuestionnaireError> {
    let body = response
        .text()
        .await
        .map_err(|error| QuestionnaireError::Decode {
            message: format!("could not read response body: {error}"),
        })?;

    serde_json::from_str(&body).map_err(|error| QuestionnaireError::Decode {
        message: error.to_string(),
    })
}

#[cfg(test)]
mod unit_tests {
    use rstest::rstest;

    use super::HttpQuestionnaireGateway;
    use crate::questionnaire::QuestionnaireError;

    #[rstest]
    #[case::no_trailing_slash("https://example.test/Prod")]
    #[case::trailing_slash("https://example.test/Prod/")]
    fn endpoint_joins_resource_onto_base_path(#[case] base: &str) {
        let gateway = HttpQuestionnaireGateway::new(base, None).expect("gateway should build");

        assert_eq!(
            gateway.endpoint("questions"),
            "https://example.test/Prod/questions"
        );
    }

    #[rstest]
    #[case::not_a_url("not a url")]
    #[case::unsupported_scheme("ftp://example.test")]
    fn rejects_unusable_base_urls(#[case] base: &str) {
        let result = HttpQuestionnaireGateway::new(base, None);

        assert!(
            matches!(result, Err(QuestionnaireError::Configuration { .. })),
            "expected configuration error, got {result:?}"
        );
    }
}
