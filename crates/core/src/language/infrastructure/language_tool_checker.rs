use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::language::domain::grammar_checker::{CollaboratorError, GrammarChecker};

#[derive(Error, Debug)]
pub enum LanguageToolError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("grammar check request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed grammar check response: {0}")]
    Response(#[source] serde_json::Error),
}

#[derive(Deserialize)]
struct CheckResponse {
    matches: Vec<serde_json::Value>,
}

/// Grammar checker backed by a LanguageTool server (`/v2/check`).
///
/// Works against the public API or a self-hosted instance. Each detected
/// rule match counts as one issue.
#[derive(Debug)]
pub struct LanguageToolChecker {
    endpoint: String,
    language: String,
    client: Client,
}

impl LanguageToolChecker {
    pub fn new(endpoint: &str, language: &str) -> Result<Self, LanguageToolError> {
        let client = Client::builder().build().map_err(LanguageToolError::Client)?;
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            language: language.to_string(),
            client,
        })
    }

    pub fn check_url(&self) -> String {
        format!("{}/v2/check", self.endpoint)
    }
}

/// Counts the rule matches in a `/v2/check` JSON response body.
pub fn parse_match_count(body: &str) -> Result<usize, LanguageToolError> {
    let response: CheckResponse = serde_json::from_str(body).map_err(LanguageToolError::Response)?;
    Ok(response.matches.len())
}

impl GrammarChecker for LanguageToolChecker {
    fn check(&self, text: &str) -> Result<usize, CollaboratorError> {
        let url = self.check_url();
        log::debug!("Checking grammar via {url}");
        let body = self
            .client
            .post(&url)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| LanguageToolError::Request {
                url: url.clone(),
                source: e,
            })?;
        Ok(parse_match_count(&body)?)
    }
}
