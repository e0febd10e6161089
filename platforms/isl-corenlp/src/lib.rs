//! Blocking client for a Stanford CoreNLP server
//! (`java -mx4g edu.stanford.nlp.pipeline.StanfordCoreNLPServer -port 9000`).
//!
//! One client serves as both the constituency parser and the POS tagger.

mod response;

use std::time::Duration;

use isl_gloss::{ConstituencyParser, PosTagger, ServiceError};
use isl_protocol::TaggedToken;
use isl_tree::ParseTree;
use log::debug;
use reqwest::blocking::Client;
use serde_json::json;

use crate::response::Document;

pub const DEFAULT_URL: &str = "http://localhost:9000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_PARSE_ANNOTATORS: &str = "tokenize,ssplit,pos,parse";
pub const DEFAULT_TAG_ANNOTATORS: &str = "tokenize,ssplit,pos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreNlpConfig {
    pub url: String,
    /// Bounds each request end to end, connect included.
    pub timeout: Duration,
    /// Must end in `parse`.
    pub parse_annotators: String,
    /// Must include `pos`.
    pub tag_annotators: String,
}

impl Default for CoreNlpConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            parse_annotators: DEFAULT_PARSE_ANNOTATORS.to_string(),
            tag_annotators: DEFAULT_TAG_ANNOTATORS.to_string(),
        }
    }
}

pub struct CoreNlpClient {
    http: Client,
    config: CoreNlpConfig,
}

impl CoreNlpClient {
    pub fn new(config: CoreNlpConfig) -> Result<Self, ServiceError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()
            .map_err(|e| ServiceError::Unreachable {
                endpoint: config.url.clone(),
                reason: format!("could not build HTTP client: {}", e),
            })?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CoreNlpConfig {
        &self.config
    }

    /// POST `text` with the given pipeline properties and decode the JSON document.
    fn annotate(&self, text: &str, properties: serde_json::Value) -> Result<Document, ServiceError> {
        debug!("CoreNLP request to {}: {}", self.config.url, properties);

        let response = self
            .http
            .post(&self.config.url)
            .query(&[("properties", properties.to_string())])
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(text.to_owned())
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                endpoint: self.config.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| self.transport_error(e))?;
        serde_json::from_str(&body)
            .map_err(|e| ServiceError::InvalidResponse(format!("CoreNLP JSON: {}", e)))
    }

    fn transport_error(&self, err: reqwest::Error) -> ServiceError {
        if err.is_timeout() {
            ServiceError::Timeout { endpoint: self.config.url.clone(), timeout: self.config.timeout }
        } else {
            ServiceError::Unreachable { endpoint: self.config.url.clone(), reason: err.to_string() }
        }
    }
}

impl ConstituencyParser for CoreNlpClient {
    /// Tokens are sent pre-split, one sentence per request, so the server
    /// parses exactly these words. Every returned sentence is a candidate.
    fn parse(&self, tokens: &[String]) -> Result<Vec<ParseTree>, ServiceError> {
        let properties = json!({
            "annotators": self.config.parse_annotators,
            "outputFormat": "json",
            "tokenize.whitespace": "true",
            "ssplit.eolonly": "true",
        });
        let document = self.annotate(&tokens.join(" "), properties)?;
        document.trees()
    }
}

impl PosTagger for CoreNlpClient {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, ServiceError> {
        let properties = json!({
            "annotators": self.config.tag_annotators,
            "outputFormat": "json",
        });
        Ok(self.annotate(text, properties)?.tagged_tokens())
    }
}
