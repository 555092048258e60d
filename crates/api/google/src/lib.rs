use std::time::Duration;

use lingo_interface::{AsyncTranslator, TranslationOutput, error::ApiError};
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

const API_URL: &str = "https://translate.google.com/translate_a/single?client=at&dt=t&dj=1";
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_2_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/111.0.0.0 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct GoogleTranslator {
    client: Client,
    url: String,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self {
            client: Default::default(),
            url: API_URL.to_owned(),
        }
    }

    /// Point the client at a different host, e.g. a self-hosted proxy that
    /// speaks the same endpoint shape.
    pub fn with_url(url: String) -> Self {
        Self {
            client: Default::default(),
            url,
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AsyncTranslator for GoogleTranslator {
    async fn translate(
        &self,
        query: &str,
        from: Option<&str>,
        to: &str,
    ) -> anyhow::Result<TranslationOutput> {
        let sl = from.unwrap_or("auto");
        debug!("requesting translation {} -> {}", sl, to);

        let params = [("sl", sl), ("tl", to), ("q", query)];
        let response = self
            .client
            .post(&self.url)
            .timeout(REQUEST_TIMEOUT)
            .form(&params)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            return Err(ApiError::UnsupportedPair(sl.to_owned(), to.to_owned()).into());
        }
        if !status.is_success() {
            return Err(ApiError::Provider(format!("service returned status {status}")).into());
        }

        let body = response.text().await.map_err(classify_transport)?;
        Ok(parse_response(&body)?)
    }
}

fn classify_transport(err: reqwest::Error) -> anyhow::Error {
    if err.is_timeout() {
        ApiError::Timeout.into()
    } else if err.is_connect() {
        ApiError::Network(err.to_string()).into()
    } else {
        ApiError::Provider(err.to_string()).into()
    }
}

#[derive(Debug, Deserialize)]
struct Sentence {
    #[serde(default)]
    trans: String,
}

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    sentences: Vec<Sentence>,
    src: Option<String>,
}

fn parse_response(body: &str) -> Result<TranslationOutput, ApiError> {
    let response: Response =
        serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

    let mut text = String::new();
    for sentence in &response.sentences {
        text.push_str(&sentence.trans);
    }
    if text.is_empty() {
        return Err(ApiError::MalformedResponse("empty translation".to_owned()));
    }
    Ok(TranslationOutput {
        text,
        lang: response.src,
    })
}

#[cfg(test)]
mod tests {
    use lingo_interface::{AsyncTranslator as _, error::ApiError};

    use crate::{GoogleTranslator, parse_response};

    #[test]
    fn parses_sentences_and_detected_language() {
        let body = r#"{"sentences":[{"trans":"Hallo, ","orig":"Hello, "},{"trans":"Welt","orig":"world"}],"src":"en","confidence":0.98}"#;
        let out = parse_response(body).expect("valid body");
        assert_eq!(out.text, "Hallo, Welt");
        assert_eq!(out.lang.as_deref(), Some("en"));
    }

    #[test]
    fn rejects_non_json_body() {
        let err = parse_response("<html>blocked</html>").unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_body_without_translation() {
        let err = parse_response(r#"{"sentences":[],"src":"en"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::MalformedResponse("empty translation".to_owned())
        );
    }

    #[tokio::test]
    #[ignore = "hits the live endpoint"]
    async fn translate_known() {
        let trans = GoogleTranslator::new();
        let out = trans
            .translate("Hello World", Some("en"), "de")
            .await
            .expect("Failed to translate");
        assert_eq!(out.text, "Hallo Welt");
    }

    #[tokio::test]
    #[ignore = "hits the live endpoint"]
    async fn translate_unknown() {
        let trans = GoogleTranslator::new();
        let out = trans
            .translate("Hello World", None, "de")
            .await
            .expect("Failed to translate");
        assert_eq!(out.lang.as_deref(), Some("en"));
    }
}
