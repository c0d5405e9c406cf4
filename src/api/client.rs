// src/api/client.rs
use std::time::Instant;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    config::{
        consts::*,
        options::{AppOptions, Endpoints},
    },
    error::ApiError,
    platform::Platform,
};

use super::{types::*, Backend};

/// Blocking HTTP client for both services. Call from worker threads only.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    endpoints: Endpoints,
}

impl HttpBackend {
    pub fn new(options: &AppOptions) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(options.request_timeout)
            .build()?;

        Ok(Self { http, endpoints: options.endpoints.clone() })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl Backend for HttpBackend {
    fn scrape(&self, req: &ScrapeRequest) -> Result<Ack, ApiError> {
        let path = match req.platform() {
            Platform::Youtube => PATH_SCRAPE_YOUTUBE,
            Platform::Reddit => PATH_SCRAPE_REDDIT,
        };
        let url = self.endpoints.scrape_url(path);
        logd!("Scrape: GET {} {:?}", url, req.query_pairs());

        let started = Instant::now();
        let resp = self.http.get(&url).query(&req.query_pairs()).send()?;
        let ack = read_ack(resp)?;

        logf!("Scrape: OK platform={} in {:?}", req.platform(), started.elapsed());
        Ok(ack)
    }

    fn preview(&self, platform: Platform, limit: usize) -> Result<Vec<PreviewRow>, ApiError> {
        let path = match platform {
            Platform::Youtube => PATH_PREVIEW_YOUTUBE,
            Platform::Reddit => PATH_PREVIEW_REDDIT,
        };
        let url = self.endpoints.scrape_url(path);
        logd!("Preview: GET {} limit={}", url, limit);

        let resp = self.http.get(&url).query(&[("limit", limit)]).send()?;
        let rows: Vec<PreviewRow> = read_json(resp)?;

        logf!("Preview: OK platform={} rows={}", platform, rows.len());
        Ok(rows)
    }

    fn delete_artifact(&self, platform: Platform) -> Result<Ack, ApiError> {
        let url = self.endpoints.scrape_url(PATH_DELETE);
        logd!("Delete: DELETE {} platform={}", url, platform);

        let resp = self
            .http
            .delete(&url)
            .query(&[("platform", platform.as_str())])
            .send()?;
        let ack = read_ack(resp)?;

        logf!("Delete: OK platform={}", platform);
        Ok(ack)
    }

    fn analyze(&self, platform: Platform) -> Result<AnalysisBundle, ApiError> {
        let url = self.endpoints.analysis_url(PATH_ANALYZE);
        logd!("Analyze: POST {} platform={}", url, platform);

        let started = Instant::now();
        let resp = self.http.post(&url).json(&AnalyzeBody { platform }).send()?;
        let bundle: AnalysisBundle = read_json(resp)?;

        logf!(
            "Analyze: OK platform={} sentiments={} tfidf={} topics={} nodes={} in {:?}",
            platform,
            bundle.sentiments.len(),
            bundle.tfidf.len(),
            bundle.topics.len(),
            bundle.network.nodes.len(),
            started.elapsed()
        );
        Ok(bundle)
    }
}

/* ---------------- Response handling ---------------- */

/// Non-2xx → `ApiError::Status`, carrying the service's error text if any.
fn check_status(resp: Response) -> Result<String, ApiError> {
    let status = resp.status();
    let text = resp.text()?;

    if status.is_success() {
        return Ok(text);
    }

    let detail = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(ErrorBody::text);
    loge!("HTTP: status={} detail={:?}", status.as_u16(), detail);
    Err(ApiError::Status { status: status.as_u16(), detail })
}

fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let text = check_status(resp)?;
    parse_lenient(&text)
}

/// Acks may come back empty; that's still a success.
fn read_ack(resp: Response) -> Result<Ack, ApiError> {
    let text = check_status(resp)?;
    if text.trim().is_empty() {
        return Ok(Ack::default());
    }
    parse_lenient(&text)
}

/// The services serialize pandas NaN as a bare `NaN` token, which is not
/// JSON. On a parse failure, retry once with those tokens nulled out.
pub(crate) fn parse_lenient<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    match serde_json::from_str(text) {
        Ok(v) => Ok(v),
        Err(first) => {
            let patched = nan_to_null(text);
            if patched == text {
                return Err(ApiError::Decode(first.to_string()));
            }
            logd!("HTTP: retrying parse with NaN → null");
            serde_json::from_str(&patched).map_err(|e| ApiError::Decode(e.to_string()))
        }
    }
}

/// Replace bare `NaN` / `Infinity` / `-Infinity` tokens outside strings.
pub(crate) fn nan_to_null(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_str = false;
    let mut escaped = false;
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if in_str {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_str = false;
            }
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        if ch == '"' {
            in_str = true;
            out.push(ch);
            rest = &rest[1..];
            continue;
        }

        let token = ["-Infinity", "Infinity", "NaN"]
            .into_iter()
            .find(|t| rest.starts_with(t));
        match token {
            Some(t) => {
                out.push_str("null");
                rest = &rest[t.len()..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_tokens_outside_strings_become_null() {
        let raw = r#"[{"comment":"NaN is fine here","reply_count":NaN,"likes":-Infinity}]"#;
        let fixed = nan_to_null(raw);
        assert_eq!(
            fixed,
            r#"[{"comment":"NaN is fine here","reply_count":null,"likes":null}]"#
        );
    }

    #[test]
    fn lenient_parse_reads_pandas_rows() {
        let raw = r#"[{"video_id":"abc","reply_count":NaN}]"#;
        let rows: Vec<PreviewRow> = parse_lenient(raw).unwrap();
        assert_eq!(rows[0].cell("reply_count"), "");
        assert_eq!(rows[0].cell("video_id"), "abc");
    }

    #[test]
    fn escaped_quotes_do_not_end_strings() {
        let raw = r#"{"a":"say \"NaN\"","b":NaN}"#;
        assert_eq!(nan_to_null(raw), r#"{"a":"say \"NaN\"","b":null}"#);
    }
}
