//! HEAD probe and response header parsing.

use anyhow::{Context, Result};
use std::str;

use super::CurlTransport;

/// Response metadata from a HEAD request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadResult {
    /// Status of the final response (after redirects).
    pub status: Option<u32>,
    /// Total size in bytes, if `Content-Length` is present.
    pub content_length: Option<u64>,
    pub content_type: Option<String>,
}

/// Performs a HEAD request and returns parsed metadata. Non-2xx is an error.
pub(super) fn probe(transport: &CurlTransport, url: &str) -> Result<HeadResult> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = transport.easy(url)?;
    easy.nobody(true)?; // HEAD request

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform().context("HEAD request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("HEAD {} returned HTTP {}", url, code);
    }

    Ok(parse_headers(&headers))
}

/// Parse collected header lines into a `HeadResult`.
///
/// With redirects libcurl reports every hop's headers; a status line resets
/// what was collected so only the final response counts.
pub(super) fn parse_headers(lines: &[String]) -> HeadResult {
    let mut result = HeadResult::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(status) = parse_status_line(line) {
            result = HeadResult {
                status: Some(status),
                ..HeadResult::default()
            };
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.parse::<u64>() {
                    result.content_length = Some(n);
                }
            } else if name.eq_ignore_ascii_case("content-type") {
                result.content_type = Some(value.to_string());
            }
        }
    }

    result
}

/// `HTTP/1.1 200 OK` → `Some(200)`.
pub(super) fn parse_status_line(line: &str) -> Option<u32> {
    if !line.starts_with("HTTP/") {
        return None;
    }
    line.split_whitespace().nth(1)?.parse().ok()
}
