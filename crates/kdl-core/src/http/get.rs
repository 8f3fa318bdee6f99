//! Streaming GET: body buffers go straight to the caller's sink.

use anyhow::{Context, Result};
use std::cell::Cell;
use std::str;

use super::head::parse_status_line;
use super::CurlTransport;

pub(super) fn stream_body(
    transport: &CurlTransport,
    url: &str,
    sink: &mut dyn FnMut(&[u8]) -> Result<()>,
) -> Result<u64> {
    let mut easy = transport.easy(url)?;
    if let Some(sz) = transport.options.buffer_size {
        easy.buffer_size(sz)
            .map_err(|e| anyhow::anyhow!("curl: {}", e))?;
    }

    let status: Cell<Option<u32>> = Cell::new(None);
    let mut received: u64 = 0;
    let mut sink_error: Option<anyhow::Error> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            let code = str::from_utf8(data)
                .ok()
                .and_then(|l| parse_status_line(l.trim()));
            if code.is_some() {
                status.set(code);
            }
            true
        })?;
        transfer.write_function(|data| {
            // Bodies of redirects and error pages never reach the sink.
            if !matches!(status.get(), Some(200..=299)) {
                return Ok(0);
            }
            match sink(data) {
                Ok(()) => {
                    received += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    tracing::warn!("download write failed: {:#}", e);
                    sink_error = Some(e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = sink_error {
        return Err(e.context(format!("writing body of {}", url)));
    }
    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }
    performed.context("GET request failed")?;
    Ok(received)
}
