//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body for every path. Answers HEAD with
//! Content-Length and GET with the full body, counting both so tests can
//! assert whether a download actually streamed.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct VideoServerOptions {
    /// Status line for HEAD responses.
    pub head_status: &'static str,
    /// Status line for GET responses.
    pub get_status: &'static str,
}

impl Default for VideoServerOptions {
    fn default() -> Self {
        Self {
            head_status: "200 OK",
            get_status: "200 OK",
        }
    }
}

/// Running server: base URL plus request counters.
#[derive(Debug, Clone)]
pub struct VideoServer {
    pub base_url: String,
    heads: Arc<AtomicUsize>,
    gets: Arc<AtomicUsize>,
}

impl VideoServer {
    /// URL shaped like the platform CDN: `<base>/file/<name>?token=test`.
    pub fn video_url(&self, name: &str) -> String {
        format!("{}/file/{}?token=test", self.base_url, name)
    }

    pub fn heads(&self) -> usize {
        self.heads.load(Ordering::SeqCst)
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body`. Runs until the process exits.
pub fn start(body: Vec<u8>) -> VideoServer {
    start_with_options(body, VideoServerOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: VideoServerOptions) -> VideoServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let heads = Arc::new(AtomicUsize::new(0));
    let gets = Arc::new(AtomicUsize::new(0));
    let server = VideoServer {
        base_url: format!("http://127.0.0.1:{}", port),
        heads: Arc::clone(&heads),
        gets: Arc::clone(&gets),
    };
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let heads = Arc::clone(&heads);
            let gets = Arc::clone(&gets);
            thread::spawn(move || handle(stream, &body, opts, &heads, &gets));
        }
    });
    server
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    opts: VideoServerOptions,
    heads: &AtomicUsize,
    gets: &AtomicUsize,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let method = request.split_whitespace().next().unwrap_or("");

    if method.eq_ignore_ascii_case("HEAD") {
        heads.fetch_add(1, Ordering::SeqCst);
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: video/mp4\r\nConnection: close\r\n\r\n",
            opts.head_status,
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }
    if method.eq_ignore_ascii_case("GET") {
        gets.fetch_add(1, Ordering::SeqCst);
        let payload: &[u8] = if opts.get_status.starts_with('2') {
            body
        } else {
            b"error"
        };
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: video/mp4\r\nConnection: close\r\n\r\n",
            opts.get_status,
            payload.len()
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.write_all(payload);
        return;
    }
    let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nConnection: close\r\n\r\n");
}
