//! Static file server for the landing page
//!
//! Serves the Leptos WASM bundle from the dist/ directory on port 8080,
//! falling back to index.html for client-side routes.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

const BIND_ADDR: &str = "127.0.0.1:8080";
const DIST_DIR: &str = "dist";

fn main() {
    let listener = TcpListener::bind(BIND_ADDR).expect("failed to bind landing server port");

    println!("Landing page server running at http://{BIND_ADDR}");
    println!("Serving from {DIST_DIR}/");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {e}"),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = full_path
        .split_once('?')
        .map(|(p, _)| p)
        .unwrap_or(full_path);

    let file_path = resolve_path(path);
    let (status, body, mime) = match fs::read(&file_path) {
        Ok(contents) => ("200 OK", contents, content_type(&file_path)),
        // Unknown paths fall back to the SPA shell.
        Err(_) => match fs::read(Path::new(DIST_DIR).join("index.html")) {
            Ok(contents) => ("200 OK", contents, "text/html; charset=utf-8"),
            Err(_) => {
                eprintln!("File not found: {}", file_path.display());
                (
                    "404 NOT FOUND",
                    b"<!DOCTYPE html><html><body><h1>File not found</h1></body></html>".to_vec(),
                    "text/html",
                )
            }
        },
    };

    let header = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {mime}\r\nContent-Length: {}\r\n\r\n",
        body.len()
    );

    if let Err(e) = stream.write_all(header.as_bytes()) {
        eprintln!("Failed to write headers: {e}");
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {e}");
    }
    let _ = stream.flush();
}

/// Map a request path into dist/; the root and directories resolve to the
/// SPA shell.
fn resolve_path(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return Path::new(DIST_DIR).join("index.html");
    }
    let candidate = Path::new(DIST_DIR).join(path.strip_prefix('/').unwrap_or(path));
    if candidate.is_dir() {
        Path::new(DIST_DIR).join("index.html")
    } else {
        candidate
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type(Path::new("dist/index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("dist/app.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("dist/pkg/app.js")), "application/javascript");
        assert_eq!(content_type(Path::new("dist/logo")), "application/octet-stream");
    }

    #[test]
    fn test_resolve_path_root_serves_index() {
        assert_eq!(resolve_path("/"), Path::new("dist").join("index.html"));
        assert_eq!(resolve_path(""), Path::new("dist").join("index.html"));
    }

    #[test]
    fn test_resolve_path_strips_leading_slash() {
        assert_eq!(resolve_path("/pkg/app.js"), Path::new("dist").join("pkg/app.js"));
    }
}
