use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tempfile::TempDir;
use vocabdrill::domain::Level;
use vocabdrill::infrastructure::{AiSettings, OpenAiClient};

/// Temporary data directory holding level word files
#[allow(dead_code)]
pub struct TestDataDir {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestDataDir {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().to_path_buf();
        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Write raw file content for a level
    pub fn write_level(&self, level: Level, content: &str) -> Result<PathBuf> {
        let path = self.path.join(format!("{}.json", level.file_stem()));
        std::fs::write(&path, content).context("Failed to write word file")?;
        Ok(path)
    }

    /// Directory of the word lists shipped with the crate
    pub fn bundled() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }
}

/// Basic-variant records (no type, no gender) named wort0..wortN
#[allow(dead_code)]
pub fn basic_words_json(count: usize) -> String {
    let records: Vec<String> = (0..count)
        .map(|i| {
            format!(r#"{{"word":"wort{i}","meaning":"word {i}","example":"Das ist Wort {i}."}}"#)
        })
        .collect();
    format!("[{}]", records.join(","))
}

/// One-shot HTTP server answering a single request with a canned response
#[allow(dead_code)]
pub struct StubServer {
    pub url: String,
    handle: Option<JoinHandle<String>>,
}

#[allow(dead_code)]
impl StubServer {
    pub fn respond_once(status: u16, body: &str) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").context("Failed to bind stub server")?;
        let addr = listener.local_addr()?;
        let body = body.to_string();

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("stub server accept");
            let request = read_request(&stream);
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason_phrase(status),
                body.len(),
                body
            );
            (&stream)
                .write_all(response.as_bytes())
                .expect("stub server write");
            request
        });

        Ok(Self {
            url: format!("http://{}/v1/chat/completions", addr),
            handle: Some(handle),
        })
    }

    /// Accept one connection and never answer it
    pub fn silent() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").context("Failed to bind stub server")?;
        let addr = listener.local_addr()?;

        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                let _ = read_request(&stream);
                thread::sleep(Duration::from_secs(5));
            }
        });

        Ok(Self {
            url: format!("http://{}/v1/chat/completions", addr),
            handle: None,
        })
    }

    /// Raw request text (headers and body) the server received
    pub fn received_request(mut self) -> String {
        self.handle
            .take()
            .expect("silent stub records no request")
            .join()
            .expect("stub server thread panicked")
    }
}

fn read_request(stream: &TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut head = String::new();
    let mut content_length = 0;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
        head.push_str(&line);
        if line == "\r\n" {
            break;
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).expect("stub server read body");
    head + &String::from_utf8_lossy(&body)
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

/// Client pointed at `url`, bypassing any proxy from the environment
#[allow(dead_code)]
pub fn client_for(url: &str, api_key: Option<&str>, timeout: Duration) -> Result<OpenAiClient> {
    let settings = AiSettings {
        api_key: api_key.map(str::to_string),
        model: "gpt-4o-mini".to_string(),
        endpoint: url.to_string(),
        timeout,
    };
    let http = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()?;
    Ok(OpenAiClient::with_http_client(settings, http))
}

/// Chat-completions envelope wrapping `content` as the first choice
#[allow(dead_code)]
pub fn completion_envelope(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}
