use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde_json::Value as JsonValue;

use super::model::SpectraResponse;
use crate::config::Config;

// ---------------------------------------------------------------------------
// Spectra source abstraction
// ---------------------------------------------------------------------------

/// Anything that can list the spectra of a source.
/// [`ApiClient`] talks to the service; tests use in-memory fakes.
pub trait SpectraSource {
    fn fetch_spectra(&self, object_id: &str) -> Result<SpectraResponse>;
}

/// `{base}/api/sources/{id}/spectra`, tolerant of a trailing slash on `base`.
pub fn spectra_endpoint(base_url: &str, object_id: &str) -> String {
    format!(
        "{}/api/sources/{object_id}/spectra",
        base_url.trim_end_matches('/')
    )
}

// ---------------------------------------------------------------------------
// HTTP client
// ---------------------------------------------------------------------------

/// Blocking SkyPortal API client carrying the base URL and bearer token.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Issue one authorised request and return the JSON body.
    ///
    /// Non-2xx statuses are not errors here: the service reports failures
    /// in the body (`"status": "error"`), which the caller inspects.
    pub fn request(
        &self,
        method: Method,
        endpoint: &str,
        data: Option<&JsonValue>,
    ) -> Result<JsonValue> {
        let mut req = self
            .http
            .request(method.clone(), endpoint)
            .header(AUTHORIZATION, format!("token {}", self.token));
        if let Some(body) = data {
            req = req.json(body);
        }

        let response = req
            .send()
            .with_context(|| format!("{method} {endpoint}"))?;
        log::debug!("{method} {endpoint} -> {}", response.status());

        response
            .json::<JsonValue>()
            .with_context(|| format!("parsing JSON response from {endpoint}"))
    }
}

impl SpectraSource for ApiClient {
    fn fetch_spectra(&self, object_id: &str) -> Result<SpectraResponse> {
        let url = spectra_endpoint(&self.base_url, object_id);
        let body = self.request(Method::GET, &url, None)?;
        serde_json::from_value(body)
            .with_context(|| format!("unexpected spectra response for {object_id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Accept one connection, answer it with `status`/`body`, and hand back
    /// the raw request (head plus body) that was received.
    fn serve_once(status: &str, content_type: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request = String::new();
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
                request.push_str(&line);
            }
            let mut payload = vec![0u8; content_length];
            reader.read_exact(&mut payload).unwrap();
            request.push_str(&String::from_utf8(payload).unwrap());

            stream.write_all(response.as_bytes()).unwrap();
            request
        });

        (base_url, handle)
    }

    fn local_client(base_url: &str) -> ApiClient {
        ApiClient {
            http: Client::builder().no_proxy().build().unwrap(),
            base_url: base_url.to_string(),
            token: "secret-token".to_string(),
        }
    }

    #[test]
    fn test_spectra_endpoint_with_trailing_slash() {
        assert_eq!(
            spectra_endpoint("https://fritz.science/", "ZTF21abc"),
            "https://fritz.science/api/sources/ZTF21abc/spectra"
        );
    }

    #[test]
    fn test_spectra_endpoint_without_trailing_slash() {
        assert_eq!(
            spectra_endpoint("http://localhost:5000", "ZTF18aaaaaaa"),
            "http://localhost:5000/api/sources/ZTF18aaaaaaa/spectra"
        );
    }

    #[test]
    fn test_client_builds_without_timeout() {
        let cfg = Config::new(
            "https://fritz.science/".into(),
            Some("secret".into()),
            "fritz_spectra".into(),
            false,
            None,
        )
        .unwrap();
        assert!(ApiClient::new(&cfg).is_ok());
    }

    #[test]
    fn test_fetch_sends_get_with_token_header() {
        let body = r#"{"status": "success", "data": {"spectra": [{
            "instrument_name": "ALFOSC",
            "observed_at": "2021-05-01T03:00:00",
            "wavelengths": [4000.0, 4001.0],
            "fluxes": [1.0, 0.98]
        }]}}"#;
        let (base_url, server) = serve_once("200 OK", "application/json", body);

        let resp = local_client(&base_url).fetch_spectra("ZTF21abc").unwrap();
        let request = server.join().unwrap();

        assert!(
            request.starts_with("GET /api/sources/ZTF21abc/spectra HTTP/1.1\r\n"),
            "unexpected request line: {request}"
        );
        assert!(request
            .to_ascii_lowercase()
            .contains("authorization: token secret-token\r\n"));
        assert!(!resp.is_error());
        assert_eq!(resp.spectra()[0].wavelengths, vec![4000.0, 4001.0]);
    }

    #[test]
    fn test_request_sends_json_payload() {
        let (base_url, server) = serve_once("200 OK", "application/json", r#"{"status": "success"}"#);
        let endpoint = format!("{base_url}api/sources");
        let payload = serde_json::json!({"id": "ZTF21abc"});

        let body = local_client(&base_url)
            .request(Method::POST, &endpoint, Some(&payload))
            .unwrap();
        let request = server.join().unwrap();

        assert!(request.starts_with("POST /api/sources HTTP/1.1\r\n"));
        assert!(request.ends_with(r#"{"id":"ZTF21abc"}"#));
        assert_eq!(body["status"], "success");
    }

    #[test]
    fn test_error_status_with_json_body_is_not_an_error() {
        let (base_url, server) = serve_once(
            "400 Bad Request",
            "application/json",
            r#"{"status": "error", "message": "Invalid source ID.", "data": {}}"#,
        );

        let resp = local_client(&base_url).fetch_spectra("bogus").unwrap();
        server.join().unwrap();

        assert!(resp.is_error());
        assert_eq!(resp.message.as_deref(), Some("Invalid source ID."));
    }

    #[test]
    fn test_not_found_json_body_becomes_service_error_outcome() {
        use crate::pipeline::{Outcome, Pipeline};
        use crate::preview::NoPreview;

        let (base_url, server) = serve_once(
            "404 Not Found",
            "application/json",
            r#"{"status": "error", "message": "Source not found"}"#,
        );
        let client = local_client(&base_url);
        let dir = tempfile::tempdir().unwrap();
        let pipeline = Pipeline {
            source: &client,
            preview: &NoPreview,
            output_dir: dir.path(),
        };

        let mut out = Vec::new();
        let outcome = pipeline
            .process_object("ZTF00none", &mut std::io::Cursor::new("0\n"), &mut out)
            .unwrap();
        server.join().unwrap();

        assert_eq!(outcome, Outcome::ServiceError("Source not found".into()));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_non_json_body_is_an_error() {
        let (base_url, server) = serve_once(
            "502 Bad Gateway",
            "text/html",
            "<html><body>Bad Gateway</body></html>",
        );

        let err = local_client(&base_url).fetch_spectra("ZTF21abc").unwrap_err();
        server.join().unwrap();

        assert!(format!("{err:#}").contains("parsing JSON response"));
    }
}
