#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tiny_http::{Header, Response, Server};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    /// Decoded `application/x-www-form-urlencoded` fields.
    pub fn form(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.body.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub fn form_field(&self, name: &str) -> Option<String> {
        self.form()
            .into_iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }
}

/// A local HTTP server answering a fixed sequence of responses, then stopping.
pub struct TestServer {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Waits until every canned response was served.
    pub fn finish(mut self) -> Vec<RecordedRequest> {
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
        self.requests.lock().unwrap().clone()
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn header_value(request: &tiny_http::Request, name: &'static str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(name))
        .map(|h| h.value.as_str().to_string())
}

pub fn serve(responses: Vec<(u16, &'static str)>) -> TestServer {
    let server = Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    let handle = std::thread::spawn(move || {
        for (status, body) in responses {
            let Ok(mut request) = server.recv() else {
                break;
            };
            let mut content = String::new();
            let _ = request.as_reader().read_to_string(&mut content);
            recorded.lock().unwrap().push(RecordedRequest {
                method: request.method().to_string(),
                url: request.url().to_string(),
                content_type: header_value(&request, "Content-Type"),
                accept: header_value(&request, "Accept"),
                body: content,
            });

            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    "Content-Type: application/json"
                        .parse::<Header>()
                        .unwrap(),
                );
            let _ = request.respond(response);
        }
    });

    TestServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
        handle: Some(handle),
    }
}

/// A base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
