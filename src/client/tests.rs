use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use serde_json::json;

use super::*;

#[test]
fn qualify_joins_record_and_zone_names() {
    assert_eq!(qualify("www", "example.com."), "www.example.com.");
    assert_eq!(qualify("a.b", "example.com."), "a.b.example.com.");
    // Empty record name means the apex: the zone name, unchanged.
    assert_eq!(qualify("", "example.com."), "example.com.");
}

#[test]
fn decode_json_error_body_is_data() {
    let decoded = decode_body(StatusCode::NOT_FOUND, r#"{"error":"Not Found"}"#).unwrap();
    assert_eq!(decoded, json!({"error": "Not Found"}));
}

#[test]
fn decode_non_json_error_body_is_status_error() {
    let err = decode_body(StatusCode::INTERNAL_SERVER_ERROR, "it broke").unwrap_err();
    match err {
        ClientError::PowerDns(err) => {
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.body(), "it broke");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn decode_empty_success_body_is_null() {
    assert_eq!(
        decode_body(StatusCode::NO_CONTENT, "").unwrap(),
        JsonValue::Null
    );
}

#[test]
fn take_rrsets_passes_the_field_through() {
    let zone = json!({
        "name": "example.com.",
        "rrsets": [{"name": "example.com.", "type": "NS"}],
    });
    assert_eq!(
        take_rrsets(zone).unwrap(),
        json!([{"name": "example.com.", "type": "NS"}])
    );
}

#[test]
fn take_rrsets_surfaces_the_missing_field() {
    let err = take_rrsets(json!({"name": "example.com."})).unwrap_err();
    assert!(matches!(err, ClientError::MissingField(field) if field == "rrsets"));
}

/// Serves exactly one canned HTTP response on a loopback port and returns
/// the endpoint to reach it, plus a handle yielding the raw request text.
fn serve_one(
    status_line: &'static str,
    body: &'static str,
) -> (Url, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}/api/v1/").parse().unwrap(), handle)
}

#[test]
fn json_error_bodies_come_back_as_data() {
    let (endpoint, server) = serve_one("404 Not Found", r#"{"error":"Not Found"}"#);
    let client = Client::builder()
        .endpoint(&endpoint)
        .api_key("secret")
        .build()
        .unwrap();

    let decoded = client.zone("localhost", "missing.example.com.").unwrap();
    assert_eq!(decoded, json!({"error": "Not Found"}));

    let request = server.join().unwrap();
    assert!(
        request.starts_with("GET /api/v1/servers/localhost/zones/missing.example.com. HTTP/1.1"),
        "unexpected request line: {request}"
    );
    assert!(request.contains("x-api-key: secret"));
}

#[test]
fn missing_api_key_sends_no_header() {
    let (endpoint, server) = serve_one("200 OK", "[]");
    let client = Client::builder().endpoint(&endpoint).build().unwrap();

    assert_eq!(client.servers().unwrap(), json!([]));

    let request = server.join().unwrap().to_lowercase();
    assert!(!request.contains("x-api-key"));
}
