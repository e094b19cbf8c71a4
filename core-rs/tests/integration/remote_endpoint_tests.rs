//! Remote classification against a local stub SPARQL service.
//!
//! The stub speaks just enough HTTP/1.1 to serve the SPARQL protocol: it
//! drains each POSTed query and answers with a canned results document, so
//! the whole endpoint code path runs without a real triple store.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use dlx_core::{CheckerOptions, Construct, DlxError, ExpressivityChecker, SparqlEndpointSource};

const TRUE_BODY: &str = "{\"head\":{},\"boolean\":true}";
const FALSE_BODY: &str = "{\"head\":{},\"boolean\":false}";
const NO_BOOLEAN_BODY: &str = "{\"head\":{\"vars\":[]}}";

/// Serves the same canned response to every request, across connections and
/// keep-alive reuse, until the test drops.
async fn spawn_stub_endpoint(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(serve_connection(stream, status_line, body));
        }
    });

    format!("http://{}/sparql", addr)
}

async fn serve_connection(mut stream: TcpStream, status_line: &'static str, body: &'static str) {
    let mut buffer: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        // One full request: headers, then content-length bytes of body.
        let header_end = loop {
            if let Some(pos) = find_subslice(&buffer, b"\r\n\r\n") {
                break pos + 4;
            }
            match stream.read(&mut chunk).await {
                Ok(0) | Err(_) => return,
                Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            }
        };

        let headers = String::from_utf8_lossy(&buffer[..header_end]).to_ascii_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        while buffer.len() < header_end + content_length {
            match stream.read(&mut chunk).await {
                Ok(0) | Err(_) => return,
                Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            }
        }
        buffer.drain(..header_end + content_length);

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/sparql-results+json\r\ncontent-length: {}\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        if stream.write_all(response.as_bytes()).await.is_err() {
            return;
        }
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

#[tokio::test]
async fn all_true_endpoint_classifies_as_the_full_alphabet() {
    let endpoint = spawn_stub_endpoint("200 OK", TRUE_BODY).await;
    let source = SparqlEndpointSource::new(&endpoint, None).unwrap();

    let result = ExpressivityChecker::new(source).classify().await.unwrap();

    // Every predicate answered true, so the canonical set is the trimmed
    // full alphabet; the merge rule keeps reflexivity/chains out.
    assert!(result.has(Construct::RoleComplex));
    assert!(result.has(Construct::RoleInverse));
    assert!(!result.has(Construct::RoleReflexivityChains));
    assert_eq!(result.description_logic_name(), "ALECUROIQ(D)");

    let minimal: Vec<&str> = result
        .expressible_in_languages()
        .iter()
        .map(|l| l.name())
        .collect();
    assert_eq!(minimal, vec!["SROIQ(D)"]);
}

#[tokio::test]
async fn all_false_endpoint_classifies_as_empty() {
    let endpoint = spawn_stub_endpoint("200 OK", FALSE_BODY).await;
    let source = SparqlEndpointSource::new(&endpoint, None).unwrap();

    let result = ExpressivityChecker::new(source).classify().await.unwrap();

    assert!(result.constructs().is_empty());
    assert_eq!(result.description_logic_name(), "");
}

#[tokio::test]
async fn endpoint_works_with_a_named_graph() {
    let endpoint = spawn_stub_endpoint("200 OK", FALSE_BODY).await;
    let source =
        SparqlEndpointSource::new(&endpoint, Some("http://example.com/graph".to_string())).unwrap();

    let result = ExpressivityChecker::new(source).classify().await.unwrap();
    assert!(result.constructs().is_empty());
}

#[tokio::test]
async fn client_error_surfaces_as_query_error() {
    let endpoint = spawn_stub_endpoint("400 Bad Request", "syntax error").await;
    let source = SparqlEndpointSource::new(&endpoint, None).unwrap();

    let err = ExpressivityChecker::new(source).classify().await.unwrap_err();
    match err {
        DlxError::Query(message) => assert!(message.contains("400")),
        other => panic!("expected Query, got {:?}", other),
    }
}

#[tokio::test]
async fn server_error_surfaces_as_connectivity_error() {
    let endpoint = spawn_stub_endpoint("503 Service Unavailable", "down").await;
    let source = SparqlEndpointSource::new(&endpoint, None).unwrap();

    let err = ExpressivityChecker::new(source).classify().await.unwrap_err();
    assert!(err.is_retryable(), "expected Connectivity, got {:?}", err);
}

#[tokio::test]
async fn results_without_a_boolean_are_rejected() {
    let endpoint = spawn_stub_endpoint("200 OK", NO_BOOLEAN_BODY).await;
    let source = SparqlEndpointSource::new(&endpoint, None).unwrap();

    let err = ExpressivityChecker::new(source).classify().await.unwrap_err();
    match err {
        DlxError::Query(message) => assert!(message.contains("boolean")),
        other => panic!("expected Query, got {:?}", other),
    }
}

#[tokio::test]
async fn silent_endpoint_times_out_as_connectivity_error() {
    // Accepts connections and then never answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            open.push(stream); // keep the socket alive, say nothing
        }
    });

    let source = SparqlEndpointSource::with_timeout(
        &format!("http://{}/sparql", addr),
        None,
        Duration::from_millis(250),
    )
    .unwrap();

    let err = ExpressivityChecker::new(source)
        .with_options(CheckerOptions { max_concurrent: 2 })
        .classify()
        .await
        .unwrap_err();
    assert!(err.is_retryable(), "expected Connectivity, got {:?}", err);
}
