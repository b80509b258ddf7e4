//! End-to-end HTTP tests over a real socket

use std::sync::Arc;

use sentimeter::lexicon::Lexicon;
use sentimeter::scoring::SentimentScorer;
use sentimeter::server;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn request(addr: std::net::SocketAddr, raw: String) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

fn post(path: &str, body: &str) -> String {
    format!(
        "POST {path} HTTP/1.1\r\n\
         Host: localhost\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n\
         {body}",
        body.len()
    )
}

fn get(path: &str) -> String {
    format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
}

fn json_body(response: &str) -> serde_json::Value {
    let body = response.split("\r\n\r\n").nth(1).unwrap_or_default();
    serde_json::from_str(body).unwrap_or_else(|e| panic!("bad body ({e}): {response}"))
}

#[tokio::test]
async fn test_serves_until_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let scorer = SentimentScorer::new(Arc::new(Lexicon::bundled().unwrap()));

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server::serve_on(listener, scorer, async {
        rx.await.ok();
    }));

    let response = request(addr, post("/analyze", r#"{"feedback":"The food was great!"}"#)).await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    let json = json_body(&response);
    assert_eq!(json["sentiment"], "Positive");
    assert_eq!(json["text"], "The food was great!");

    let response = request(addr, post("/analyze", r#"{"feedback":"  "}"#)).await;
    assert!(response.starts_with("HTTP/1.1 400"), "{response}");
    assert_eq!(json_body(&response)["error"], "No feedback provided");

    let response = request(addr, post("/analyze", "{not json")).await;
    assert!(response.starts_with("HTTP/1.1 400"), "{response}");
    assert_eq!(json_body(&response)["error"], "Malformed payload");

    let response = request(addr, get("/health")).await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert_eq!(json_body(&response)["status"], "ok");

    tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
}
