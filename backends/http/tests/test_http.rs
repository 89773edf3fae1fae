use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use transport::{Transport, TransportError};
use zabbix_http::HttpTransport;

/// Canned HTTP server: answers the n-th connection with the n-th response
/// and records every request body it receives.
struct CannedServer {
    url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl CannedServer {
    async fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind local port");
        let url = format!("http://{}/api_jsonrpc.php", listener.local_addr().expect("local addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.expect("accept");
                let request = read_body(&mut socket).await;
                seen.lock().expect("requests lock").push(request);
                let reply = format!(
                    "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                socket.write_all(reply.as_bytes()).await.expect("write reply");
                socket.shutdown().await.ok();
            }
        });

        Self { url, requests }
    }

    fn requests(&self) -> Vec<Value> { self.requests.lock().expect("requests lock").clone() }
}

async fn read_body(socket: &mut tokio::net::TcpStream) -> Value {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(split) = text.find("\r\n\r\n") {
            let content_length = text[..split]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            if buf.len() >= split + 4 + content_length {
                return serde_json::from_slice(&buf[split + 4..split + 4 + content_length])
                    .expect("request body is JSON");
            }
        }
    }
    Value::Null
}

fn ok(result: Value) -> (u16, String) { (200, json!({"jsonrpc": "2.0", "result": result, "id": 1}).to_string()) }

#[tokio::test]
async fn test_login_then_authenticated_call() {
    let server = CannedServer::start(vec![
        ok(json!("0424bd59b807674191e7d77572075f33")),
        ok(json!([{"hostid": "10084"}])),
        ok(json!("2.0.4")),
    ])
    .await;
    let transport = HttpTransport::new(&server.url);

    let token = transport.login("Admin", "zabbix").await.expect("login succeeds");
    assert_eq!(token, "0424bd59b807674191e7d77572075f33");
    let hosts = transport.call("host.get", json!({"output": "extend"})).await.expect("host.get");
    assert_eq!(hosts, json!([{"hostid": "10084"}]));
    let version = transport.call("apiinfo.version", json!({})).await.expect("version");
    assert_eq!(version, json!("2.0.4"));

    let requests = server.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(
        requests[0],
        json!({
            "jsonrpc": "2.0",
            "method": "user.login",
            "params": {"user": "Admin", "password": "zabbix"},
            "id": 1
        })
    );
    assert_eq!(requests[1]["auth"], json!("0424bd59b807674191e7d77572075f33"));
    assert_eq!(requests[1]["id"], json!(2));
    assert!(requests[2].get("auth").is_none(), "apiinfo.version is sent without auth");
}

#[tokio::test]
async fn test_rpc_error_is_reported() {
    let body = json!({
        "jsonrpc": "2.0",
        "error": {"code": -32602, "message": "Invalid params.", "data": "No permissions to referred object or it does not exist!"},
        "id": 1
    });
    let server = CannedServer::start(vec![(200, body.to_string())]).await;
    let transport = HttpTransport::with_token(&server.url, "abc");

    let err = transport.call("trigger.delete", json!(["13"])).await.expect_err("rpc error");
    assert_eq!(err.rpc_code(), Some(-32602));
    match err {
        TransportError::Rpc(rpc) => {
            assert_eq!(rpc.message, "Invalid params.");
            assert!(rpc.data.starts_with("No permissions"));
        }
        other => panic!("Expected Rpc error, got {:?}", other),
    }
    assert_eq!(server.requests()[0]["params"], json!(["13"]));
}

#[tokio::test]
async fn test_malformed_responses() {
    let server = CannedServer::start(vec![
        (500, "Internal Server Error".to_string()),
        (200, "<html>not json</html>".to_string()),
        (200, json!({"jsonrpc": "2.0", "id": 1}).to_string()),
    ])
    .await;
    let transport = HttpTransport::new(&server.url);

    assert!(matches!(transport.call("host.get", json!({})).await, Err(TransportError::Http(_))));
    assert!(matches!(
        transport.call("host.get", json!({})).await,
        Err(TransportError::Serialization(_))
    ));
    assert!(matches!(
        transport.call("host.get", json!({})).await,
        Err(TransportError::InvalidFormat(_))
    ));
}

#[tokio::test]
async fn test_logout_clears_token() {
    let server = CannedServer::start(vec![ok(json!(true))]).await;
    let transport = HttpTransport::with_token(&server.url, "abc");

    transport.logout().await.expect("logout succeeds");
    assert!(transport.token().is_none());
    assert_eq!(server.requests()[0]["method"], json!("user.logout"));
    assert_eq!(server.requests()[0]["auth"], json!("abc"));
}
