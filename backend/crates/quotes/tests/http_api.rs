use quotes::presentation::dto::QuoteResponse;
use quotes::{InMemoryQuoteRepository, quotes_router};
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port
        let app = quotes_router(InMemoryQuoteRepository::new());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn create(&self, client: &reqwest::Client, author: &str, text: &str) -> QuoteResponse {
        let res = client
            .post(self.url("/quotes"))
            .json(&json!({ "author": author, "text": text }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        res.json().await.unwrap()
    }

    async fn list(&self, client: &reqwest::Client) -> Vec<QuoteResponse> {
        let res = client.get(self.url("/quotes")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        res.json().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn content_type(res: &reqwest::Response) -> String {
    res.headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn create_then_list_returns_quote_with_id_one() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/quotes"))
        .json(&json!({ "author": "Confucius", "text": "Life is simple." }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(content_type(&res), "application/json");
    let created: QuoteResponse = res.json().await.unwrap();
    assert_eq!(created.id.get(), 1);
    assert_eq!(created.author, "Confucius");
    assert_eq!(created.text, "Life is simple.");

    let all = server.list(&client).await;
    assert_eq!(all, vec![created]);
}

#[tokio::test]
async fn list_on_empty_store_is_empty_array() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/quotes")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(content_type(&res), "application/json");
    assert_eq!(res.text().await.unwrap(), "[]");
}

#[tokio::test]
async fn create_accepts_body_without_content_type() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/quotes"))
        .body(r#"{"author":"Plato","quote":"Know thyself."}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: QuoteResponse = res.json().await.unwrap();
    assert_eq!(created.text, "Know thyself.");
}

#[tokio::test]
async fn create_prefers_text_over_quote() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/quotes"))
        .json(&json!({ "author": "Plato", "text": "Know thyself.", "quote": "ignored" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: QuoteResponse = res.json().await.unwrap();
    assert_eq!(created.text, "Know thyself.");
}

#[tokio::test]
async fn create_rejects_malformed_and_empty_payloads() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for body in [
        "",
        "not json",
        r#"{"author":"Plato""#,
        r#"{"author":42,"text":"x"}"#,
        r#"{"author":"","text":"x"}"#,
        r#"{"author":"Plato","text":""}"#,
        r#"{"author":"Plato"}"#,
        "{}",
        "[]",
        r#"["Plato","Know thyself."]"#,
        r#""Know thyself.""#,
    ] {
        let res = client
            .post(server.url("/quotes"))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert!(content_type(&res).starts_with("text/plain"), "body: {body}");
        assert!(!res.text().await.unwrap().is_empty());
    }

    let res = client
        .post(server.url("/quotes"))
        .body(r#"["Plato","Know thyself."]"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "Invalid request body");

    // Rejected creates consumed no ids
    assert!(server.list(&client).await.is_empty());
    let created = server.create(&client, "Plato", "Know thyself.").await;
    assert_eq!(created.id.get(), 1);
}

#[tokio::test]
async fn random_on_empty_store_is_not_found() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/quotes/random")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "No quotes exist");
}

#[tokio::test]
async fn random_returns_a_stored_quote() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    server.create(&client, "Confucius", "Life is simple.").await;
    server.create(&client, "Plato", "Know thyself.").await;
    let all = server.list(&client).await;

    for _ in 0..10 {
        let res = client.get(server.url("/quotes/random")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let picked: QuoteResponse = res.json().await.unwrap();
        assert!(all.contains(&picked));
    }
}

#[tokio::test]
async fn filter_by_author_then_delete() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let first = server.create(&client, "Confucius", "Life is simple.").await;
    let second = server
        .create(
            &client,
            "Plato",
            "The greatest wealth is to live content with little.",
        )
        .await;
    assert_eq!((first.id.get(), second.id.get()), (1, 2));

    let res = client
        .get(server.url("/quotes?author=Plato"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let filtered: Vec<QuoteResponse> = res.json().await.unwrap();
    assert_eq!(filtered, vec![second.clone()]);

    let res = client
        .delete(server.url("/quotes/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.text().await.unwrap().is_empty());

    assert_eq!(server.list(&client).await, vec![second]);
}

#[tokio::test]
async fn filter_by_unknown_author_is_empty_and_empty_author_is_rejected() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    server.create(&client, "Confucius", "Life is simple.").await;

    let res = client
        .get(server.url("/quotes?author=confucius"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let filtered: Vec<QuoteResponse> = res.json().await.unwrap();
    assert!(filtered.is_empty());

    let res = client
        .get(server.url("/quotes?author="))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn repeated_author_filter_uses_first_value() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    server.create(&client, "Confucius", "Life is simple.").await;
    let plato = server.create(&client, "Plato", "Know thyself.").await;

    let res = client
        .get(server.url("/quotes?author=Plato&author=Confucius"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let filtered: Vec<QuoteResponse> = res.json().await.unwrap();
    assert_eq!(filtered, vec![plato]);

    let res = client
        .get(server.url("/quotes?page=2"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let all: Vec<QuoteResponse> = res.json().await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn delete_invalid_and_missing_ids() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    server.create(&client, "Confucius", "Life is simple.").await;

    for (path, expected) in [
        ("/quotes/abc", StatusCode::BAD_REQUEST),
        ("/quotes/1.5", StatusCode::BAD_REQUEST),
        ("/quotes/99", StatusCode::NOT_FOUND),
        ("/quotes/0", StatusCode::NOT_FOUND),
        ("/quotes/-4", StatusCode::NOT_FOUND),
    ] {
        let res = client.delete(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), expected, "path: {path}");
    }

    assert_eq!(server.list(&client).await.len(), 1);

    let res = client.delete(server.url("/quotes/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = client.delete(server.url("/quotes/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn concurrent_creates_get_ids_one_to_n() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let url = server.url("/quotes");
        tasks.push(tokio::spawn(async move {
            let res = client
                .post(url)
                .json(&json!({ "author": "Worker", "text": format!("quote {i}") }))
                .send()
                .await
                .unwrap();
            let created: QuoteResponse = res.json().await.unwrap();
            created.id.get()
        }));
    }

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
}
