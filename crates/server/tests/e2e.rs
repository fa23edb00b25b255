use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use server::startup::build_app;

struct TestApp {
    base_url: String,
}

async fn start_server(cfg: AppConfig) -> anyhow::Result<TestApp> {
    let app: Router = build_app(&cfg)?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_root_and_health() -> anyhow::Result<()> {
    let app = start_server(AppConfig::default()).await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!({"Hello": "World"}));

    let res = c.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_item_crud_over_http() -> anyhow::Result<()> {
    let app = start_server(AppConfig::default()).await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/items/", app.base_url))
        .json(&json!({"name": "pen"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.text().await?;
    assert_eq!(body, r#"{"item_id":1,"item":{"name":"pen"}}"#);

    let res = c.put(format!("{}/items/1", app.base_url))
        .json(&json!({"name": "pencil"}))
        .send().await?;
    assert_eq!(res.text().await?, r#"{"item_id":1,"updated_item":{"name":"pencil"}}"#);

    let res = c.delete(format!("{}/items/1", app.base_url)).send().await?;
    assert_eq!(res.text().await?, r#"{"message":"Item deleted","item_id":1}"#);

    let res = c.get(format!("{}/items/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, r#"{"message":"Item not found"}"#);
    Ok(())
}

#[tokio::test]
async fn e2e_not_found_as_404_when_configured() -> anyhow::Result<()> {
    let mut cfg = AppConfig::default();
    cfg.server.not_found_status = 404;
    let app = start_server(cfg).await?;

    let res = reqwest::get(format!("{}/items/7", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<serde_json::Value>().await?, json!({"message": "Item not found"}));
    Ok(())
}
