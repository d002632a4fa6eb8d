use armory_server::{build_router, AppState, ServerConfig};
use armory_store::{compute_dataset_info, load_dataset};
use serde_json::{json, Value};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

fn write_entity(root: &Path, kind: &str, dir: &str, body: &Value) {
    let dir_path = root.join(kind).join(dir);
    std::fs::create_dir_all(&dir_path).expect("create entity dir");
    std::fs::write(dir_path.join("en.json"), body.to_string()).expect("write en.json");
}

fn seed_dataset(data_root: &Path) {
    write_entity(
        data_root,
        "characters",
        "yinlin",
        &json!({ "id": "yinlin", "name": "Yinlin", "rarity": 5, "element": "Electro" }),
    );
    write_entity(
        data_root,
        "weapons",
        "verity",
        &json!({ "id": "verity", "name": "Verity", "type": "Rectifier", "rarity": 5 }),
    );
}

struct TestApp {
    base_url: String,
    _data: TempDir,
    _images: TempDir,
}

async fn spawn_app() -> TestApp {
    let data = TempDir::new().expect("data tempdir");
    let images = TempDir::new().expect("images tempdir");
    seed_dataset(data.path());

    let yinlin_images = images.path().join("characters").join("yinlin");
    std::fs::create_dir_all(&yinlin_images).expect("image dir");
    std::fs::write(yinlin_images.join("icon.webp"), b"fake-webp-bytes").expect("icon");
    std::fs::write(yinlin_images.join("notes.txt"), b"not an image").expect("notes");

    let config = ServerConfig {
        bind: String::new(),
        data_root: data.path().to_path_buf(),
        images_root: images.path().to_path_buf(),
        cache_ttl: Duration::from_secs(300),
    };
    let (index, report) = load_dataset(&config.data_root).await.expect("load dataset");
    let info = compute_dataset_info(&config.data_root, &index, &report).await;
    let app = build_router(AppState::new(index, info, config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    TestApp {
        base_url: format!("http://{addr}"),
        _data: data,
        _images: images,
    }
}

#[tokio::test]
async fn healthz_and_meta_respond() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let health: Value = client
        .get(format!("{}/healthz", app.base_url))
        .send()
        .await
        .expect("healthz")
        .json()
        .await
        .expect("healthz json");
    assert_eq!(health, json!({ "ok": true }));

    let meta: Value = client
        .get(format!("{}/v1/meta", app.base_url))
        .send()
        .await
        .expect("meta")
        .json()
        .await
        .expect("meta json");
    assert_eq!(meta["name"], json!("armory"));
    assert_eq!(meta["dataset"]["counts"]["characters"], json!(1));
    assert_eq!(meta["dataset"]["counts"]["weapons"], json!(1));
    assert_eq!(meta["dataset"]["languages"], json!(["en"]));
}

#[tokio::test]
async fn list_queries_filter_and_paginate() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let page: Value = client
        .get(format!(
            "{}/v1/characters?element=Electro&rarity=5",
            app.base_url
        ))
        .send()
        .await
        .expect("list")
        .json()
        .await
        .expect("list json");
    assert_eq!(page["total"], json!(1));
    assert_eq!(page["limit"], json!(50));
    assert_eq!(page["offset"], json!(0));
    assert_eq!(page["items"][0]["id"], json!("yinlin"));

    let empty: Value = client
        .get(format!("{}/v1/characters?rarity=4", app.base_url))
        .send()
        .await
        .expect("empty list")
        .json()
        .await
        .expect("empty json");
    assert_eq!(empty["total"], json!(0));
    assert_eq!(empty["items"], json!([]));

    let weapons: Value = client
        .get(format!("{}/v1/weapons?search=veri", app.base_url))
        .send()
        .await
        .expect("weapons")
        .json()
        .await
        .expect("weapons json");
    assert_eq!(weapons["total"], json!(1));
    assert_eq!(weapons["items"][0]["id"], json!("verity"));

    let clamped: Value = client
        .get(format!("{}/v1/weapons?limit=999&offset=-3", app.base_url))
        .send()
        .await
        .expect("clamped")
        .json()
        .await
        .expect("clamped json");
    assert_eq!(clamped["limit"], json!(200));
    assert_eq!(clamped["offset"], json!(0));
}

#[tokio::test]
async fn detail_lookups_distinguish_found_from_not_found() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let found = client
        .get(format!("{}/v1/characters/yinlin", app.base_url))
        .send()
        .await
        .expect("found");
    assert_eq!(found.status(), 200);
    let body: Value = found.json().await.expect("found json");
    assert_eq!(body["element"], json!("Electro"));

    let missing = client
        .get(format!("{}/v1/characters/unknown", app.base_url))
        .send()
        .await
        .expect("missing");
    assert_eq!(missing.status(), 404);
    let body: Value = missing.json().await.expect("missing json");
    assert_eq!(body["error"], json!("not_found"));
    assert!(body["message"].as_str().expect("message").contains("unknown"));

    let missing_weapon = client
        .get(format!("{}/v1/weapons/unknown", app.base_url))
        .send()
        .await
        .expect("missing weapon");
    assert_eq!(missing_weapon.status(), 404);
}

#[tokio::test]
async fn etag_round_trip_yields_not_modified() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let url = format!("{}/v1/characters", app.base_url);

    let first = client.get(&url).send().await.expect("first");
    assert_eq!(first.status(), 200);
    let etag = first
        .headers()
        .get("etag")
        .and_then(|v| v.to_str().ok())
        .expect("etag header")
        .to_string();
    assert!(etag.starts_with("W/\""), "weak validator: {etag}");
    assert_eq!(
        first
            .headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok()),
        Some("public, max-age=300")
    );

    // Identical bodies produce identical validators.
    let second = client.get(&url).send().await.expect("second");
    assert_eq!(
        second.headers().get("etag").and_then(|v| v.to_str().ok()),
        Some(etag.as_str())
    );

    let conditional = client
        .get(&url)
        .header("if-none-match", &etag)
        .send()
        .await
        .expect("conditional");
    assert_eq!(conditional.status(), 304);
    assert!(conditional.bytes().await.expect("bytes").is_empty());
}

#[tokio::test]
async fn error_responses_carry_no_validator() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let missing = client
        .get(format!("{}/v1/characters/unknown", app.base_url))
        .send()
        .await
        .expect("missing");
    assert_eq!(missing.status(), 404);
    assert!(missing.headers().get("etag").is_none());
}

#[tokio::test]
async fn image_endpoints_list_and_serve_webp_only() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let listing: Value = client
        .get(format!("{}/v1/characters/yinlin/images", app.base_url))
        .send()
        .await
        .expect("listing")
        .json()
        .await
        .expect("listing json");
    assert_eq!(listing["id"], json!("yinlin"));
    assert_eq!(listing["images"][0]["file"], json!("icon.webp"));
    assert_eq!(
        listing["images"][0]["url"],
        json!("/v1/characters/yinlin/images/icon.webp")
    );
    assert_eq!(listing["images"].as_array().expect("images").len(), 1);

    let image = client
        .get(format!(
            "{}/v1/characters/yinlin/images/icon.webp",
            app.base_url
        ))
        .send()
        .await
        .expect("image");
    assert_eq!(image.status(), 200);
    assert_eq!(
        image
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/webp")
    );
    assert_eq!(image.bytes().await.expect("bytes").as_ref(), b"fake-webp-bytes");

    let missing = client
        .get(format!(
            "{}/v1/characters/yinlin/images/absent.webp",
            app.base_url
        ))
        .send()
        .await
        .expect("missing image");
    assert_eq!(missing.status(), 404);

    let unknown_character = client
        .get(format!("{}/v1/characters/unknown/images", app.base_url))
        .send()
        .await
        .expect("unknown character");
    assert_eq!(unknown_character.status(), 404);
}
