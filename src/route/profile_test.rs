use poem::{http::StatusCode, test::TestClient};
use serde_json::json;

use crate::{
    core::test_utils::{generate_test_app, test_config},
    factory::profile::ProfileFactory,
    init_openapi_route,
    model::profile::ProfileInput,
    schema::profile::ProfileResponse,
    store::ProfileStore,
};

fn scenario_payload() -> serde_json::Value {
    json!({
        "name": "X",
        "title": "Y",
        "location": "Z",
        "coordinates": {"lat": 0.0, "lng": 0.0},
        "description": "d",
        "email": "a@b.com",
        "phone": "1",
        "interests": ["x"],
        "bio": "b"
    })
}

#[tokio::test]
async fn test_list_profile_api() -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let test_app = generate_test_app(Some("[]"));
    let profiles = ProfileFactory::new()
        .generate_many(test_app.store.as_ref(), 4, ())
        .await?;
    let app = init_openapi_route(test_app.state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/api/profile").send().await;

    // Expect
    resp.assert_status_is_ok();
    let results: Vec<ProfileResponse> = profiles.into_iter().map(ProfileResponse::from).collect();
    resp.assert_json(&json!(results)).await;
    Ok(())
}

#[tokio::test]
async fn test_search_profile_api() -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let test_app = generate_test_app(None);
    test_app.state.profiles.initialize().await?;
    let app = init_openapi_route(test_app.state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/api/profile").query("search", &"PUNE").send().await;

    // Expect
    resp.assert_status_is_ok();
    let json = resp.json().await;
    let items = json.value().array();
    items.assert_len(1);
    items.get(0).object().get("name").assert_string("Priya Patel");
    Ok(())
}

#[tokio::test]
async fn test_list_profile_api_reports_backend_failure() -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let test_app = generate_test_app(Some("[]"));
    test_app.store.slot().set_simulate_failure(true);
    let app = init_openapi_route(test_app.state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/api/profile").send().await;

    // Expect
    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = resp.json().await;
    json.value()
        .object()
        .get("function")
        .assert_string("list_profile_api");
    Ok(())
}

#[tokio::test]
async fn test_profile_detail_api() -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let test_app = generate_test_app(Some("[]"));
    let mut factory = ProfileFactory::new();
    factory.modified_one(|x, _| ProfileInput {
        education: None,
        ..x.clone()
    });
    let profile = factory.generate_one(test_app.store.as_ref(), ()).await?;
    let app = init_openapi_route(test_app.state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .get("/api/profile/detail")
        .query("id", &profile.id.to_string())
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    let expected = ProfileResponse::from(profile);
    assert_eq!(expected.education, None);
    resp.assert_json(&json!(expected)).await;
    Ok(())
}

#[tokio::test]
async fn test_profile_detail_api_not_found() -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let test_app = generate_test_app(Some("[]"));
    let app = init_openapi_route(test_app.state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .get("/api/profile/detail")
        .query("id", &"nonexistent")
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::NOT_FOUND);
    resp.assert_json(&json!({
        "message": "profile with id = nonexistent not found"
    }))
    .await;
    Ok(())
}

#[tokio::test]
async fn test_create_profile_api() -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let test_app = generate_test_app(Some("[]"));
    let app = init_openapi_route(test_app.state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .post("/api/profile")
        .body_json(&scenario_payload())
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::CREATED);
    let json = resp.json().await;
    let body = json.value().object();
    let id = body.get_opt("id");
    assert!(id.is_some());
    let id: String = id.unwrap().deserialize();
    body.get("image").assert_string("");
    body.get("education").assert_null();
    body.get("createdAt").assert_not_null();

    let stored = test_app.store.get_by_id(&id).await?;
    assert_eq!(stored.data.name, "X");
    assert_eq!(stored.data.interests, vec!["x".to_string()]);
    assert!(stored.created_at.is_some());
    Ok(())
}

#[tokio::test]
async fn test_create_profile_api_rejects_invalid_payload() -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let test_app = generate_test_app(Some("[]"));
    let app = init_openapi_route(test_app.state.clone(), &config);
    let cli = TestClient::new(app);
    let mut payload = scenario_payload();
    payload["email"] = json!("not-an-email");

    // When
    let resp = cli.post("/api/profile").body_json(&payload).send().await;

    // Expect
    resp.assert_status(StatusCode::BAD_REQUEST);
    resp.assert_json(&json!({"message": "email is invalid"}))
        .await;
    assert!(test_app.store.get_all().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_update_profile_api() -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let test_app = generate_test_app(Some("[]"));
    let profile = ProfileFactory::new()
        .generate_one(test_app.store.as_ref(), ())
        .await?;
    let app = init_openapi_route(test_app.state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .put("/api/profile")
        .query("id", &profile.id.to_string())
        .body_json(&json!({"title": "Staff Engineer"}))
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    let stored = test_app.store.get_by_id(&profile.id.to_string()).await?;
    let mut expected = profile.data.clone();
    expected.title = "Staff Engineer".to_string();
    assert_eq!(stored.data, expected);
    assert_eq!(stored.created_at, profile.created_at);
    resp.assert_json(&json!(ProfileResponse::from(stored))).await;
    Ok(())
}

#[tokio::test]
async fn test_update_profile_api_not_found() -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let test_app = generate_test_app(Some("[]"));
    let app = init_openapi_route(test_app.state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .put("/api/profile")
        .query("id", &"12345")
        .body_json(&json!({"title": "Staff Engineer"}))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_update_profile_api_rejects_empty_interests() -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let test_app = generate_test_app(Some("[]"));
    let profile = ProfileFactory::new()
        .generate_one(test_app.store.as_ref(), ())
        .await?;
    let app = init_openapi_route(test_app.state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .put("/api/profile")
        .query("id", &profile.id.to_string())
        .body_json(&json!({"interests": []}))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::BAD_REQUEST);
    let stored = test_app.store.get_by_id(&profile.id.to_string()).await?;
    assert_eq!(stored, profile);
    Ok(())
}

#[tokio::test]
async fn test_delete_profile_api_twice() -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let test_app = generate_test_app(Some("[]"));
    let profile = ProfileFactory::new()
        .generate_one(test_app.store.as_ref(), ())
        .await?;
    let app = init_openapi_route(test_app.state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let first = cli
        .delete("/api/profile")
        .query("id", &profile.id.to_string())
        .send()
        .await;
    let second = cli
        .delete("/api/profile")
        .query("id", &profile.id.to_string())
        .send()
        .await;

    // Expect
    first.assert_status(StatusCode::NO_CONTENT);
    second.assert_status(StatusCode::NO_CONTENT);
    assert!(test_app.store.get_all().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_initialize_profile_api_seeds_once() -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let test_app = generate_test_app(None);
    let app = init_openapi_route(test_app.state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let first = cli.post("/api/profile/initialize").send().await;
    let second = cli.post("/api/profile/initialize").send().await;

    // Expect
    first.assert_status_is_ok();
    second.assert_status_is_ok();
    let json = second.json().await;
    let items = json.value().array();
    items.assert_len(5);
    items.get(0).object().get("id").assert_string("1");
    items.get(4).object().get("image").assert_string("");
    items.get(4).object().get("createdAt").assert_null();
    assert_eq!(test_app.store.get_all().await?.len(), 5);
    Ok(())
}
