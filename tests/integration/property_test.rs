//! Integration tests for the property catalog and health endpoints.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_list_properties_ordered_by_name() {
    let app = helpers::TestApp::new().await;
    app.create_property("Willow Creek").await;
    app.create_property("Ash Grove").await;
    app.create_property("Maple Terrace").await;

    let response = app.get("/properties").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["success"], true);
    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|p| p["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Ash Grove", "Maple Terrace", "Willow Creek"]);
}

#[tokio::test]
async fn test_cover_for_small_gallery_is_first_photo() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Tiny Home").await;
    app.add_photo(property.id, "one.jpg", "image/jpeg", b"1").await;
    app.add_photo(property.id, "two.jpg", "image/jpeg", b"2").await;

    let body = app.get(&format!("/properties/{}", property.id)).await.json();
    let data = &body["data"];

    assert_eq!(data["photo_count"], 2);
    assert_eq!(data["has_cover_photo"], false);
    assert_eq!(data["cover_photo_position"], 1);
    assert_eq!(data["cover_photo"]["filename"], "one.jpg");
    assert_eq!(
        data["cover_photo"]["url"],
        format!("/photos/{}/one.jpg", property.id)
    );
}

#[tokio::test]
async fn test_cover_for_full_gallery_is_third_photo() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Grand Estate").await;
    for name in ["a.jpg", "b.jpg", "c.jpg", "d.jpg"] {
        app.add_photo(property.id, name, "image/jpeg", b"x").await;
    }

    let body = app.get(&format!("/properties/{}", property.id)).await.json();
    let data = &body["data"];

    assert_eq!(data["has_cover_photo"], true);
    assert_eq!(data["cover_photo_position"], 3);
    assert_eq!(data["cover_photo"]["filename"], "c.jpg");

    let photos = data["photos"].as_array().expect("photos");
    let positions: Vec<i64> = photos
        .iter()
        .map(|p| p["position"].as_i64().expect("position"))
        .collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);
    let covers: Vec<bool> = photos
        .iter()
        .map(|p| p["is_cover"].as_bool().expect("is_cover"))
        .collect();
    assert_eq!(covers, vec![false, false, true, false]);
}

#[tokio::test]
async fn test_property_without_photos_has_no_cover() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Empty Lot").await;

    let body = app.get(&format!("/properties/{}", property.id)).await.json();

    assert_eq!(body["data"]["photo_count"], 0);
    assert!(body["data"]["cover_photo"].is_null());
}

#[tokio::test]
async fn test_unknown_or_malformed_property_is_404_json() {
    let app = helpers::TestApp::new().await;

    for path in ["/properties/987654", "/properties/abc"] {
        let response = app.get(path).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(response.json()["error"], "NOT_FOUND", "{path}");
    }
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = helpers::TestApp::new().await;

    let up = app.get("/up").await;
    assert_eq!(up.status, StatusCode::OK);
    assert_eq!(up.json()["data"]["status"], "ok");

    let detailed = app.get("/up/detailed").await;
    assert_eq!(detailed.status, StatusCode::OK);
    let body = detailed.json();
    assert_eq!(body["data"]["database"]["provider"], "memory");
    assert_eq!(body["data"]["storage"]["healthy"], true);
}

#[tokio::test]
async fn test_detailed_health_reports_catalog_outage() {
    let app = helpers::TestApp::new().await;
    app.store.set_offline(true);

    let response = app.get("/up/detailed").await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json();
    assert_eq!(body["data"]["status"], "degraded");
    assert_eq!(body["data"]["database"]["healthy"], false);
}
