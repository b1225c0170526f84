//! Integration tests for serving photo files.

mod helpers;

use axum::http::StatusCode;

const JPEG_BYTES: &[u8] = b"\xFF\xD8\xFF\xE0fake-jpeg-body";

#[tokio::test]
async fn test_serves_photo_inline() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Harbor View").await;
    app.add_photo(property.id, "front.jpg", "image/jpeg", JPEG_BYTES)
        .await;

    let response = app.get(&format!("/photos/{}/front.jpg", property.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_ref(), JPEG_BYTES);
    assert_eq!(response.header("content-type"), Some("image/jpeg"));
    assert_eq!(
        response.header("content-disposition"),
        Some("inline; filename=\"front.jpg\"")
    );
    assert_eq!(
        response.header("content-length"),
        Some(JPEG_BYTES.len().to_string().as_str())
    );
}

#[tokio::test]
async fn test_nested_route_serves_same_photo() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Harbor View").await;
    app.add_photo(property.id, "deck.png", "image/png", b"png-bytes")
        .await;

    let response = app
        .get(&format!("/properties/{}/photos/deck.png", property.id))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_ref(), b"png-bytes");
    assert_eq!(response.header("content-type"), Some("image/png"));
}

#[tokio::test]
async fn test_missing_backing_file_is_empty_404() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Paper Listing").await;
    app.register_photo(property.id, "ghost.jpg", "image/jpeg", 1024)
        .await;

    let response = app.get(&format!("/photos/{}/ghost.jpg", property.id)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_unknown_property_and_filename_are_empty_404() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Small Cottage").await;
    app.add_photo(property.id, "a.jpg", "image/jpeg", JPEG_BYTES)
        .await;

    for path in [
        format!("/photos/{}/a.jpg", property.id.value() + 1000),
        format!("/photos/{}/b.jpg", property.id),
        "/photos/not-a-number/a.jpg".to_string(),
    ] {
        let response = app.get(&path).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert!(response.body.is_empty(), "{path}");
    }
}

#[tokio::test]
async fn test_unregistered_file_on_disk_is_not_served() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Stray Files").await;
    app.write_file(property.id, "stray.jpg", JPEG_BYTES);

    let response = app.get(&format!("/photos/{}/stray.jpg", property.id)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_identical_filenames_are_isolated_per_property() {
    let app = helpers::TestApp::new().await;
    let first = app.create_property("First Place").await;
    let second = app.create_property("Second Place").await;
    app.add_photo(first.id, "kitchen.jpg", "image/jpeg", b"first-kitchen")
        .await;
    app.add_photo(second.id, "kitchen.jpg", "image/jpeg", b"second-kitchen")
        .await;

    let a = app.get(&format!("/photos/{}/kitchen.jpg", first.id)).await;
    let b = app.get(&format!("/photos/{}/kitchen.jpg", second.id)).await;

    assert_eq!(a.body.as_ref(), b"first-kitchen");
    assert_eq!(b.body.as_ref(), b"second-kitchen");
}

#[tokio::test]
async fn test_hostile_filenames_are_empty_404() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Fortified Keep").await;
    app.add_photo(property.id, "a.jpg", "image/jpeg", JPEG_BYTES)
        .await;
    let id = property.id;

    for path in [
        format!("/photos/{id}/a.jpg%00"),
        format!("/photos/{id}/a%00.jpg"),
        format!("/photos/{id}/..%2F..%2Fetc%2Fpasswd"),
        format!("/photos/{id}/..%5Ca.jpg"),
        format!("/photos/{id}/%2E%2E"),
        format!("/photos/{id}/%FF.jpg"),
    ] {
        let response = app.get(&path).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert!(response.body.is_empty(), "{path}");
    }
}

#[tokio::test]
async fn test_filename_with_quotes_is_escaped_in_disposition() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Quoted Manor").await;
    app.add_photo(property.id, "the \"best\" view.webp", "image/webp", b"RIFF")
        .await;

    let response = app
        .get(&format!(
            "/photos/{}/the%20%22best%22%20view.webp",
            property.id
        ))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header("content-disposition"),
        Some("inline; filename=\"the \\\"best\\\" view.webp\"")
    );
}

#[tokio::test]
async fn test_deleted_property_photos_are_gone() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Demolished").await;
    app.add_photo(property.id, "before.jpg", "image/jpeg", JPEG_BYTES)
        .await;
    let path = format!("/photos/{}/before.jpg", property.id);
    assert_eq!(app.get(&path).await.status, StatusCode::OK);

    app.state
        .property_service
        .delete(property.id)
        .await
        .expect("delete property");

    let response = app.get(&path).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_catalog_outage_is_503_not_404() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Offline Estate").await;
    app.add_photo(property.id, "a.jpg", "image/jpeg", JPEG_BYTES)
        .await;
    app.store.set_offline(true);

    let response = app.get(&format!("/photos/{}/a.jpg", property.id)).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json()["error"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_storage_outage_is_503_not_404() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Detached Volume").await;
    app.add_photo(property.id, "a.jpg", "image/jpeg", JPEG_BYTES)
        .await;
    std::fs::remove_dir_all(app.storage_root.path()).expect("remove storage root");

    let response = app.get(&format!("/photos/{}/a.jpg", property.id)).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json()["error"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_serves_multibyte_filename() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Cherry Blossom House").await;
    let filename = format!("{}.jpg", "日".repeat(100));
    app.add_photo(property.id, &filename, "image/jpeg", JPEG_BYTES)
        .await;

    let encoded: String = filename
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || b == b'.' {
                (b as char).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect();
    let response = app
        .get(&format!("/photos/{}/{encoded}", property.id))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_ref(), JPEG_BYTES);
}

#[tokio::test]
async fn test_signed_property_id_is_empty_404() {
    let app = helpers::TestApp::new().await;
    let property = app.create_property("Plain Number").await;
    app.add_photo(property.id, "a.jpg", "image/jpeg", JPEG_BYTES)
        .await;

    let canonical = app.get(&format!("/photos/{}/a.jpg", property.id)).await;
    assert_eq!(canonical.status, StatusCode::OK);

    for path in [
        format!("/photos/%2B{}/a.jpg", property.id),
        format!("/photos/0{}/a.jpg", property.id),
        format!("/photos/-{}/a.jpg", property.id),
    ] {
        let response = app.get(&path).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert!(response.body.is_empty(), "{path}");
    }
}
