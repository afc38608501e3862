//! Unit tests for media store creation and Cloudinary response handling


use sf_shared::config::{MediaConfig, MediaProvider};

use crate::media::create_media_store;
use crate::InfrastructureError;

#[test]
fn test_create_memory_store() {
    let config = MediaConfig::default();
    let store = create_media_store(&config).unwrap();
    assert_eq!(store.provider_name(), "memory");
}

#[cfg(feature = "cloudinary")]
#[test]
fn test_create_cloudinary_store() {
    let config = MediaConfig {
        provider: MediaProvider::Cloudinary,
        cloud_name: "demo".to_string(),
        api_key: "123456789".to_string(),
        api_secret: "shh".to_string(),
        ..MediaConfig::default()
    };

    let store = create_media_store(&config).unwrap();
    assert_eq!(store.provider_name(), "cloudinary");
}

#[test]
fn test_cloudinary_without_credentials_is_config_error() {
    let config = MediaConfig {
        provider: MediaProvider::Cloudinary,
        ..MediaConfig::default()
    };

    let result = create_media_store(&config);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[tokio::test]
async fn test_memory_store_from_factory_round_trips_deletion() {
    let store = create_media_store(&MediaConfig::default()).unwrap();

    let uploaded = store.upload_buffer(b"GIF89a", "banners").await.unwrap();
    assert!(uploaded.public_id.starts_with("banners/"));

    let ack = store.delete(&uploaded.public_id).await.unwrap();
    assert!(ack.covers(&uploaded.public_id));

    let err = store.delete(&uploaded.public_id).await.unwrap_err();
    assert!(matches!(err, sf_core::MediaError::NotFound(_)));
}
