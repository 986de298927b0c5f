use std::collections::HashSet;

use serde_json::json;

use crate::catalog::*;
use crate::tests::support::{FACEBOOK_PATH, SPOTIFY_PATH};

#[test]
fn test_builtin_catalog_order() {
    let catalog = Catalog::builtin();

    let paths = catalog.endpoints().iter().map(|e| e.path.as_str()).collect::<Vec<_>>();
    assert_eq!(paths, vec![FACEBOOK_PATH, SPOTIFY_PATH]);
    assert_eq!(catalog.len(), 2);
    assert!(!catalog.is_empty());
}

#[test]
fn test_builtin_endpoints_take_required_url() {
    for endpoint in Catalog::builtin().endpoints() {
        assert_eq!(endpoint.method, Method::Get);
        assert_eq!(endpoint.parameters.len(), 1);
        assert_eq!(endpoint.parameters[0].name, "url");
        assert_eq!(endpoint.parameters[0].kind, "string");
        assert!(endpoint.parameters[0].required);
    }
}

#[test]
fn test_parameter_names_unique_per_endpoint() {
    for endpoint in Catalog::builtin().endpoints() {
        let names = endpoint.parameters.iter().map(|p| &p.name).collect::<HashSet<_>>();
        assert_eq!(names.len(), endpoint.parameters.len(), "duplicate parameter in {}", endpoint.path);
    }
}

#[test]
fn test_find_by_path() {
    let catalog = Catalog::builtin();

    let endpoint = catalog.find(SPOTIFY_PATH).unwrap();
    assert_eq!(endpoint.description, "Spotify track downloader");
    assert_eq!(endpoint.response["message"], "Download successful");

    assert!(catalog.find("/api/dl/unknown").is_none());
    assert!(catalog.find("/api/dl/facebook/").is_none());
}

#[test]
fn test_descriptor_serialization() {
    let catalog = Catalog::builtin();
    let endpoint = catalog.find(FACEBOOK_PATH).unwrap();

    let value = serde_json::to_value(endpoint).unwrap();
    assert_eq!(
        value,
        json!({
            "method": "GET",
            "path": "/api/dl/facebook",
            "description": "Downloader Facebook",
            "parameters": [{
                "name": "url",
                "type": "string",
                "required": true,
                "description": "Facebook video URL"
            }],
            "response": {
                "success": true,
                "message": "Video download URL retrieved successfully",
                "data": { "downloadUrl": "https://dl.facebook.com/example" }
            }
        })
    );
}

#[test]
fn test_method_names() {
    let methods = [Method::Get, Method::Post, Method::Put, Method::Delete];
    let names = methods.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(names, vec!["GET", "POST", "PUT", "DELETE"]);
    assert!(Method::Get.is_get());
    assert!(!Method::Delete.is_get());
    assert_eq!(reqwest::Method::from(Method::Put), reqwest::Method::PUT);
}

#[test]
fn test_custom_catalog() {
    let catalog = Catalog::new(vec![]);
    assert!(catalog.is_empty());
    assert!(catalog.find(FACEBOOK_PATH).is_none());
}
