use serde_json::json;

use crate::catalog::{Catalog, EndpointDescriptor, Method, ParameterSpec};

impl Catalog {
    /// The endpoints documented on the site, in sidebar order.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![facebook_downloader(), spotify_downloader()])
    }
}

fn facebook_downloader() -> EndpointDescriptor {
    EndpointDescriptor {
        method: Method::Get,
        path: "/api/dl/facebook".to_string(),
        description: "Downloader Facebook".to_string(),
        parameters: vec![ParameterSpec::new("url", "string", true, "Facebook video URL")],
        response: json!({
            "success": true,
            "message": "Video download URL retrieved successfully",
            "data": {
                "downloadUrl": "https://dl.facebook.com/example"
            }
        }),
    }
}

fn spotify_downloader() -> EndpointDescriptor {
    EndpointDescriptor {
        method: Method::Get,
        path: "/api/dl/spotify".to_string(),
        description: "Spotify track downloader".to_string(),
        parameters: vec![ParameterSpec::new("url", "string", true, "Spotify url track")],
        response: json!({
            "success": true,
            "message": "Download successful",
            "data": {
                "info": {},
                "download": "https://media.savetube.me/media-downloader-direct?url=https%3A%2F%2Fspotifymate.com"
            }
        }),
    }
}
