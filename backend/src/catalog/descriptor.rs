use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    #[must_use]
    pub const fn is_get(self) -> bool {
        matches!(self, Self::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

/// One input field of a documented endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct ParameterSpec {
    pub name: String,

    /// Input hint such as `string` or `password`.
    #[serde(rename = "type")]
    pub kind: String,

    pub required: bool,
    pub description: String,
}

impl ParameterSpec {
    #[must_use]
    pub fn new(name: &str, kind: &str, required: bool, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            required,
            description: description.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct EndpointDescriptor {
    pub method: Method,
    pub path: String,
    pub description: String,
    pub parameters: Vec<ParameterSpec>,

    /// Example payload shown in the docs. Fixture data only.
    pub response: Value,
}

impl EndpointDescriptor {
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

/// Read-only, ordered list of documented endpoints.
#[derive(Clone, Debug)]
pub struct Catalog {
    endpoints: Arc<[EndpointDescriptor]>,
}

impl Catalog {
    #[must_use]
    pub fn new(endpoints: Vec<EndpointDescriptor>) -> Self {
        Self { endpoints: endpoints.into() }
    }

    #[must_use]
    pub fn endpoints(&self) -> &[EndpointDescriptor] {
        &self.endpoints
    }

    #[must_use]
    pub fn find(&self, path: &str) -> Option<&EndpointDescriptor> {
        self.endpoints.iter().find(|endpoint| endpoint.path == path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
