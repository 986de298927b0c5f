use std::collections::HashMap;

use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::catalog::{EndpointDescriptor, Method};

/// Values typed by the user, keyed by parameter name.
pub type ParamValues = HashMap<String, String>;

/// A request derived from a descriptor and the user's values.
#[derive(Clone, Debug, PartialEq)]
pub struct TestRequest {
    pub method: Method,

    /// Descriptor path plus the encoded query, if any.
    pub location: String,

    /// JSON object sent with `Content-Type: application/json`.
    pub body: Option<Value>,
}

/// Builds the outbound request for one test run.
///
/// Only parameters with a non-empty value are sent, in declaration order.
/// GET endpoints carry them in the query string; every other method sends
/// them as a JSON object body. Values for names the descriptor does not
/// declare are ignored, and required parameters are not enforced.
#[must_use]
pub fn build_request(descriptor: &EndpointDescriptor, values: &ParamValues) -> TestRequest {
    let supplied = descriptor.parameters.iter().filter_map(|param| {
        values
            .get(&param.name)
            .filter(|value| !value.is_empty())
            .map(|value| (param.name.as_str(), value.as_str()))
    });

    let mut location = descriptor.path.clone();
    let mut body = None;

    if descriptor.method.is_get() {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(supplied)
            .finish();
        if !query.is_empty() {
            location.push('?');
            location.push_str(&query);
        }
    } else if descriptor.has_parameters() {
        let object = supplied
            .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
            .collect::<Map<_, _>>();
        body = Some(Value::Object(object));
    }

    TestRequest {
        method: descriptor.method,
        location,
        body,
    }
}
