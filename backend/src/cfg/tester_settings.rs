use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TesterSettings {
    /// Origin that relative endpoint paths are resolved against.
    /// Empty means the server's own address.
    #[serde(default)]
    pub base_url: String,
}
