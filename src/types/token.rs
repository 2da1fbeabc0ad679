use serde::{Deserialize, Serialize};

/// Credentials posted to the token endpoint. Missing fields are reported per field.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RTokenCreate {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenCreateRes {
    pub token: String,
}
