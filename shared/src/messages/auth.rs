//! Account registration and login payloads

use serde::{Deserialize, Serialize};

/// Body of a registration request
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Body of a login request
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response carrying the bearer token
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginResponse {
    pub access_token: String,
}
