use serde::Serialize;

use super::extractors::{FromArgs, RawArgs};
use crate::error::ApiError;

/// Arguments for `POST /register`.
#[derive(Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl FromArgs for RegisterRequest {
    fn from_args(mut args: RawArgs) -> Result<Self, ApiError> {
        Ok(Self {
            username: args.required("username", "Username is required")?,
            password: args.required("password", "Password is required")?,
            email: args.required("email", "Email is required")?,
        })
    }
}

/// Arguments for `POST /login`.
#[derive(Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl FromArgs for LoginRequest {
    fn from_args(mut args: RawArgs) -> Result<Self, ApiError> {
        Ok(Self {
            username: args.required("username", "Username is required")?,
            password: args.required("password", "Password is required")?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub access_token: String,
    pub message: &'static str,
    pub questions: serde_json::Value,
}
