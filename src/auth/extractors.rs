use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, Query, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde_json::Value;
use tracing::warn;

use crate::error::ApiError;

pub const MALFORMED_BODY: &str = "Malformed request body";

/// Loosely-typed request arguments gathered from the body and the query
/// string. Scalars are coerced to strings; `null` counts as absent.
#[derive(Debug, Default)]
pub struct RawArgs(HashMap<String, String>);

impl RawArgs {
    fn from_json(body: HashMap<String, Value>) -> Result<Self, ApiError> {
        let mut args = HashMap::with_capacity(body.len());
        for (name, value) in body {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(true) => "True".to_string(),
                Value::Bool(false) => "False".to_string(),
                Value::Array(_) | Value::Object(_) => {
                    warn!(field = %name, "argument is not a scalar");
                    return Err(ApiError::bad_request(MALFORMED_BODY));
                }
            };
            args.insert(name, text);
        }
        Ok(Self(args))
    }

    /// Query values only fill in names the body did not send.
    fn fill_from(&mut self, query: HashMap<String, String>) {
        for (name, value) in query {
            self.0.entry(name).or_insert(value);
        }
    }

    /// Takes `name` out of the arguments, failing with `help` as the 400
    /// message when it was not sent.
    pub fn required(&mut self, name: &str, help: &'static str) -> Result<String, ApiError> {
        self.0.remove(name).ok_or_else(|| {
            warn!(field = name, "missing argument");
            ApiError::bad_request(help)
        })
    }

    #[cfg(test)]
    pub fn from_pairs<const N: usize>(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Request arguments checked for required fields before any handler logic runs.
pub trait FromArgs: Sized {
    fn from_args(args: RawArgs) -> Result<Self, ApiError>;
}

/// Accepts JSON or urlencoded form bodies, plus query-string values. A
/// request without a content type carries only its query string.
pub struct Args<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Args<T>
where
    S: Send + Sync,
    T: FromArgs,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<HashMap<String, String>>::try_from_uri(req.uri())
            .map_err(|e| {
                warn!(error = %e, "rejected query string");
                ApiError::bad_request(MALFORMED_BODY)
            })?;

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase());

        let mut args = match content_type.as_deref() {
            Some(ct) if ct.starts_with("application/json") => {
                let Json(body) = Json::<HashMap<String, Value>>::from_request(req, state)
                    .await
                    .map_err(|e| {
                        warn!(error = %e, "rejected json body");
                        ApiError::bad_request(MALFORMED_BODY)
                    })?;
                RawArgs::from_json(body)?
            }
            Some(ct) if ct.starts_with("application/x-www-form-urlencoded") => {
                let Form(body) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| {
                        warn!(error = %e, "rejected form body");
                        ApiError::bad_request(MALFORMED_BODY)
                    })?;
                RawArgs(body)
            }
            None => RawArgs::default(),
            Some(ct) => {
                warn!(content_type = %ct, "unsupported content type");
                return Err(ApiError::UnsupportedMediaType);
            }
        };
        args.fill_from(query);

        T::from_args(args).map(Args)
    }
}
