//! Locating credentials in auth responses.
//!
//! The backend has shipped the token under several names over time, so login
//! and signup responses are searched in a fixed order.

use serde_json::Value;

const TOKEN_PATHS: [&[&str]; 7] = [
    &["token"],
    &["Token"],
    &["data", "token"],
    &["data", "Token"],
    &["data", "accessToken"],
    &["accessToken"],
    &["jwt"],
];

/// First non-blank token candidate; the `Authorization` header is tried last.
pub fn extract_token(body: &Value, authorization: Option<&str>) -> Option<String> {
    TOKEN_PATHS
        .iter()
        .filter_map(|path| lookup(body, path))
        .chain(authorization.and_then(|header| header.split_whitespace().nth(1)))
        .find(|candidate| !candidate.trim().is_empty())
        .map(str::to_string)
}

/// Role from `data.role`, else the top-level `role`.
pub fn extract_role(body: &Value) -> Option<String> {
    lookup(body, &["data", "role"])
        .or_else(|| lookup(body, &["role"]))
        .filter(|role| !role.trim().is_empty())
        .map(str::to_string)
}

fn lookup<'a>(body: &'a Value, path: &[&str]) -> Option<&'a str> {
    path.iter()
        .try_fold(body, |node, key| node.get(key))
        .and_then(Value::as_str)
}

/// Short, log-safe prefix of a token.
pub fn token_preview(token: &str) -> String {
    let prefix: String = token.chars().take(8).collect();
    format!("{prefix}…")
}
