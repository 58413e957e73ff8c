//! Session credentials
//!
//! Derived from the cookie header of the request being served.

use std::collections::HashMap;
use std::fmt;

use percent_encoding::percent_decode_str;

use crate::config::{AuthType, BoardConfig};

const COGNITO_COOKIE_PREFIX: &str = "CognitoIdentityServiceProvider";

/// Credentials attached to every remote call of one gateway
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    ApiKey(String),
    /// User pool access token, sent as the `Authorization` header
    Bearer(String),
    /// No session found; the remote API decides what to do with it
    Anonymous,
}

impl Credentials {
    /// Resolve credentials for one request.
    ///
    /// In user-pool mode the signed-in user is looked up through the
    /// `LastAuthUser` cookie and their access token cookie is used.
    pub fn from_cookie_header(config: &BoardConfig, cookie_header: &str) -> Self {
        match config.auth_type {
            AuthType::ApiKey => match &config.api_key {
                Some(key) => Credentials::ApiKey(key.clone()),
                None => Credentials::Anonymous,
            },
            AuthType::UserPool => {
                let Some(client_id) = config.client_id.as_deref() else {
                    return Credentials::Anonymous;
                };
                let cookies = parse_cookies(cookie_header);
                let prefix = format!("{}.{}", COGNITO_COOKIE_PREFIX, client_id);
                let token = cookies
                    .get(&format!("{}.LastAuthUser", prefix))
                    .and_then(|user| cookies.get(&format!("{}.{}.accessToken", prefix, user)));
                match token {
                    Some(token) if !token.is_empty() => Credentials::Bearer(token.clone()),
                    _ => Credentials::Anonymous,
                }
            }
        }
    }

    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Credentials::ApiKey(key) => request.header("x-api-key", key),
            Credentials::Bearer(token) => request.header(reqwest::header::AUTHORIZATION, token),
            Credentials::Anonymous => request,
        }
    }
}

// Keep secrets out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::ApiKey(_) => f.write_str("ApiKey(..)"),
            Credentials::Bearer(_) => f.write_str("Bearer(..)"),
            Credentials::Anonymous => f.write_str("Anonymous"),
        }
    }
}

/// Split a `Cookie` header into percent-decoded name/value pairs.
///
/// Later duplicates win. Pairs without `=` are ignored.
pub fn parse_cookies(header: &str) -> HashMap<String, String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .map(|(name, value)| {
            let name = percent_decode_str(name.trim()).decode_utf8_lossy().into_owned();
            let value = percent_decode_str(value.trim().trim_matches('"'))
                .decode_utf8_lossy()
                .into_owned();
            (name, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_pool_config() -> BoardConfig {
        BoardConfig::from_json(
            r#"{
                "aws_appsync_graphqlEndpoint": "https://example.com/graphql",
                "aws_appsync_authenticationType": "AMAZON_COGNITO_USER_POOLS",
                "aws_user_pools_web_client_id": "client42"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_cookies_decodes_values() {
        let cookies = parse_cookies("a=1; b=hello%20world ;broken; c=\"quoted\"");
        assert_eq!(cookies.get("a").map(String::as_str), Some("1"));
        assert_eq!(cookies.get("b").map(String::as_str), Some("hello world"));
        assert_eq!(cookies.get("c").map(String::as_str), Some("quoted"));
        assert!(!cookies.contains_key("broken"));
    }

    #[test]
    fn test_user_pool_token_from_cookies() {
        let header = "CognitoIdentityServiceProvider.client42.LastAuthUser=alice%40example.com; \
                      CognitoIdentityServiceProvider.client42.alice@example.com.accessToken=tok123; \
                      CognitoIdentityServiceProvider.other.bob.accessToken=nope";
        let creds = Credentials::from_cookie_header(&user_pool_config(), header);
        assert_eq!(creds, Credentials::Bearer("tok123".into()));
    }

    #[test]
    fn test_missing_session_is_anonymous() {
        let creds = Credentials::from_cookie_header(&user_pool_config(), "theme=dark");
        assert_eq!(creds, Credentials::Anonymous);

        let header = "CognitoIdentityServiceProvider.client42.LastAuthUser=carol";
        let creds = Credentials::from_cookie_header(&user_pool_config(), header);
        assert_eq!(creds, Credentials::Anonymous);
    }

    #[test]
    fn test_api_key_mode_ignores_cookies() {
        let config = BoardConfig::from_json(
            r#"{
                "aws_appsync_graphqlEndpoint": "https://example.com/graphql",
                "aws_appsync_authenticationType": "API_KEY",
                "aws_appsync_apiKey": "da2-key"
            }"#,
        )
        .unwrap();
        let creds = Credentials::from_cookie_header(&config, "");
        assert_eq!(creds, Credentials::ApiKey("da2-key".into()));
        assert_eq!(format!("{:?}", creds), "ApiKey(..)");
    }
}
