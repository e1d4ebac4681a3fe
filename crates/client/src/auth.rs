//! Basic-auth credentials for the Jenkins server.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Username and API token sent with every request.
///
/// Jenkins accepts an API token (preferred) or the account password as the
/// basic-auth password.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    api_token: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_token: SecretString) -> Self {
        Self {
            username: username.into(),
            api_token,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach the credentials to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(self.api_token.expose_secret()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_does_not_expose_token() {
        let creds = Credentials::new(
            "deployer",
            SecretString::new("token-secret-987".to_string().into()),
        );
        let debug_output = format!("{:?}", creds);
        assert!(!debug_output.contains("token-secret-987"));
        assert!(debug_output.contains("deployer"));
    }

    #[test]
    fn test_apply_sets_basic_auth_header() {
        let creds = Credentials::new("alice", SecretString::new("token123".to_string().into()));
        let request = creds
            .apply(reqwest::Client::new().get("http://localhost/"))
            .build()
            .unwrap();

        let header = request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .unwrap()
            .to_str()
            .unwrap();
        // base64("alice:token123")
        assert_eq!(header, "Basic YWxpY2U6dG9rZW4xMjM=");
    }
}
