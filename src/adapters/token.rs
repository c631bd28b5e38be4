use crate::domain::ports::TokenProvider;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Fixed service-account token. Real deployments swap in a provider that
/// talks to the token issuer.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn current_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}
