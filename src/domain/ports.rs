use crate::domain::model::{ExampleEntity, UserResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies the bearer token attached to every outbound market call.
///
/// Fetched fresh per call; providers that talk to a real token issuer may
/// cache internally, the client does not.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn current_token(&self) -> Result<String>;
}

/// Keyed lookup over stored entities. The persistence engine itself is out
/// of scope; adapters supply concrete backends.
pub trait EntityRepository: Send + Sync {
    fn find_by_id(&self, example_id: i64) -> Option<ExampleEntity>;
    fn find_all(&self) -> Vec<ExampleEntity>;
}

/// User lookup, a pass-through over whatever store holds user records.
pub trait UserLookup: Send + Sync {
    fn find_by_email(&self, email: &str) -> Option<UserResponse>;
    fn find_all(&self) -> Vec<UserResponse>;
}
