use async_trait::async_trait;

use crate::people::models::Person;
use rolodex_common::error::RolodexResult;

/// Read capability over the person store. The use case only ever reads the
/// full list; filtering and pagination happen above this seam so the
/// Postgres-backed and in-memory implementations stay interchangeable.
#[async_trait]
pub trait PersonGateway: Send + Sync {
    async fn get_all(&self) -> RolodexResult<Vec<Person>>;
}
