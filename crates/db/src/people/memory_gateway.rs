use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::people::gateways::PersonGateway;
use crate::people::models::Person;
use rolodex_common::error::RolodexResult;

/// In-memory person store. Serves as the test double for the use case and
/// lets the api router run without a database. `get_all` returns records in
/// seeding order.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersonGateway {
    people: Arc<RwLock<Vec<Person>>>,
}

impl MemoryPersonGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the backing store with the given records.
    pub fn data(&self, people: Vec<Person>) {
        *self.people.write().expect("person store lock poisoned") = people;
    }
}

#[async_trait]
impl PersonGateway for MemoryPersonGateway {
    async fn get_all(&self) -> RolodexResult<Vec<Person>> {
        Ok(self
            .people
            .read()
            .expect("person store lock poisoned")
            .clone())
    }
}
