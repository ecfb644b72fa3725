use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::people::gateways::PersonGateway;
use crate::people::models::{City, Country, Image, Location, Person, PersonName, State};
use rolodex_common::error::{RolodexError, RolodexResult};

/// Postgres-backed person gateway. Persons, their location associations and
/// their portrait images live in separate tables and are assembled here;
/// `get_all` returns persons in id order.
pub struct PgPersonGateway {
    pool: PgPool,
}

impl PgPersonGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_person_row(row: &PgRow) -> Person {
        Person {
            id: row.get("id"),
            external_link_id: row.get("external_link_id"),
            name: PersonName {
                first: row.get("first_name"),
                middle: row.get("middle_name"),
                last: row.get("last_name"),
                prefix: row.get("name_prefix"),
                suffix: row.get("name_suffix"),
                aka: row.get("aka"),
                maiden: row.get("maiden_name"),
            },
            locations: Vec::new(),
            portrait_images: Vec::new(),
        }
    }

    fn map_location_row(row: &PgRow) -> Location {
        Location {
            city: City {
                id: row.get("city_id"),
                name: row.get("city_name"),
                url_safe_name: row.get("city_url_safe_name"),
                href: row.get("city_href"),
            },
            state: State {
                id: row.get("state_id"),
                name: row.get("state_name"),
                code: row.get("state_code"),
                url_safe_name: row.get("state_url_safe_name"),
                href: row.get("state_href"),
            },
            country: Country {
                id: row.get("country_id"),
                name: row.get("country_name"),
                code: row.get("country_code"),
                href: row.get("country_href"),
            },
        }
    }

    async fn load_locations(&self) -> RolodexResult<HashMap<i64, Vec<Location>>> {
        let rows = sqlx::query(
            "select person_id, city_id, city_name, city_url_safe_name, city_href, \
             state_id, state_name, state_code, state_url_safe_name, state_href, \
             country_id, country_name, country_code, country_href \
             from person_locations order by person_id, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RolodexError::Database(e.to_string()))?;

        let mut by_person: HashMap<i64, Vec<Location>> = HashMap::new();
        for row in &rows {
            let person_id: i64 = row.get("person_id");
            by_person
                .entry(person_id)
                .or_default()
                .push(Self::map_location_row(row));
        }
        Ok(by_person)
    }

    async fn load_images(&self) -> RolodexResult<HashMap<i64, Vec<Image>>> {
        let rows = sqlx::query(
            "select person_id, name, href from person_images order by person_id, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RolodexError::Database(e.to_string()))?;

        let mut by_person: HashMap<i64, Vec<Image>> = HashMap::new();
        for row in &rows {
            let person_id: i64 = row.get("person_id");
            by_person.entry(person_id).or_default().push(Image {
                name: row.get("name"),
                href: row.get("href"),
            });
        }
        Ok(by_person)
    }
}

#[async_trait]
impl PersonGateway for PgPersonGateway {
    async fn get_all(&self) -> RolodexResult<Vec<Person>> {
        let rows = sqlx::query(
            "select id, external_link_id, first_name, middle_name, last_name, \
             name_prefix, name_suffix, aka, maiden_name \
             from people order by id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RolodexError::Database(e.to_string()))?;

        let mut locations = self.load_locations().await?;
        let mut images = self.load_images().await?;

        let people = rows
            .iter()
            .map(|row| {
                let mut person = Self::map_person_row(row);
                person.locations = locations.remove(&person.id).unwrap_or_default();
                person.portrait_images = images.remove(&person.id).unwrap_or_default();
                person
            })
            .collect();

        Ok(people)
    }
}
