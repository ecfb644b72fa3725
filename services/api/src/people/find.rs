use std::sync::Arc;

use rolodex_common::error::RolodexResult;
use rolodex_db::people::gateways::PersonGateway;
use rolodex_db::people::models::Person;

use crate::people::formatters;
use crate::people::requests::{QueryOptions, RequestModel};
use crate::people::responses::{HttpInfo, PersonViewModel, ResponseModel};

/// The "get person by location" use case. The gateway is bound at
/// construction; `find` reads the full person list once, then filters,
/// paginates and projects it without touching shared state.
#[derive(Clone)]
pub struct PersonGet {
    gateway: Arc<dyn PersonGateway>,
}

impl PersonGet {
    pub fn new(gateway: Arc<dyn PersonGateway>) -> Self {
        Self { gateway }
    }

    pub async fn find(
        &self,
        request: &RequestModel,
        query: &QueryOptions,
    ) -> RolodexResult<ResponseModel> {
        let people = self.gateway.get_all().await?;

        let mut matched: Vec<Person> = match request.params.location_id {
            Some(location_id) => people
                .into_iter()
                .filter(|person| person.locations.iter().any(|loc| loc.matches(location_id)))
                .collect(),
            None => people,
        };

        if matched.is_empty() {
            return Ok(ResponseModel {
                people: None,
                http: HttpInfo { status_code: 204 },
            });
        }

        // A limit of 0 means "no limit"; the result list is never truncated
        // to an empty present list.
        match query.limit {
            Some(limit) if limit > 0 => matched.truncate(limit),
            _ => {}
        }

        let people = matched.iter().map(to_view_model).collect();
        Ok(ResponseModel {
            people: Some(people),
            http: HttpInfo { status_code: 200 },
        })
    }
}

fn to_view_model(person: &Person) -> PersonViewModel {
    PersonViewModel {
        id: person.id,
        name: formatters::format_name(&person.name),
        external_links: formatters::format_external_links(person.external_link_id.as_deref()),
        portrait_images: formatters::format_portrait_images(&person.portrait_images),
    }
}
