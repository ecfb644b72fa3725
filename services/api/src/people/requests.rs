use serde::Deserialize;

/// Request model handed to the person-get use case.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestModel {
    pub params: RequestParams,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParams {
    pub location_id: Option<i64>,
    #[serde(default)]
    pub query: QueryOptions,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryOptions {
    pub limit: Option<usize>,
}

/// Query-string parameters accepted by `GET /people`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPeopleParams {
    pub location_id: Option<i64>,
    pub limit: Option<usize>,
}

impl ListPeopleParams {
    pub fn into_request(self) -> RequestModel {
        RequestModel {
            params: RequestParams {
                location_id: self.location_id,
                query: QueryOptions { limit: self.limit },
            },
        }
    }
}
