use serde::Serialize;

/// Response model produced by the person-get use case. `people` is absent
/// entirely when nothing matched; it is never an empty present list.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people: Option<Vec<PersonViewModel>>,
    pub http: HttpInfo,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpInfo {
    pub status_code: u16,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonViewModel {
    pub id: i64,
    pub name: NameViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_links: Option<ExternalLinksViewModel>,
    pub portrait_images: Vec<ImageViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NameViewModel {
    pub full: String,
    pub short: String,
    pub list: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExternalLinksViewModel {
    pub picture: String,
    pub guestbook: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub href: String,
}
