use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct NavLink {
    pub(crate) name: String,
    pub(crate) label: String,
    pub(crate) path: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PageSection {
    pub(crate) heading: String,
    pub(crate) body: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PageResponse {
    pub(crate) page: String,
    pub(crate) title: String,
    pub(crate) tagline: String,
    pub(crate) sections: Vec<PageSection>,
    pub(crate) nav: Vec<NavLink>,
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) service: String,
    pub(crate) status: String,
    pub(crate) version: String,
}
