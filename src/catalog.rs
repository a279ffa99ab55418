// src/catalog.rs
use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_CATALOG: &str = include_str!("../data/churches.json");

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServiceDay {
    pub day: String,
    pub times: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Church {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub denomination: String,
    pub worship_style: String,
    pub size_category: String,
    #[serde(default)]
    pub emphasis: Vec<String>,
    pub service_formality: String,
    pub website_url: Option<String>,
    #[serde(default)]
    pub service_times: Vec<ServiceDay>,
    pub pastor_intro: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub match_percentage: Option<u8>,
    pub distance: Option<f64>,
}

impl Church {
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// The first two service days, in catalog order.
    pub fn service_preview(&self) -> &[ServiceDay] {
        let n = self.service_times.len().min(2);
        &self.service_times[..n]
    }

    pub fn has_more_service_times(&self) -> bool {
        self.service_times.len() > 2
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate church id {0:?}")]
    DuplicateId(String),
}

pub fn parse_catalog(json: &str) -> Result<Vec<Church>, CatalogError> {
    let churches: Vec<Church> = serde_json::from_str(json)?;
    for (i, c) in churches.iter().enumerate() {
        if churches[..i].iter().any(|prev| prev.id == c.id) {
            return Err(CatalogError::DuplicateId(c.id.clone()));
        }
    }
    Ok(churches)
}

pub fn load_catalog() -> Result<Vec<Church>, CatalogError> {
    parse_catalog(EMBEDDED_CATALOG)
}
