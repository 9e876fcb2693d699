use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// A physical place owned by a user (1:1 per owner). The rating aggregate
/// and comments hang off its id and share its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub owner_id: Uuid,
    pub address: String,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub organization_type: String,
    pub map_path: Option<String>,
    pub picture_path: Option<String>,
}

/// Field mask for partial organization updates. Absent fields stay
/// untouched; unknown fields fail deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrganizationPatch {
    pub address: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub organization_type: Option<String>,
}

impl OrganizationPatch {
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.longitude.is_none()
            && self.latitude.is_none()
            && self.organization_type.is_none()
    }
}

/// Which of the two stored organization images a request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Map,
    Picture,
}

impl ImageKind {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw {
            "map" => Ok(ImageKind::Map),
            "picture" => Ok(ImageKind::Picture),
            other => Err(AppError::BadRequest(format!("unknown image kind: {other}"))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Map => "map",
            ImageKind::Picture => "picture",
        }
    }

    pub fn subdir(&self) -> &'static str {
        match self {
            ImageKind::Map => "org_maps",
            ImageKind::Picture => "org_pictures",
        }
    }

    pub fn path_of<'a>(&self, org: &'a Organization) -> Option<&'a str> {
        match self {
            ImageKind::Map => org.map_path.as_deref(),
            ImageKind::Picture => org.picture_path.as_deref(),
        }
    }
}
