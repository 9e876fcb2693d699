use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which dimensions a user cares about when browsing organizations (1:1 per
/// user). Pure preference flags, never aggregated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserParams {
    pub user_id: Uuid,
    pub appearance: bool,
    pub lighting: bool,
    pub smell: bool,
    pub temperature: bool,
    pub tactility: bool,
    pub signage: bool,
    pub intuitiveness: bool,
    pub staff_attitude: bool,
    pub people_density: bool,
    pub self_service: bool,
    pub calmness: bool,
}

/// Explicit field mask for partial updates: each flag is either
/// present-with-value or absent. Unknown fields in the payload are a
/// deserialization error, and an all-absent mask is rejected by the handler
/// rather than silently no-oping.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserParamsPatch {
    pub appearance: Option<bool>,
    pub lighting: Option<bool>,
    pub smell: Option<bool>,
    pub temperature: Option<bool>,
    pub tactility: Option<bool>,
    pub signage: Option<bool>,
    pub intuitiveness: Option<bool>,
    pub staff_attitude: Option<bool>,
    pub people_density: Option<bool>,
    pub self_service: Option<bool>,
    pub calmness: Option<bool>,
}

impl UserParamsPatch {
    pub fn is_empty(&self) -> bool {
        self.appearance.is_none()
            && self.lighting.is_none()
            && self.smell.is_none()
            && self.temperature.is_none()
            && self.tactility.is_none()
            && self.signage.is_none()
            && self.intuitiveness.is_none()
            && self.staff_attitude.is_none()
            && self.people_density.is_none()
            && self.self_service.is_none()
            && self.calmness.is_none()
    }

    pub fn apply_to(&self, params: &mut UserParams) {
        if let Some(v) = self.appearance {
            params.appearance = v;
        }
        if let Some(v) = self.lighting {
            params.lighting = v;
        }
        if let Some(v) = self.smell {
            params.smell = v;
        }
        if let Some(v) = self.temperature {
            params.temperature = v;
        }
        if let Some(v) = self.tactility {
            params.tactility = v;
        }
        if let Some(v) = self.signage {
            params.signage = v;
        }
        if let Some(v) = self.intuitiveness {
            params.intuitiveness = v;
        }
        if let Some(v) = self.staff_attitude {
            params.staff_attitude = v;
        }
        if let Some(v) = self.people_density {
            params.people_density = v;
        }
        if let Some(v) = self.self_service {
            params.self_service = v;
        }
        if let Some(v) = self.calmness {
            params.calmness = v;
        }
    }
}
