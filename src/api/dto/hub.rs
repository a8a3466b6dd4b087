//! DTOs for the public hub endpoint.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::{DeviceClass, Link};
use crate::error::AppError;

/// Query string of `GET /hub` and `GET /api/hub`.
#[derive(Debug, Default, Deserialize)]
pub struct HubQuery {
    /// Overrides device detection, e.g. `?device=mobile`.
    pub device: Option<DeviceClass>,
}

impl HubQuery {
    /// The explicitly requested device.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for `all`: a visitor browses from one
    /// concrete device.
    pub fn requested_device(&self) -> Result<Option<DeviceClass>, AppError> {
        match self.device {
            Some(DeviceClass::All) => Err(AppError::bad_request(
                "Invalid device",
                json!({ "device": "all", "expected": ["mobile", "tablet", "desktop"] }),
            )),
            device => Ok(device),
        }
    }
}

/// Profile header of the hub page.
#[derive(Debug, Serialize)]
pub struct HubProfile {
    pub name: String,
    pub bio: String,
}

/// Response body of `GET /api/hub`.
#[derive(Debug, Serialize)]
pub struct HubResponse {
    pub profile: HubProfile,
    /// Device the links were filtered for.
    pub device: DeviceClass,
    /// Time of day time-range rules were evaluated at (`HH:MM`), when enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub links: Vec<Link>,
}
