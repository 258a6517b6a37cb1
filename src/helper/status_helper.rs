use std::fmt;

use log::{error, info};

use crate::dto::device_status_response::DeviceStatusResponse;
use crate::dto::error_response::ErrorResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    Server(String),
    DeviceMismatch { expected: u32, received: u32 },
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusError::Server(message) => write!(f, "server error: {}", message),
            StatusError::DeviceMismatch { expected, received } => write!(
                f,
                "status is for device {}, expected device {}",
                received, expected
            ),
        }
    }
}

impl std::error::Error for StatusError {}

pub fn parse_status_body(
    body: &str,
    expected_device_id: u32,
) -> anyhow::Result<DeviceStatusResponse> {
    if let Ok(ErrorResponse { error }) = serde_json::from_str::<ErrorResponse>(body) {
        error!("[status]: server replied with an error: {}", error);
        return Err(StatusError::Server(error).into());
    }

    let status: DeviceStatusResponse = serde_json::from_str(body).map_err(|e| {
        error!("[status]: error while trying to parse the status response: {}", e);
        e
    })?;

    if status.device_id != expected_device_id {
        return Err(StatusError::DeviceMismatch {
            expected: expected_device_id,
            received: status.device_id,
        }
        .into());
    }

    info!("[status]: device {} is {:?}", status.device_id, status.status);
    Ok(status)
}
