pub mod device_status_response;
pub mod error_response;
