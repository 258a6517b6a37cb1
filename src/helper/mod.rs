pub mod endpoint_helper;
pub mod status_helper;
