pub mod wifi_service;
