// values come from the `[bedroom-light]` section of `cfg.toml`,
// the defaults are the placeholders of `cfg.toml.example`
#[toml_cfg::toml_config]
pub struct Config {
    #[default("WiFi-SSID")]
    wifi_ssid: &'static str,
    #[default("WiFi-Password")]
    wifi_password: &'static str,
    #[default("example.com")]
    server_host: &'static str,
    #[default("********")]
    api_key: &'static str,
    #[default(12345)]
    device_id: u32,
}

// --- WiFi Settings ---
pub const WIFI_SSID: &str = CONFIG.wifi_ssid;
pub const WIFI_PASSWORD: &str = CONFIG.wifi_password;

// --- Server Settings ---
pub const SERVER_HOST: &str = CONFIG.server_host;
pub const API_KEY: &str = CONFIG.api_key;

// --- Device Settings ---
pub const DEVICE_ID: u32 = CONFIG.device_id;

// set by build.rs once cfg.toml passed the schema check
pub const SECRETS_FILE_PRESENT: bool = option_env!("BEDROOM_LIGHT_SECRETS_FILE").is_some();
