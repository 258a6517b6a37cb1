use std::fmt;

use log::{info, warn};
use serde::Deserialize;

use super::config::{API_KEY, DEVICE_ID, SERVER_HOST, WIFI_PASSWORD, WIFI_SSID};
use super::schema::SECTION;

// 802.11 limits
const MAX_SSID_LEN: usize = 32;
const MIN_PSK_LEN: usize = 8;
const MAX_PSK_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretsError {
    EmptySsid,
    SsidTooLong(usize),
    PasswordLength(usize),
    EmptyHost,
    InvalidHost(String),
}

impl fmt::Display for SecretsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretsError::EmptySsid => write!(f, "wifi_ssid is empty"),
            SecretsError::SsidTooLong(len) => write!(
                f,
                "wifi_ssid is {} bytes long, at most {} are allowed",
                len, MAX_SSID_LEN
            ),
            SecretsError::PasswordLength(len) => write!(
                f,
                "wifi_password is {} bytes long, expected none or {}..={}",
                len, MIN_PSK_LEN, MAX_PSK_LEN
            ),
            SecretsError::EmptyHost => write!(f, "server_host is empty"),
            SecretsError::InvalidHost(host) => write!(
                f,
                "server_host `{}` must be a bare hostname or address",
                host
            ),
        }
    }
}

impl std::error::Error for SecretsError {}

#[derive(Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Secrets {
    pub wifi_ssid: String,
    pub wifi_password: String,
    pub server_host: String,
    pub api_key: String,
    pub device_id: u32,
}

#[derive(Deserialize)]
struct SecretsDocument {
    #[serde(rename = "bedroom-light")]
    section: Secrets,
}

impl Secrets {
    pub fn new(
        wifi_ssid: String,
        wifi_password: String,
        server_host: String,
        api_key: String,
        device_id: u32,
    ) -> Secrets {
        Secrets {
            wifi_ssid,
            wifi_password,
            server_host,
            api_key,
            device_id,
        }
    }

    // values compiled in from `cfg.toml`
    pub fn from_build() -> Secrets {
        Secrets::new(
            WIFI_SSID.to_owned(),
            WIFI_PASSWORD.to_owned(),
            SERVER_HOST.to_owned(),
            API_KEY.to_owned(),
            DEVICE_ID,
        )
    }

    // placeholders committed in `cfg.toml.example`
    pub fn template() -> Secrets {
        Secrets::new(
            "WiFi-SSID".to_owned(),
            "WiFi-Password".to_owned(),
            "example.com".to_owned(),
            "********".to_owned(),
            12345,
        )
    }

    pub fn from_toml_str(document: &str) -> anyhow::Result<Secrets> {
        let document: SecretsDocument = toml::from_str(document)?;
        Ok(document.section)
    }

    pub fn load() -> anyhow::Result<Secrets> {
        let secrets = Secrets::from_build();
        secrets.validate()?;

        let placeholders = secrets.placeholder_fields();
        if !placeholders.is_empty() {
            warn!(
                "[secrets]: {:?} still hold template values, copy `cfg.toml.example` to `cfg.toml` and fill in the [{}] section",
                placeholders, SECTION
            );
        }
        info!("[secrets]: loaded {:?}", secrets);
        Ok(secrets)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.wifi_ssid.is_empty(), SecretsError::EmptySsid);
        anyhow::ensure!(
            self.wifi_ssid.len() <= MAX_SSID_LEN,
            SecretsError::SsidTooLong(self.wifi_ssid.len())
        );

        // empty means an open network
        let password_len = self.wifi_password.len();
        anyhow::ensure!(
            password_len == 0 || (MIN_PSK_LEN..=MAX_PSK_LEN).contains(&password_len),
            SecretsError::PasswordLength(password_len)
        );

        anyhow::ensure!(!self.server_host.is_empty(), SecretsError::EmptyHost);
        anyhow::ensure!(
            is_bare_host(&self.server_host),
            SecretsError::InvalidHost(self.server_host.clone())
        );
        Ok(())
    }

    pub fn placeholder_fields(&self) -> Vec<&'static str> {
        let template = Secrets::template();
        let mut fields = Vec::new();
        if self.wifi_ssid == template.wifi_ssid {
            fields.push("wifi_ssid");
        }
        if self.wifi_password == template.wifi_password {
            fields.push("wifi_password");
        }
        if self.server_host == template.server_host {
            fields.push("server_host");
        }
        if self.api_key == template.api_key {
            fields.push("api_key");
        }
        if self.device_id == template.device_id {
            fields.push("device_id");
        }
        fields
    }
}

// hostname, IPv4 or bracketed IPv6, with an optional `:port`
fn is_bare_host(host: &str) -> bool {
    if let Some(rest) = host.strip_prefix('[') {
        return match rest.split_once(']') {
            Some((address, tail)) => {
                is_ipv6_literal(address)
                    && (tail.is_empty() || tail.strip_prefix(':').map_or(false, is_port))
            }
            None => false,
        };
    }
    match host.split_once(':') {
        Some((name, port)) => is_host_name(name) && is_port(port),
        None => is_host_name(host),
    }
}

fn is_host_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(['.', '-'])
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

fn is_ipv6_literal(address: &str) -> bool {
    address.contains(':')
        && address
            .chars()
            .all(|c| c.is_ascii_hexdigit() || c == ':' || c == '.')
}

fn is_port(port: &str) -> bool {
    !port.is_empty()
        && port.chars().all(|c| c.is_ascii_digit())
        && matches!(port.parse::<u16>(), Ok(p) if p != 0)
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("wifi_ssid", &self.wifi_ssid)
            .field("wifi_password", &format_args!("<redacted>"))
            .field("server_host", &self.server_host)
            .field("api_key", &format_args!("<redacted>"))
            .field("device_id", &self.device_id)
            .finish()
    }
}
