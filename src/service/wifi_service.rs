use embedded_svc::wifi::{AuthMethod, ClientConfiguration};
use log::info;

use crate::config::secrets::{Secrets, SecretsError};

pub fn client_configuration(secrets: &Secrets) -> anyhow::Result<ClientConfiguration> {
    let auth_method = if secrets.wifi_password.is_empty() {
        AuthMethod::None
    } else {
        AuthMethod::WPA2Personal
    };

    let mut configuration = ClientConfiguration {
        auth_method,
        ..Default::default()
    };
    configuration
        .ssid
        .push_str(&secrets.wifi_ssid)
        .map_err(|_| SecretsError::SsidTooLong(secrets.wifi_ssid.len()))?;
    configuration
        .password
        .push_str(&secrets.wifi_password)
        .map_err(|_| SecretsError::PasswordLength(secrets.wifi_password.len()))?;

    info!(
        "[wifi]: station configuration for {} ({:?})",
        configuration.ssid, configuration.auth_method
    );
    Ok(configuration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn credentials_are_copied_into_the_station_configuration() {
        let configuration = client_configuration(&Secrets::template()).unwrap();
        assert_eq!(configuration.ssid.as_str(), "WiFi-SSID");
        assert_eq!(configuration.password.as_str(), "WiFi-Password");
        assert_eq!(configuration.auth_method, AuthMethod::WPA2Personal);
    }

    #[test]
    fn empty_password_means_open_network() {
        let mut secrets = Secrets::template();
        secrets.wifi_password.clear();
        let configuration = client_configuration(&secrets).unwrap();
        assert_eq!(configuration.auth_method, AuthMethod::None);
        assert!(configuration.password.is_empty());
    }

    #[test]
    fn oversized_ssid_does_not_fit() {
        let mut secrets = Secrets::template();
        secrets.wifi_ssid = "s".repeat(40);
        let err = client_configuration(&secrets).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SecretsError>(),
            Some(&SecretsError::SsidTooLong(40))
        );
    }
}
