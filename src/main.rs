use bedroom_light::config::secrets::Secrets;
use bedroom_light::helper::endpoint_helper::status_url;
use bedroom_light::service::wifi_service::client_configuration;
use log::{error, info};

fn main() -> anyhow::Result<()> {
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_svc::log::EspLogger::initialize_default();
    }

    let secrets = match Secrets::load() {
        Err(e) => {
            error!("[secrets]: invalid configuration, check `cfg.toml`: {}", e);
            return Err(e);
        }
        Ok(secrets) => secrets,
    };

    let wifi_configuration = client_configuration(&secrets)?;
    info!(
        "[wifi]: station configured for {} ({:?})",
        wifi_configuration.ssid, wifi_configuration.auth_method
    );

    info!(
        "[endpoint]: device {} reports its status at {}",
        secrets.device_id,
        status_url(&secrets)
    );
    Ok(())
}
