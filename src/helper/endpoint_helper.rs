use crate::config::secrets::Secrets;

pub const API_PATH: &str = "/api.php";

pub fn status_url(secrets: &Secrets) -> String {
    format!(
        "http://{}{}?action=devices&sub_action=status&device_id={}",
        secrets.server_host, API_PATH, secrets.device_id
    )
}

pub fn authorization_header(secrets: &Secrets) -> (&'static str, String) {
    ("authorization", format!("Bearer {}", secrets.api_key))
}
