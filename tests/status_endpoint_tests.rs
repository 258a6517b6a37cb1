use bedroom_light::config::secrets::Secrets;
use bedroom_light::dto::device_status_response::LightStatus;
use bedroom_light::helper::endpoint_helper::{authorization_header, status_url};
use bedroom_light::helper::status_helper::{parse_status_body, StatusError};
use pretty_assertions::assert_eq;

fn bedroom() -> Secrets {
    Secrets::new(
        "home".to_owned(),
        "correct horse".to_owned(),
        "smartify.lan".to_owned(),
        "k3y".to_owned(),
        3,
    )
}

#[test]
fn request_is_derived_from_the_secrets() {
    let secrets = bedroom();
    assert_eq!(
        status_url(&secrets),
        "http://smartify.lan/api.php?action=devices&sub_action=status&device_id=3"
    );
    assert_eq!(
        authorization_header(&secrets),
        ("authorization", "Bearer k3y".to_owned())
    );
}

#[test]
fn status_reply_is_decoded() {
    let body = r#"{
    "deviceId": "3",
    "status": "OFF",
    "timestamp": "2024-11-02 07:15:42"
}"#;
    let status = parse_status_body(body, bedroom().device_id).unwrap();
    assert_eq!(status.device_id, 3);
    assert_eq!(status.status, LightStatus::Off);
    assert_eq!(status.timestamp.to_string(), "2024-11-02 07:15:42");
}

#[test]
fn server_error_is_surfaced() {
    let err = parse_status_body(r#"{"error": "Device not found"}"#, 3).unwrap_err();
    assert_eq!(
        err.downcast_ref::<StatusError>(),
        Some(&StatusError::Server("Device not found".to_owned()))
    );
}

#[test]
fn reply_for_another_device_is_rejected() {
    let body = r#"{"deviceId": "4", "status": "ON", "timestamp": "2024-11-02 07:15:42"}"#;
    let err = parse_status_body(body, 3).unwrap_err();
    assert_eq!(
        err.downcast_ref::<StatusError>(),
        Some(&StatusError::DeviceMismatch {
            expected: 3,
            received: 4
        })
    );
}

#[test]
fn garbage_body_is_a_parse_error() {
    let err = parse_status_body("<html>502 Bad Gateway</html>", 3).unwrap_err();
    assert!(err.downcast_ref::<serde_json::Error>().is_some());
}
