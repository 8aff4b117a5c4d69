use super::*;

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_number() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
}

#[test]
fn port_rejects_garbage() {
    assert_eq!(parse_port(Some("eighty")), Err(ConfigError::InvalidPort("eighty".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn base_url_defaults_to_local_backend() {
    assert_eq!(parse_base_url(None), Ok("http://localhost:5000".to_owned()));
}

#[test]
fn base_url_requires_http_scheme() {
    assert_eq!(parse_base_url(Some("https://quiz.example.com/")), Ok("https://quiz.example.com/".to_owned()));
    assert_eq!(
        parse_base_url(Some("quiz.example.com")),
        Err(ConfigError::InvalidBaseUrl("quiz.example.com".into()))
    );
}

#[test]
fn credentials_default_on() {
    assert_eq!(parse_credentials(None), Ok(true));
}

#[test]
fn credentials_accept_flag_spellings() {
    assert_eq!(parse_credentials(Some("no")), Ok(false));
    assert_eq!(parse_credentials(Some("TRUE")), Ok(true));
    assert_eq!(parse_credentials(Some("sometimes")), Err(ConfigError::InvalidFlag("sometimes".into())));
}

#[test]
fn error_messages_name_the_variable() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT: x");
}
