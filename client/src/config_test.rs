use super::*;

#[test]
fn default_points_at_local_backend_with_credentials() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, "http://localhost:5000");
    assert!(config.with_credentials);
}

#[test]
fn new_trims_trailing_slashes() {
    let config = ApiConfig::new("https://quiz.example.com//", false);
    assert_eq!(config.base_url, "https://quiz.example.com");
    assert!(!config.with_credentials);
}

#[test]
fn url_joins_with_single_slash() {
    let config = ApiConfig::default();
    assert_eq!(config.url("/api/subjects"), "http://localhost:5000/api/subjects");
    assert_eq!(config.url("api/subjects"), "http://localhost:5000/api/subjects");
}

#[test]
fn from_meta_uses_embedded_values() {
    let config = ApiConfig::from_meta(Some("http://api:8000/"), Some("false"));
    assert_eq!(config, ApiConfig::new("http://api:8000", false));
}

#[test]
fn from_meta_falls_back_to_defaults() {
    assert_eq!(ApiConfig::from_meta(None, None), ApiConfig::default());
    assert_eq!(
        ApiConfig::from_meta(Some("   "), Some("maybe")),
        ApiConfig::default()
    );
}

#[test]
fn credentials_flag_round_trips_through_parse_flag() {
    for with_credentials in [true, false] {
        let config = ApiConfig::new(DEFAULT_API_BASE_URL, with_credentials);
        assert_eq!(parse_flag(config.credentials_flag()), Some(with_credentials));
    }
}

#[test]
fn parse_flag_accepts_common_spellings() {
    assert_eq!(parse_flag(" YES "), Some(true));
    assert_eq!(parse_flag("1"), Some(true));
    assert_eq!(parse_flag("off"), Some(false));
    assert_eq!(parse_flag(""), None);
}
