use super::*;

#[test]
fn new_should_trim_trailing_slashes() {
    let config = ClientConfig::new("https://api.kghs.org/ ");
    assert_eq!("https://api.kghs.org", config.base_url());
    assert_eq!(
        "https://api.kghs.org/api/news",
        config.url("/api/news"),
        "path should be joined with a single slash"
    );
}

#[test]
fn from_env_value_should_fall_back_to_default() {
    assert_eq!(DEFAULT_API_URL, ClientConfig::from_env_value(None).base_url());
    assert_eq!(DEFAULT_API_URL, ClientConfig::from_env_value(Some("")).base_url());
}
