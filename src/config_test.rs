use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ServerError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn from_vars_uses_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = config_from(&[("HOST", "127.0.0.1"), ("PORT", " 8080 "), ("SITE_ROOT", "/srv/site")]).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn from_vars_treats_blank_values_as_unset() {
    let cfg = config_from(&[("HOST", "  "), ("PORT", ""), ("SITE_ROOT", " ")]).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn from_vars_rejects_invalid_port() {
    let err = config_from(&[("PORT", "http")]).unwrap_err();
    assert!(matches!(err, ServerError::Config(ref msg) if msg.contains("http")));

    let err = config_from(&[("PORT", "70000")]).unwrap_err();
    assert!(matches!(err, ServerError::Config(_)));
}
