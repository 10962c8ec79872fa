use crate::cli::api_client::*;
use serial_test::serial;
use std::env;

// Initialize crypto provider once for all tests
fn init_crypto() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

#[test]
fn test_new_with_explicit_url() {
    init_crypto();
    let client = ApiClient::new(Some("http://custom:8080".to_string()));
    assert_eq!(client.base_url(), "http://custom:8080");
}

#[test]
fn test_trailing_slash_is_trimmed() {
    init_crypto();
    let client = ApiClient::new(Some("http://custom:8080/".to_string()));
    assert_eq!(client.base_url(), "http://custom:8080");
}

#[test]
#[serial]
fn test_new_with_default() {
    init_crypto();
    let previous = env::var(API_URL_ENV).ok();
    unsafe {
        env::remove_var(API_URL_ENV);
    }

    let client = ApiClient::new(None);
    assert_eq!(client.base_url(), DEFAULT_API_URL);

    if let Some(value) = previous {
        unsafe {
            env::set_var(API_URL_ENV, value);
        }
    }
}

#[test]
#[serial]
fn test_env_var_is_used() {
    init_crypto();
    unsafe {
        env::set_var(API_URL_ENV, "http://from-env:9999");
    }

    let client = ApiClient::new(None);
    assert_eq!(client.base_url(), "http://from-env:9999");

    // Explicit URL wins over the environment
    let client = ApiClient::new(Some("http://explicit:7777".to_string()));
    assert_eq!(client.base_url(), "http://explicit:7777");

    unsafe {
        env::remove_var(API_URL_ENV);
    }
}
