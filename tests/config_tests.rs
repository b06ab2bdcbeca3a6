use serial_test::serial;
use std::{env, panic};
use storefront_client::{ClientConfig, config::Env};

// --- Setup/Teardown Utilities ---

/// Utility to run a test function and restore environment variables afterward
fn run_with_env<T, R>(test: T, cleanup_vars: Vec<&'static str>) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    // Save current environment variables
    let originals: Vec<(String, Option<String>)> = cleanup_vars
        .iter()
        .map(|&var| (var.to_string(), env::var(var).ok()))
        .collect();

    // Run the test
    let result = panic::catch_unwind(test);

    // Restore original environment variables
    for (key, original_value) in originals.into_iter().rev() {
        unsafe {
            if let Some(val) = original_value {
                env::set_var(&key, val);
            } else {
                env::remove_var(&key);
            }
        }
    }

    // Re-panic if the test failed
    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

// --- Tests ---

#[test]
fn test_client_config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base_url, "http://localhost:8000/api");
    assert_eq!(config.api_token, None);
    assert_eq!(config.http_timeout_secs, 30);
    assert_eq!(config.env, Env::Local);
}

#[test]
#[serial]
fn test_client_config_production_fail_fast() {
    // We expect this to panic because the base URL is not set
    let result = panic::catch_unwind(|| {
        unsafe {
            env::set_var("STOREFRONT_ENV", "production");
            env::remove_var("STOREFRONT_API_URL");
        }
        ClientConfig::load()
    });

    // Cleanup
    unsafe {
        env::remove_var("STOREFRONT_ENV");
    }

    // Assert that the config loading failed (panicked)
    assert!(
        result.is_err(),
        "Production config loading should panic without a base URL"
    );
}

#[test]
#[serial]
fn test_client_config_local_env_defaults() {
    // Local mode should not panic, and should use hardcoded defaults
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("STOREFRONT_ENV", "local");
                // Clear other variables to test fallbacks
                env::remove_var("STOREFRONT_API_URL");
                env::remove_var("STOREFRONT_API_TOKEN");
                env::remove_var("STOREFRONT_HTTP_TIMEOUT_SECS");
            }
            ClientConfig::load()
        },
        vec![
            "STOREFRONT_ENV",
            "STOREFRONT_API_URL",
            "STOREFRONT_API_TOKEN",
            "STOREFRONT_HTTP_TIMEOUT_SECS",
        ],
    );

    assert_eq!(config.env, Env::Local);
    // Check hardcoded local default
    assert_eq!(config.api_base_url, "http://localhost:8000/api");
    assert_eq!(config.api_token, None);
    assert_eq!(config.http_timeout_secs, 30);
}

#[test]
#[serial]
fn test_client_config_production_loads_values() {
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("STOREFRONT_ENV", "production");
                env::set_var("STOREFRONT_API_URL", "https://shop.example.com/api");
                env::set_var("STOREFRONT_API_TOKEN", "secret-token");
                env::set_var("STOREFRONT_HTTP_TIMEOUT_SECS", "5");
            }
            ClientConfig::load()
        },
        vec![
            "STOREFRONT_ENV",
            "STOREFRONT_API_URL",
            "STOREFRONT_API_TOKEN",
            "STOREFRONT_HTTP_TIMEOUT_SECS",
        ],
    );

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.api_base_url, "https://shop.example.com/api");
    assert_eq!(config.api_token.as_deref(), Some("secret-token"));
    assert_eq!(config.http_timeout_secs, 5);
}

#[test]
#[serial]
fn test_empty_api_token_reads_as_unset() {
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("STOREFRONT_ENV", "local");
                env::set_var("STOREFRONT_API_TOKEN", "");
            }
            ClientConfig::load()
        },
        vec!["STOREFRONT_ENV", "STOREFRONT_API_TOKEN"],
    );

    assert_eq!(config.api_token, None);
}

#[test]
#[serial]
fn test_unparseable_timeout_falls_back() {
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("STOREFRONT_ENV", "local");
                env::set_var("STOREFRONT_HTTP_TIMEOUT_SECS", "soon");
            }
            ClientConfig::load()
        },
        vec!["STOREFRONT_ENV", "STOREFRONT_HTTP_TIMEOUT_SECS"],
    );

    assert_eq!(config.http_timeout_secs, 30);
}
