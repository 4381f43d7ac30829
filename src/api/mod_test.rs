use super::{Config, DB_ENV, HOST_ENV, PORT_ENV};
use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

fn clear_env() {
    unsafe {
        env::remove_var(HOST_ENV);
        env::remove_var(PORT_ENV);
        env::remove_var(DB_ENV);
    }
}

#[test]
fn test_config_default_is_localhost_8080_in_memory() {
    let config = Config::default();
    assert_eq!(config.host, "127.0.0.1".parse::<IpAddr>().unwrap());
    assert_eq!(config.port, 8080);
    assert_eq!(config.db_path, None);
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
#[serial]
fn test_config_new_respects_env_vars() {
    clear_env();
    unsafe {
        env::set_var(HOST_ENV, "0.0.0.0");
        env::set_var(PORT_ENV, "9090");
        env::set_var(DB_ENV, "/tmp/roster-test.db");
    }

    let config = Config::new();
    assert_eq!(config.host, "0.0.0.0".parse::<IpAddr>().unwrap());
    assert_eq!(config.port, 9090);
    assert_eq!(config.db_path, Some(PathBuf::from("/tmp/roster-test.db")));

    clear_env();
}

#[test]
#[serial]
fn test_config_new_ignores_invalid_env_vars() {
    clear_env();
    unsafe {
        env::set_var(HOST_ENV, "not-an-address");
        env::set_var(PORT_ENV, "99999");
    }

    let config = Config::new();
    assert_eq!(config, Config::default());

    clear_env();
}

#[test]
#[serial]
fn test_config_precedence_cli_over_env() {
    clear_env();
    unsafe {
        env::set_var(PORT_ENV, "9090");
    }

    let config = Config::new().with_port(7070);
    assert_eq!(config.port, 7070, "CLI flag should override env var");

    clear_env();
}

#[test]
#[serial]
fn test_config_builder_sets_db_path() {
    clear_env();

    let config = Config::new().with_db_path(PathBuf::from("/tmp/builder.db"));
    assert_eq!(config.db_path, Some(PathBuf::from("/tmp/builder.db")));
}
