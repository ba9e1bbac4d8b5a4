#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use pontolog::config::Config;
use pontolog::core::service::PontoService;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pont() -> Command {
    cargo_bin_cmd!("pontolog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pontolog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Open a service on a throwaway database (schema created on open)
pub fn service_for(db_path: &str) -> PontoService {
    let cfg = Config {
        database: db_path.to_string(),
        ..Config::default()
    };
    PontoService::open(&cfg).expect("open service")
}

/// Same, with an explicit TTL for the bulk-read caches
pub fn service_with_ttl(db_path: &str, ttl_secs: u64) -> PontoService {
    let cfg = Config {
        database: db_path.to_string(),
        cache_ttl_secs: ttl_secs,
        ..Config::default()
    };
    PontoService::open(&cfg).expect("open service")
}

/// One fixed-width punch line: 10-char record id, 24-char timestamp,
/// 11-char employee code, optional trailer
pub fn punch_line(timestamp: &str, cpf: &str, trailer: &str) -> String {
    format!("{:<10}{}{:<11}{}", "0000000010", timestamp, cpf, trailer)
}

/// Write a punch file into the temp dir and return its path
pub fn write_punch_file(name: &str, lines: &[String]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punches.txt", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, lines.join("\n")).expect("write punch file");
    p
}
