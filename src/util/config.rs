use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use tracing::Level;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorConfig {
    #[serde(default = "default_token")]
    pub token: u32,
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_musics_url")]
    pub musics_url: String,
    #[serde(default = "default_lyric_url")]
    pub lyric_url: String,
    #[serde(default = "default_hot_key_url")]
    pub hot_key_url: String,
    #[serde(default = "default_search_url")]
    pub search_url: String,
}

fn default_token() -> u32 {
    5381
}

fn default_origin() -> String {
    "https://y.qq.com/".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_musics_url() -> String {
    "https://u.y.qq.com/cgi-bin/musics.fcg".to_string()
}

fn default_lyric_url() -> String {
    "https://c.y.qq.com/lyric/fcgi-bin/fcg_query_lyric_new.fcg".to_string()
}

fn default_hot_key_url() -> String {
    "https://c.y.qq.com/splcloud/fcgi-bin/gethotkey.fcg".to_string()
}

fn default_search_url() -> String {
    "https://c.y.qq.com/soso/fcgi-bin/search_for_qq_cp".to_string()
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            token: default_token(),
            origin: default_origin(),
            timeout_secs: default_timeout_secs(),
            musics_url: default_musics_url(),
            lyric_url: default_lyric_url(),
            hot_key_url: default_hot_key_url(),
            search_url: default_search_url(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub port: u16,
    pub address: String,
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub vendor: VendorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    pub fn new() -> Self {
        let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "./config.json".to_string());
        let config = fs::read_to_string(&path).expect("Missing config file");
        serde_json::from_str::<Config>(&config).expect("Invalid config file")
    }

    pub fn log_level(&self) -> Level {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.parse::<Level>().ok())
            .unwrap_or(Level::DEBUG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_section_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "port": 9002, "address": "127.0.0.1" }"#).unwrap();

        assert_eq!(config.vendor.token, 5381);
        assert_eq!(config.vendor.musics_url, "https://u.y.qq.com/cgi-bin/musics.fcg");
        assert_eq!(config.log_level(), Level::DEBUG);
    }

    #[test]
    fn partial_vendor_section_keeps_other_defaults() {
        let config: Config = serde_json::from_str(
            r#"{
                "port": 9002,
                "address": "0.0.0.0",
                "logging": { "level": "warn" },
                "vendor": { "timeoutSecs": 5 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.vendor.timeout_secs, 5);
        assert_eq!(config.vendor.origin, "https://y.qq.com/");
        assert_eq!(config.log_level(), Level::WARN);
    }
}
