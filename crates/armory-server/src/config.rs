// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub data_root: PathBuf,
    pub images_root: PathBuf,
    /// Freshness window advertised on cacheable JSON responses.
    pub cache_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
            data_root: PathBuf::from("assets/data"),
            images_root: PathBuf::from("assets/images"),
            cache_ttl: Duration::from_secs(300),
        }
    }
}
