// Copyright 2026 Dmitry Tantsur <divius.inside@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Poll configuration.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::accessor::ResourceKind;
use super::{Error, ErrorKind, Result};

/// Default delay between two status checks.
pub const DEFAULT_BUILD_INTERVAL: Duration = Duration::from_secs(10);

/// Default time to wait for a resource.
pub const DEFAULT_BUILD_TIMEOUT: Duration = Duration::from_secs(300);

const ENV_BUILD_INTERVAL: &str = "OS_BUILD_INTERVAL";
const ENV_BUILD_TIMEOUT: &str = "OS_BUILD_TIMEOUT";

/// Settings shared by all pollers created from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    build_interval: Duration,
    build_timeout: Duration,
    error_statuses: HashMap<ResourceKind, String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    build_interval: Option<u64>,
    #[serde(default)]
    build_timeout: Option<u64>,
    #[serde(default)]
    error_statuses: HashMap<ResourceKind, String>,
}

impl Default for PollConfig {
    fn default() -> PollConfig {
        PollConfig {
            build_interval: DEFAULT_BUILD_INTERVAL,
            build_timeout: DEFAULT_BUILD_TIMEOUT,
            error_statuses: HashMap::new(),
        }
    }
}

impl PollConfig {
    /// Create a configuration with the given interval and time out.
    ///
    /// Both values must be non-zero.
    pub fn new(build_interval: Duration, build_timeout: Duration) -> Result<PollConfig> {
        if build_interval.is_zero() {
            return Err(Error::new(
                ErrorKind::InvalidConfig,
                "build_interval must be positive",
            ));
        }

        if build_timeout.is_zero() {
            return Err(Error::new(
                ErrorKind::InvalidConfig,
                "build_timeout must be positive",
            ));
        }

        Ok(PollConfig {
            build_interval,
            build_timeout,
            error_statuses: HashMap::new(),
        })
    }

    /// Load the configuration from environment variables.
    ///
    /// Reads `OS_BUILD_INTERVAL` and `OS_BUILD_TIMEOUT` as whole seconds,
    /// missing variables fall back to the defaults.
    pub fn from_env() -> Result<PollConfig> {
        PollConfig::from_lookup(|name| env::var(name).ok())
    }

    /// Load the configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<PollConfig> {
        let path = path.as_ref();
        debug!("Loading poll configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|err| {
            Error::new(
                ErrorKind::InvalidConfig,
                format!("Cannot read {}: {}", path.display(), err),
            )
            .with_source(err)
        })?;
        PollConfig::from_yaml(&content)
    }

    /// Parse the configuration from a YAML document.
    ///
    /// All keys are optional:
    ///
    /// ```yaml
    /// build_interval: 5
    /// build_timeout: 120
    /// error_statuses:
    ///   image: killed
    /// ```
    pub fn from_yaml(content: &str) -> Result<PollConfig> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        let mut config = PollConfig::new(
            file.build_interval
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_BUILD_INTERVAL),
            file.build_timeout
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_BUILD_TIMEOUT),
        )?;
        config.error_statuses = file.error_statuses;
        Ok(config)
    }

    fn from_lookup<F>(lookup: F) -> Result<PollConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seconds = |name: &str, default: Duration| -> Result<Duration> {
            match lookup(name) {
                Some(value) => value.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
                    Error::new(
                        ErrorKind::InvalidConfig,
                        format!("{} must be a number of seconds, got {:?}", name, value),
                    )
                }),
                None => Ok(default),
            }
        };

        PollConfig::new(
            seconds(ENV_BUILD_INTERVAL, DEFAULT_BUILD_INTERVAL)?,
            seconds(ENV_BUILD_TIMEOUT, DEFAULT_BUILD_TIMEOUT)?,
        )
    }

    /// Override the terminal error status for a resource kind.
    pub fn with_error_status<S: Into<String>>(mut self, kind: ResourceKind, status: S) -> Self {
        let _ = self.error_statuses.insert(kind, status.into());
        self
    }

    /// Delay between two status checks.
    #[inline]
    pub fn build_interval(&self) -> Duration {
        self.build_interval
    }

    /// Maximum time to wait for a resource.
    #[inline]
    pub fn build_timeout(&self) -> Duration {
        self.build_timeout
    }

    /// Terminal error status for the given resource kind.
    pub fn error_status(&self, kind: ResourceKind) -> &str {
        self.error_statuses
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_error_status())
    }
}

#[cfg(test)]
pub mod test {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::{PollConfig, DEFAULT_BUILD_INTERVAL, DEFAULT_BUILD_TIMEOUT};
    use crate::{ErrorKind, ResourceKind};

    #[test]
    fn test_new_rejects_zero() {
        let err = PollConfig::new(Duration::ZERO, Duration::from_secs(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        let err = PollConfig::new(Duration::from_secs(1), Duration::ZERO).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_defaults() {
        let config = PollConfig::default();
        assert_eq!(config.build_interval(), DEFAULT_BUILD_INTERVAL);
        assert_eq!(config.build_timeout(), DEFAULT_BUILD_TIMEOUT);
        assert_eq!(config.error_status(ResourceKind::Volume), "error");
        assert_eq!(config.error_status(ResourceKind::Image), "killed");
    }

    #[test]
    fn test_from_yaml() {
        let config = PollConfig::from_yaml(
            "build_interval: 2\nbuild_timeout: 60\nerror_statuses:\n  backup: failed\n",
        )
        .unwrap();
        assert_eq!(config.build_interval(), Duration::from_secs(2));
        assert_eq!(config.build_timeout(), Duration::from_secs(60));
        assert_eq!(config.error_status(ResourceKind::Backup), "failed");
        assert_eq!(config.error_status(ResourceKind::Snapshot), "error");
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = PollConfig::from_yaml("build_timeout: 30").unwrap();
        assert_eq!(config.build_interval(), DEFAULT_BUILD_INTERVAL);
        assert_eq!(config.build_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_from_yaml_invalid() {
        for content in &[
            "build_interval: 0",
            "build_interval: soon",
            "build_timeout: 10\nretries: 3",
            "error_statuses:\n  server: error",
        ] {
            let err = PollConfig::from_yaml(content).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidConfig, "{}", content);
        }
    }

    #[test]
    fn test_from_file_missing() {
        let err = PollConfig::from_file("/nonexistent/cinder-poller.yaml").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_from_lookup() {
        let env: HashMap<&str, &str> = [("OS_BUILD_INTERVAL", "1"), ("OS_BUILD_TIMEOUT", " 45 ")]
            .into_iter()
            .collect();
        let config = PollConfig::from_lookup(|name| env.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(config.build_interval(), Duration::from_secs(1));
        assert_eq!(config.build_timeout(), Duration::from_secs(45));
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = PollConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, PollConfig::default());
    }

    #[test]
    fn test_from_lookup_invalid() {
        let err = PollConfig::from_lookup(|name| {
            if name == "OS_BUILD_TIMEOUT" {
                Some("forever".to_string())
            } else {
                None
            }
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);

        let err = PollConfig::from_lookup(|_| Some("0".to_string())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_with_error_status() {
        let config = PollConfig::default().with_error_status(ResourceKind::Image, "error");
        assert_eq!(config.error_status(ResourceKind::Image), "error");
    }
}
