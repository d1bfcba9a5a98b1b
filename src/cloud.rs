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

//! Cloud API.

use osauth::Session;

#[cfg(feature = "block-storage")]
use super::block_storage::{Backups, Snapshots, Volumes};
use super::config::PollConfig;
#[cfg(feature = "image")]
use super::image::Images;
#[cfg(any(feature = "block-storage", feature = "image"))]
use super::poller::Poller;
use super::Result;

/// OpenStack cloud with poll settings.
///
/// Creates pollers for every supported kind of resources, all sharing the
/// same session and configuration.
#[derive(Debug, Clone)]
pub struct Cloud {
    session: Session,
    config: PollConfig,
}

impl Cloud {
    /// Create a new cloud object from a session and a poll configuration.
    pub fn new(session: Session, config: PollConfig) -> Cloud {
        Cloud { session, config }
    }

    /// Create a new cloud object from a `clouds.yaml` entry.
    ///
    /// The poll configuration is read from environment variables, see
    /// [PollConfig::from_env](struct.PollConfig.html#method.from_env).
    pub async fn from_config<S: AsRef<str>>(cloud_name: S) -> Result<Cloud> {
        let session = Session::from_config(cloud_name).await?;
        Ok(Cloud::new(session, PollConfig::from_env()?))
    }

    /// Create a new cloud object from environment variables.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// async fn wait() -> cinder_poller::Result<()> {
    ///     let os = cinder_poller::Cloud::from_env().await?;
    ///     let status = os
    ///         .volumes()
    ///         .wait_for_status("6edbc2f4-1507-44f8-ac0d-eed1d2608d38", "available")
    ///         .await?;
    ///     assert_eq!(status, "available");
    ///     Ok(())
    /// }
    /// ```
    pub async fn from_env() -> Result<Cloud> {
        let session = Session::from_env().await?;
        Ok(Cloud::new(session, PollConfig::from_env()?))
    }

    /// Use a different poll configuration.
    pub fn with_config(mut self, config: PollConfig) -> Cloud {
        self.config = config;
        self
    }

    /// The underlying session.
    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The poll configuration.
    #[inline]
    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// Poller for volumes.
    #[cfg(feature = "block-storage")]
    pub fn volumes(&self) -> Poller<Volumes> {
        Poller::new(Volumes::new(self.session.clone()), self.config.clone())
    }

    /// Poller for volume snapshots.
    #[cfg(feature = "block-storage")]
    pub fn snapshots(&self) -> Poller<Snapshots> {
        Poller::new(Snapshots::new(self.session.clone()), self.config.clone())
    }

    /// Poller for volume backups.
    #[cfg(feature = "block-storage")]
    pub fn backups(&self) -> Poller<Backups> {
        Poller::new(Backups::new(self.session.clone()), self.config.clone())
    }

    /// Poller for images.
    #[cfg(feature = "image")]
    pub fn images(&self) -> Poller<Images> {
        Poller::new(Images::new(self.session.clone()), self.config.clone())
    }
}
