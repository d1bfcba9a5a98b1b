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

//! Access to the status of remote resources.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::Result;

/// Kind of a remote resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Block storage volume.
    Volume,
    /// Volume snapshot.
    Snapshot,
    /// Volume backup.
    Backup,
    /// Image service image.
    Image,
}

impl ResourceKind {
    /// Status that the resource never leaves without external intervention.
    pub fn default_error_status(&self) -> &'static str {
        match self {
            ResourceKind::Image => "killed",
            _ => "error",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Volume => "volume",
            ResourceKind::Snapshot => "snapshot",
            ResourceKind::Backup => "backup",
            ResourceKind::Image => "image",
        })
    }
}

/// Something that can fetch the current status of a resource.
///
/// Implementations fail with `ResourceNotFound` when the resource does not
/// exist and with `InvalidInput` when the ID is malformed. Errors are never
/// retried by the poller.
#[async_trait]
pub trait StatusAccessor: Send + Sync {
    /// Kind of resources this accessor works with.
    fn resource_kind(&self) -> ResourceKind;

    /// Fetch the current status of the resource.
    async fn get_status(&self, id: &str) -> Result<String>;
}

#[async_trait]
impl<T: StatusAccessor + ?Sized> StatusAccessor for &T {
    fn resource_kind(&self) -> ResourceKind {
        (**self).resource_kind()
    }

    async fn get_status(&self, id: &str) -> Result<String> {
        (**self).get_status(id).await
    }
}

#[async_trait]
impl<T: StatusAccessor + ?Sized> StatusAccessor for Arc<T> {
    fn resource_kind(&self) -> ResourceKind {
        (**self).resource_kind()
    }

    async fn get_status(&self, id: &str) -> Result<String> {
        (**self).get_status(id).await
    }
}

#[async_trait]
impl<T: StatusAccessor + ?Sized> StatusAccessor for Box<T> {
    fn resource_kind(&self) -> ResourceKind {
        (**self).resource_kind()
    }

    async fn get_status(&self, id: &str) -> Result<String> {
        (**self).get_status(id).await
    }
}

#[cfg(test)]
pub mod test {
    use super::ResourceKind;

    #[test]
    fn test_default_error_status() {
        assert_eq!(ResourceKind::Volume.default_error_status(), "error");
        assert_eq!(ResourceKind::Snapshot.default_error_status(), "error");
        assert_eq!(ResourceKind::Backup.default_error_status(), "error");
        assert_eq!(ResourceKind::Image.default_error_status(), "killed");
    }

    #[test]
    fn test_display() {
        assert_eq!(ResourceKind::Snapshot.to_string(), "snapshot");
        assert_eq!(ResourceKind::Image.to_string(), "image");
    }
}
