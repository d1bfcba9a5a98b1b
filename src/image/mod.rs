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

//! Status accessor for the Image API.

mod api;
mod protocol;

use async_trait::async_trait;
use osauth::Session;

use super::accessor::{ResourceKind, StatusAccessor};
use super::Result;

pub use self::protocol::Image;

/// Access to images.
///
/// Images that failed to upload end up in the `killed` status.
#[derive(Clone, Debug)]
pub struct Images {
    session: Session,
}

impl Images {
    /// Create an accessor using the given session.
    pub fn new(session: Session) -> Images {
        Images { session }
    }

    /// Fetch an image by its ID.
    pub async fn get<S: AsRef<str>>(&self, id: S) -> Result<Image> {
        api::get_image(&self.session, id).await
    }
}

#[async_trait]
impl StatusAccessor for Images {
    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Image
    }

    async fn get_status(&self, id: &str) -> Result<String> {
        Ok(self.get(id).await?.status)
    }
}
