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

//! Status accessors for the Block Storage API.

mod api;
mod protocol;

use async_trait::async_trait;
use osauth::Session;

use super::accessor::{ResourceKind, StatusAccessor};
use super::Result;

pub use self::protocol::{Backup, Snapshot, Volume};

macro_rules! block_storage_accessor {
    ($(#[$attr:meta])* $name:ident -> $kind:ident, $item:ident, $getter:ident) => {
        $(#[$attr])*
        #[derive(Clone, Debug)]
        pub struct $name {
            session: Session,
        }

        impl $name {
            /// Create an accessor using the given session.
            pub fn new(session: Session) -> $name {
                $name { session }
            }

            /// Fetch the resource by its ID.
            pub async fn get<S: AsRef<str>>(&self, id: S) -> Result<$item> {
                api::$getter(&self.session, id).await
            }
        }

        #[async_trait]
        impl StatusAccessor for $name {
            fn resource_kind(&self) -> ResourceKind {
                ResourceKind::$kind
            }

            async fn get_status(&self, id: &str) -> Result<String> {
                Ok(self.get(id).await?.status)
            }
        }
    };
}

block_storage_accessor! {
    #[doc = "Access to volumes."]
    Volumes -> Volume, Volume, get_volume
}

block_storage_accessor! {
    #[doc = "Access to volume snapshots."]
    Snapshots -> Snapshot, Snapshot, get_snapshot
}

block_storage_accessor! {
    #[doc = "Access to volume backups."]
    Backups -> Backup, Backup, get_backup
}
