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

//! Foundation bits exposing the Block Storage API.

use osauth::services::BLOCK_STORAGE;
use osauth::Session;

use super::super::Result;
use super::protocol::*;

/// Get a volume by its ID.
pub async fn get_volume<S: AsRef<str>>(session: &Session, id: S) -> Result<Volume> {
    trace!("Fetching volume {}", id.as_ref());
    let root: VolumeRoot = session
        .get(BLOCK_STORAGE, &["volumes", id.as_ref()])
        .fetch()
        .await?;
    trace!("Received {:?}", root.volume);
    Ok(root.volume)
}

/// Get a snapshot by its ID.
pub async fn get_snapshot<S: AsRef<str>>(session: &Session, id: S) -> Result<Snapshot> {
    trace!("Fetching snapshot {}", id.as_ref());
    let root: SnapshotRoot = session
        .get(BLOCK_STORAGE, &["snapshots", id.as_ref()])
        .fetch()
        .await?;
    trace!("Received {:?}", root.snapshot);
    Ok(root.snapshot)
}

/// Get a backup by its ID.
pub async fn get_backup<S: AsRef<str>>(session: &Session, id: S) -> Result<Backup> {
    trace!("Fetching backup {}", id.as_ref());
    let root: BackupRoot = session
        .get(BLOCK_STORAGE, &["backups", id.as_ref()])
        .fetch()
        .await?;
    trace!("Received {:?}", root.backup);
    Ok(root.backup)
}
