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

//! JSON structures and protocol bits for the Block Storage API.

#![allow(missing_docs)]

use std::collections::HashMap;

use serde::Deserialize;

/// A volume.
#[derive(Debug, Clone, Deserialize)]
pub struct Volume {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub size: u64,
    #[serde(default)]
    pub bootable: Option<String>,
    #[serde(default)]
    pub snapshot_id: Option<String>,
    #[serde(default, rename = "source_volid")]
    pub source_volume_id: Option<String>,
    #[serde(default)]
    pub volume_type: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// A volume root.
#[derive(Clone, Debug, Deserialize)]
pub struct VolumeRoot {
    pub volume: Volume,
}

/// A volume snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub id: String,
    pub status: String,
    pub volume_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// A snapshot root.
#[derive(Clone, Debug, Deserialize)]
pub struct SnapshotRoot {
    pub snapshot: Snapshot,
}

/// A volume backup.
#[derive(Debug, Clone, Deserialize)]
pub struct Backup {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub volume_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub container: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub fail_reason: Option<String>,
}

/// A backup root.
#[derive(Clone, Debug, Deserialize)]
pub struct BackupRoot {
    pub backup: Backup,
}
