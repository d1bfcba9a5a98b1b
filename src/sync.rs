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

//! Synchronous wrapper for a poller.
//!
//! This module is only available when the `sync` feature is enabled.

use tokio::runtime::{Builder as RuntimeBuilder, Runtime};

use super::accessor::StatusAccessor;
use super::clock::{Clock, SystemClock};
use super::poller::Poller;
use super::{Error, ErrorKind, Result};

/// A blocking wrapper for an asynchronous poller.
///
/// Runs the poller on its own single-threaded runtime, so it must not be
/// used from inside another runtime.
#[derive(Debug)]
pub struct SyncPoller<A, C = SystemClock> {
    inner: Poller<A, C>,
    runtime: Runtime,
}

impl<A: StatusAccessor, C: Clock> SyncPoller<A, C> {
    /// Create a new synchronous wrapper.
    pub fn new(poller: Poller<A, C>) -> Result<SyncPoller<A, C>> {
        let runtime = RuntimeBuilder::new_current_thread()
            .enable_io()
            .enable_time()
            .build()
            .map_err(|err| {
                Error::new(
                    ErrorKind::RuntimeFailure,
                    format!("Could not create a runtime: {}", err),
                )
                .with_source(err)
            })?;
        Ok(SyncPoller {
            inner: poller,
            runtime,
        })
    }

    /// Get a reference to the asynchronous poller.
    #[inline]
    pub fn poller(&self) -> &Poller<A, C> {
        &self.inner
    }

    /// Wait for the resource to reach the target status.
    ///
    /// See [Poller::wait_for_status](../struct.Poller.html#method.wait_for_status).
    pub fn wait_for_status<S1, S2>(&self, id: S1, target: S2) -> Result<String>
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        self.runtime
            .block_on(self.inner.wait_for_status(id, target))
    }

    /// Wait for the resource to disappear.
    pub fn wait_for_deletion<S: AsRef<str>>(&self, id: S) -> Result<()> {
        self.runtime.block_on(self.inner.wait_for_deletion(id))
    }

    /// Check once whether the resource is gone.
    pub fn is_deleted<S: AsRef<str>>(&self, id: S) -> Result<bool> {
        self.runtime.block_on(self.inner.is_deleted(id))
    }
}

impl<A: StatusAccessor, C: Clock> From<SyncPoller<A, C>> for Poller<A, C> {
    fn from(value: SyncPoller<A, C>) -> Poller<A, C> {
        value.inner
    }
}
