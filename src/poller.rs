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

//! Generic resource status poller.
//!
//! A [Poller](struct.Poller.html) combines a status accessor for one kind of
//! resources, a clock and a poll configuration. It never changes the
//! resources it watches, it only observes them until they reach the
//! requested status, fail or run out of time.

use super::accessor::{ResourceKind, StatusAccessor};
use super::clock::{Clock, SystemClock};
use super::config::PollConfig;
use super::waiter::{self, DeletionWaiter, StatusWaiter};
use super::{Error, ErrorKind, Result};

/// Waits for resources of one kind.
#[derive(Debug, Clone)]
pub struct Poller<A, C = SystemClock> {
    accessor: A,
    clock: C,
    config: PollConfig,
}

impl<A: StatusAccessor> Poller<A> {
    /// Create a poller using the wall clock.
    pub fn new(accessor: A, config: PollConfig) -> Poller<A> {
        Poller::with_clock(accessor, config, SystemClock)
    }
}

impl<A: StatusAccessor, C: Clock> Poller<A, C> {
    /// Create a poller with a custom clock.
    pub fn with_clock(accessor: A, config: PollConfig, clock: C) -> Poller<A, C> {
        Poller {
            accessor,
            clock,
            config,
        }
    }

    /// The underlying status accessor.
    #[inline]
    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    /// The clock in use.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The poll configuration.
    #[inline]
    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// Kind of resources this poller watches.
    #[inline]
    pub fn resource_kind(&self) -> ResourceKind {
        self.accessor.resource_kind()
    }

    /// Wait for the resource to reach the target status.
    ///
    /// Returns the target status on success. Fails with `ErrorStateReached`
    /// as soon as the resource reports the terminal error status of its
    /// kind, and with `PollTimeout` if the target is not reached within the
    /// configured build time out. Errors from the accessor are returned as
    /// they are.
    pub async fn wait_for_status<S1, S2>(&self, id: S1, target: S2) -> Result<String>
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        let id = id.as_ref();
        let target = target.as_ref();
        self.check_id(id)?;
        debug!(
            "Waiting for {} {} to reach status {}",
            self.resource_kind(),
            id,
            target
        );
        let mut waiter = StatusWaiter::new(&self.accessor, &self.config, id, target);
        waiter::wait(&mut waiter, &self.clock).await
    }

    /// Wait for the resource to disappear.
    ///
    /// Finishes once the accessor reports `ResourceNotFound`.
    pub async fn wait_for_deletion<S: AsRef<str>>(&self, id: S) -> Result<()> {
        let id = id.as_ref();
        self.check_id(id)?;
        debug!("Waiting for {} {} to be deleted", self.resource_kind(), id);
        let mut waiter = DeletionWaiter::new(&self.accessor, &self.config, id);
        waiter::wait(&mut waiter, &self.clock).await
    }

    /// Check once whether the resource is gone.
    pub async fn is_deleted<S: AsRef<str>>(&self, id: S) -> Result<bool> {
        let id = id.as_ref();
        self.check_id(id)?;
        match self.accessor.get_status(id).await {
            Ok(..) => Ok(false),
            Err(ref e) if e.kind() == ErrorKind::ResourceNotFound => Ok(true),
            Err(e) => Err(e),
        }
    }

    fn check_id(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Empty {} ID", self.resource_kind()),
            ))
        } else {
            Ok(())
        }
    }
}
