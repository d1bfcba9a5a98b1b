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

//! Waiters.

use std::time::Duration;

use async_trait::async_trait;

use super::accessor::StatusAccessor;
use super::clock::Clock;
use super::config::PollConfig;
use super::error::PollDetails;
use super::{Error, ErrorKind, Result};

/// A single wait operation.
#[async_trait]
pub(crate) trait Waiter<T>: Send {
    /// Time out for this wait.
    fn default_wait_timeout(&self) -> Duration;

    /// Delay between two checks.
    fn default_delay(&self) -> Duration;

    /// Error to return when the time out is reached.
    fn timeout_error(&self, elapsed: Duration) -> Error;

    /// Check the resource once.
    ///
    /// Returns `None` if the wait should go on.
    async fn poll(&mut self, elapsed: Duration) -> Result<Option<T>>;
}

/// Run a waiter until it finishes, fails or times out.
///
/// Sleeps exactly once between two polls.
pub(crate) async fn wait<T, W, C>(waiter: &mut W, clock: &C) -> Result<T>
where
    W: Waiter<T>,
    C: Clock + ?Sized,
{
    let delay = waiter.default_delay();
    let timeout = waiter.default_wait_timeout();
    let start = clock.now();
    let mut elapsed = Duration::ZERO;
    loop {
        if let Some(result) = waiter.poll(elapsed).await? {
            return Ok(result);
        }

        clock.sleep(delay).await;

        elapsed = clock.now().saturating_duration_since(start);
        if elapsed > timeout {
            return Err(waiter.timeout_error(elapsed));
        }
    }
}

/// Wait for a resource to reach a status.
#[derive(Debug)]
pub(crate) struct StatusWaiter<'a, A> {
    accessor: &'a A,
    id: &'a str,
    target: &'a str,
    config: &'a PollConfig,
    last_status: Option<String>,
}

impl<'a, A: StatusAccessor> StatusWaiter<'a, A> {
    pub(crate) fn new(
        accessor: &'a A,
        config: &'a PollConfig,
        id: &'a str,
        target: &'a str,
    ) -> StatusWaiter<'a, A> {
        StatusWaiter {
            accessor,
            id,
            target,
            config,
            last_status: None,
        }
    }

    fn details(&self, elapsed: Duration) -> PollDetails {
        PollDetails {
            resource_kind: self.accessor.resource_kind(),
            resource_id: self.id.to_string(),
            target: Some(self.target.to_string()),
            last_status: self.last_status.clone(),
            elapsed,
            timeout: self.config.build_timeout(),
        }
    }
}

#[async_trait]
impl<'a, A: StatusAccessor> Waiter<String> for StatusWaiter<'a, A> {
    fn default_wait_timeout(&self) -> Duration {
        self.config.build_timeout()
    }

    fn default_delay(&self) -> Duration {
        self.config.build_interval()
    }

    fn timeout_error(&self, elapsed: Duration) -> Error {
        let kind = self.accessor.resource_kind();
        Error::new(
            ErrorKind::PollTimeout,
            format!(
                "Time limit of {}s exceeded while waiting for {} {} to reach status {}, \
                 last status was {}",
                self.config.build_timeout().as_secs(),
                kind,
                self.id,
                self.target,
                self.last_status.as_deref().unwrap_or("unknown")
            ),
        )
        .with_details(self.details(elapsed))
    }

    async fn poll(&mut self, elapsed: Duration) -> Result<Option<String>> {
        let kind = self.accessor.resource_kind();
        let status = self.accessor.get_status(self.id).await?;

        match self.last_status {
            Some(ref old) if *old != status => info!(
                "Status of {} {} changed from {} to {} in {} second(s)",
                kind,
                self.id,
                old,
                status,
                elapsed.as_secs()
            ),
            Some(..) => trace!(
                "Still waiting for {} {} to reach status {}, current is {}",
                kind,
                self.id,
                self.target,
                status
            ),
            None => debug!("Initial status of {} {} is {}", kind, self.id, status),
        }
        self.last_status = Some(status.clone());

        if status == self.config.error_status(kind) {
            debug!(
                "Failed to move {} {} to {} - status is {}",
                kind, self.id, self.target, status
            );
            Err(Error::new(
                ErrorKind::ErrorStateReached,
                format!("{} {} got into {} state", kind, self.id, status),
            )
            .with_details(self.details(elapsed)))
        } else if status == self.target {
            debug!("{} {} reached status {}", kind, self.id, status);
            Ok(Some(status))
        } else {
            Ok(None)
        }
    }
}

/// Wait for resource deletion.
#[derive(Debug)]
pub(crate) struct DeletionWaiter<'a, A> {
    accessor: &'a A,
    config: &'a PollConfig,
    id: &'a str,
    last_status: Option<String>,
}

impl<'a, A: StatusAccessor> DeletionWaiter<'a, A> {
    pub(crate) fn new(accessor: &'a A, config: &'a PollConfig, id: &'a str) -> DeletionWaiter<'a, A> {
        DeletionWaiter {
            accessor,
            config,
            id,
            last_status: None,
        }
    }
}

#[async_trait]
impl<'a, A: StatusAccessor> Waiter<()> for DeletionWaiter<'a, A> {
    fn default_wait_timeout(&self) -> Duration {
        self.config.build_timeout()
    }

    fn default_delay(&self) -> Duration {
        self.config.build_interval()
    }

    fn timeout_error(&self, elapsed: Duration) -> Error {
        let kind = self.accessor.resource_kind();
        let timeout = self.config.build_timeout();
        Error::new(
            ErrorKind::PollTimeout,
            format!(
                "Time limit of {}s exceeded while waiting for {} {} to be deleted, \
                 last status was {}",
                timeout.as_secs(),
                kind,
                self.id,
                self.last_status.as_deref().unwrap_or("unknown")
            ),
        )
        .with_details(PollDetails {
            resource_kind: kind,
            resource_id: self.id.to_string(),
            target: None,
            last_status: self.last_status.clone(),
            elapsed,
            timeout,
        })
    }

    async fn poll(&mut self, _elapsed: Duration) -> Result<Option<()>> {
        let kind = self.accessor.resource_kind();
        match self.accessor.get_status(self.id).await {
            Ok(status) => {
                trace!(
                    "Still waiting for {} {} to be deleted, current status is {}",
                    kind,
                    self.id,
                    status
                );
                self.last_status = Some(status);
                Ok(None)
            }
            Err(ref e) if e.kind() == ErrorKind::ResourceNotFound => {
                debug!("{} {} was deleted", kind, self.id);
                Ok(Some(()))
            }
            Err(e) => {
                debug!("Failed to delete {} {} - {}", kind, self.id, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
pub mod test {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::{wait, Waiter};
    use crate::clock::ManualClock;
    use crate::{Error, ErrorKind, Result};

    struct Countdown {
        left: usize,
        polled_at: Vec<Duration>,
    }

    #[async_trait]
    impl Waiter<usize> for Countdown {
        fn default_wait_timeout(&self) -> Duration {
            Duration::from_secs(10)
        }

        fn default_delay(&self) -> Duration {
            Duration::from_secs(3)
        }

        fn timeout_error(&self, elapsed: Duration) -> Error {
            Error::new(ErrorKind::PollTimeout, format!("{:?}", elapsed))
        }

        async fn poll(&mut self, elapsed: Duration) -> Result<Option<usize>> {
            self.polled_at.push(elapsed);
            if self.left == 0 {
                Ok(Some(self.polled_at.len()))
            } else {
                self.left -= 1;
                Ok(None)
            }
        }
    }

    #[tokio::test]
    async fn test_wait_sleeps_once_per_poll() {
        let clock = ManualClock::new();
        let mut waiter = Countdown {
            left: 2,
            polled_at: Vec::new(),
        };
        assert_eq!(wait(&mut waiter, &clock).await.unwrap(), 3);
        assert_eq!(
            waiter.polled_at,
            vec![
                Duration::ZERO,
                Duration::from_secs(3),
                Duration::from_secs(6)
            ]
        );
        assert_eq!(clock.sleeps().len(), 2);
    }

    #[tokio::test]
    async fn test_wait_timeout_after_last_sleep() {
        let clock = ManualClock::new();
        let mut waiter = Countdown {
            left: usize::MAX,
            polled_at: Vec::new(),
        };
        let err = wait(&mut waiter, &clock).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PollTimeout);
        // Polled at 0, 3, 6 and 9 seconds, timed out at 12.
        assert_eq!(waiter.polled_at.len(), 4);
        assert_eq!(clock.elapsed(), Duration::from_secs(12));
    }
}
