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

//! Resource status polling for OpenStack block storage tests.
//!
//! Integration tests against Cinder and Glance spend most of their time
//! waiting: a volume is created and must become `available`, a backup must
//! finish, an image must become `active`. This crate provides one generic
//! [Poller](struct.Poller.html) for that, parameterized over a
//! [StatusAccessor](trait.StatusAccessor.html) and a
//! [Clock](trait.Clock.html).
//!
//! A wait finishes in one of three ways:
//!
//! * the resource reaches the target status, which is returned;
//! * the resource reports the terminal error status of its kind (`error`
//!   for volumes, snapshots and backups, `killed` for images), which fails
//!   with `ErrorKind::ErrorStateReached` without waiting any longer;
//! * the build time out passes, which fails with `ErrorKind::PollTimeout`.
//!
//! Errors from the accessor (for example `ResourceNotFound` when the
//! resource was deleted) are returned unchanged.
//!
//! # Features
//!
//! * `block-storage`: accessors for volumes, snapshots and backups
//! * `image`: accessor for images
//! * `sync`: blocking [SyncPoller](sync/struct.SyncPoller.html)
//! * `native-tls` or `rustls`: TLS backend of the session

// NOTE: we do not use generic deny(warnings) to avoid breakages with new
// versions of the compiler. Add more warnings here as you discover them.
// Taken from https://github.com/rust-unofficial/patterns/
#![deny(
    dead_code,
    improper_ctypes,
    missing_debug_implementations,
    missing_docs,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    while_true
)]

#[macro_use]
extern crate log;

mod accessor;
#[cfg(feature = "block-storage")]
pub mod block_storage;
mod clock;
mod cloud;
mod config;
mod error;
#[cfg(feature = "image")]
pub mod image;
mod poller;
#[cfg(feature = "sync")]
pub mod sync;
mod waiter;

pub use crate::accessor::{ResourceKind, StatusAccessor};
pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::cloud::Cloud;
pub use crate::config::{PollConfig, DEFAULT_BUILD_INTERVAL, DEFAULT_BUILD_TIMEOUT};
pub use crate::error::{Error, ErrorKind, PollDetails, Result};
pub use crate::poller::Poller;
