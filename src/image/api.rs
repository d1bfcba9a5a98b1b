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

//! Foundation bits exposing the Image API.

use osauth::services::IMAGE;
use osauth::Session;

use super::super::Result;
use super::protocol::*;

/// Get an image by its ID.
pub async fn get_image<S: AsRef<str>>(session: &Session, id: S) -> Result<Image> {
    trace!("Fetching image {}", id.as_ref());
    let image: Image = session
        .get(IMAGE, &["images", id.as_ref()])
        .fetch()
        .await?;
    trace!("Received {:?}", image);
    Ok(image)
}
