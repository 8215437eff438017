// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Joe Pearson
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

//! GeoJSON export.

mod notam;

pub use notam::{DATE_FORMAT, RANGE_RING_SEGMENTS};

/// Converts a rectangle into a GeoJSON bounding box of
/// `[west, south, east, north]`.
fn rect_to_bbox(rect: geo::Rect<f64>) -> ::geojson::Bbox {
    vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]
}
