// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

//! Geometry on the WGS84 ellipsoid.

mod circle;
mod coordinate;
mod geodesic;

pub use circle::circle_polygon;
pub use coordinate::{decode, encode, Coordinates};
pub use geodesic::{destination, ANTIMERIDIAN_CLAMP_LONGITUDE};
