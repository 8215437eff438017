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

use geo::{Destination, Geodesic, Point};
use log::trace;

/// Longitude to which destinations are clamped that would otherwise wrap from
/// the western into the eastern hemisphere.
pub const ANTIMERIDIAN_CLAMP_LONGITUDE: f64 = -179.99;

/// Returns the point reached from `origin` on the initial `bearing_deg` after
/// `distance_m`.
///
/// Solves the direct geodesic problem on the WGS84 ellipsoid using Karney's
/// algorithm. Both points have the longitude as `x` and the latitude as `y`.
///
/// # Limitations
///
/// If the origin is in the western hemisphere (negative longitude) and the
/// destination's longitude is positive, the longitude is clamped to
/// [`ANTIMERIDIAN_CLAMP_LONGITUDE`]. This keeps rings close to the
/// antimeridian from being rendered across the whole map, but flattens their
/// eastern edge. It applies to the prime meridian as well, so rings around a
/// western origin that reach into the eastern hemisphere are distorted too.
pub fn destination(origin: Point<f64>, bearing_deg: f64, distance_m: f64) -> Point<f64> {
    let mut dest = Geodesic.destination(origin, bearing_deg, distance_m);

    if origin.x() < 0.0 && dest.x() > 0.0 {
        trace!(
            "clamping longitude {} of destination from {:?} on {bearing_deg}°",
            dest.x(),
            origin
        );
        dest.set_x(ANTIMERIDIAN_CLAMP_LONGITUDE);
    }

    dest
}
