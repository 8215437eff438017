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

use geo::{LineString, Point};

use super::geodesic;
use crate::error::{Error, Result};

/// Approximates a circle around `center` as closed ring of `segments + 1`
/// points.
///
/// The points are [projected](geodesic::destination) from the center at
/// bearings in steps of `360° / segments`, starting north and turning
/// clockwise. The first point is repeated as last point to close the ring.
///
/// A radius of zero is valid and gives a degenerate ring of points all
/// located at the center.
///
/// # Errors
///
/// Returns [`InvalidGeometry`] if `segments` is zero or the radius is negative
/// or not finite.
///
/// [`InvalidGeometry`]: Error::InvalidGeometry
pub fn circle_polygon(
    center: Point<f64>,
    radius_m: f64,
    segments: usize,
) -> Result<LineString<f64>> {
    if segments == 0 {
        return Err(Error::InvalidGeometry {
            reason: "a circle needs at least one segment".to_string(),
        });
    }

    if !radius_m.is_finite() || radius_m < 0.0 {
        return Err(Error::InvalidGeometry {
            reason: format!("circle radius of {radius_m} m"),
        });
    }

    let step = 360.0 / segments as f64;
    let mut coords = Vec::with_capacity(segments + 1);

    // multiply instead of accumulating the step to get exactly `segments`
    // bearings below 360°
    for i in 0..segments {
        let point = geodesic::destination(center, i as f64 * step, radius_m);
        coords.push(point.0);
    }

    coords.push(coords[0]);

    Ok(LineString::new(coords))
}
