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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geom::Coordinates;
use crate::AltitudeRange;

/// An area enclosed by vertices.
///
/// The last vertex may or may not repeat the first one. The polygon is
/// closed when converted [`to_polygon`](Self::to_polygon).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    #[cfg_attr(feature = "serde", serde(rename = "coordinates"))]
    pub vertices: Vec<Coordinates>,
    pub altitude: AltitudeRange,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGeometry`] if there are less than three vertices and
    /// [`MalformedCoordinate`] if a vertex is off the globe.
    ///
    /// [`InvalidGeometry`]: Error::InvalidGeometry
    /// [`MalformedCoordinate`]: Error::MalformedCoordinate
    pub fn new(vertices: Vec<Coordinates>, altitude: AltitudeRange) -> Result<Self> {
        let polygon = Self { vertices, altitude };
        polygon.validate()?;
        Ok(polygon)
    }

    pub fn validate(&self) -> Result<()> {
        if self.vertices.len() < 3 {
            return Err(Error::InvalidGeometry {
                reason: format!(
                    "polygon has {} vertices but needs at least 3",
                    self.vertices.len()
                ),
            });
        }

        self.vertices.iter().try_for_each(Coordinates::validate)
    }

    /// Returns the polygon with the vertices in their given order.
    ///
    /// The exterior is closed by adding the first vertex if it isn't already
    /// repeated as last vertex.
    pub fn to_polygon(&self) -> Result<geo::Polygon<f64>> {
        self.validate()?;

        let mut coords: Vec<geo::Coord<f64>> =
            self.vertices.iter().map(|v| v.point().0).collect();

        if let Some(first) = coords.first().copied() {
            if coords.last() != Some(&first) {
                coords.push(first);
            }
        }

        Ok(geo::Polygon::new(geo::LineString::new(coords), vec![]))
    }
}
