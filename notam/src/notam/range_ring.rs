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
use crate::fc;
use crate::geom::{circle_polygon, Coordinates};
use crate::Altitude;

/// A circular restricted area around a center.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangeRing {
    pub center: Coordinates,
    pub radius_nm: f64,
    pub altitude: Altitude,
}

impl RangeRing {
    /// Creates a range ring with a radius in nautical miles.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGeometry`] if the radius isn't positive and
    /// [`MalformedCoordinate`] if the center is off the globe.
    ///
    /// [`InvalidGeometry`]: Error::InvalidGeometry
    /// [`MalformedCoordinate`]: Error::MalformedCoordinate
    pub fn new(center: Coordinates, radius_nm: f64, altitude: impl Into<Altitude>) -> Result<Self> {
        let ring = Self {
            center,
            radius_nm,
            altitude: altitude.into(),
        };

        ring.validate()?;
        Ok(ring)
    }

    /// Checks that the center is on the globe and the radius is a positive,
    /// finite number.
    pub fn validate(&self) -> Result<()> {
        self.center.validate()?;

        if self.radius_nm.is_finite() && self.radius_nm > 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidGeometry {
                reason: format!(
                    "range ring around {} has a radius of {} NM",
                    self.center, self.radius_nm
                ),
            })
        }
    }

    pub fn radius_m(&self) -> f64 {
        fc::nautical_miles_to_meters(self.radius_nm)
    }

    /// Returns the ring as polygon approximated by `segments` geodesic
    /// segments.
    pub fn to_polygon(&self, segments: usize) -> Result<geo::Polygon<f64>> {
        self.validate()?;
        let exterior = circle_polygon(self.center.point(), self.radius_m(), segments)?;
        Ok(geo::Polygon::new(exterior, vec![]))
    }
}
