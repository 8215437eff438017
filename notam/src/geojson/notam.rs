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

use ::geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use chrono::{DateTime, Utc};
use geo::BoundingRect;
use log::{debug, trace};

use super::rect_to_bbox;
use crate::error::{Error, Result};
use crate::{Altitude, Notam};

/// Number of segments a range ring is approximated with.
pub const RANGE_RING_SEGMENTS: usize = 300;

/// Format of the start and end date properties.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

impl Notam {
    /// Returns the NOTAM's range rings and polygons as GeoJSON.
    ///
    /// Each range ring is approximated by a polygon of
    /// [`RANGE_RING_SEGMENTS`] segments. See
    /// [`to_geojson_with_segments`](Self::to_geojson_with_segments).
    pub fn to_geojson(&self) -> Result<FeatureCollection> {
        self.to_geojson_with_segments(RANGE_RING_SEGMENTS)
    }

    /// Returns the NOTAM's range rings and polygons as GeoJSON.
    ///
    /// Every range ring and then every polygon becomes one feature with a
    /// polygon geometry, in the order they have in the NOTAM. All features
    /// share the NOTAM's number, title, accountability, start and end date
    /// and daily times as properties, but have the altitude of their own ring
    /// or polygon.
    ///
    /// # Errors
    ///
    /// The NOTAM is [validated](Self::validate) before any geometry is
    /// computed and no feature collection is returned if it's invalid.
    /// [`InvalidGeometry`] is returned if `segments` is zero.
    ///
    /// [`InvalidGeometry`]: Error::InvalidGeometry
    pub fn to_geojson_with_segments(&self, segments: usize) -> Result<FeatureCollection> {
        if segments == 0 {
            return Err(Error::InvalidGeometry {
                reason: "range rings need at least one segment".to_string(),
            });
        }

        self.validate()?;

        let mut features = Vec::with_capacity(self.range_rings.len() + self.polygons.len());

        for ring in &self.range_rings {
            trace!(
                "sampling range ring of {} NM around {}",
                ring.radius_nm,
                ring.center
            );
            let polygon = ring.to_polygon(segments)?;
            features.push(self.feature(&polygon, &ring.altitude));
        }

        for polygon in &self.polygons {
            trace!("adding polygon of {} vertices", polygon.vertices.len());
            let altitude = Altitude::Range(polygon.altitude);
            features.push(self.feature(&polygon.to_polygon()?, &altitude));
        }

        debug!(
            "exported NOTAM {:?}: {} feature(s)",
            self.number.as_deref().unwrap_or_default(),
            features.len()
        );

        Ok(FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        })
    }

    fn feature(&self, polygon: &geo::Polygon<f64>, altitude: &Altitude) -> Feature {
        Feature {
            bbox: polygon.bounding_rect().map(rect_to_bbox),
            geometry: Some(Geometry::new(Value::from(polygon))),
            id: None,
            properties: Some(self.properties(altitude)),
            foreign_members: None,
        }
    }

    fn properties(&self, altitude: &Altitude) -> JsonObject {
        let mut props = JsonObject::new();

        props.insert("number".to_string(), self.number.clone().into());
        props.insert("title".to_string(), self.description.clone().into());
        props.insert(
            "accountability".to_string(),
            self.accountability.clone().into(),
        );
        props.insert("start_date".to_string(), format_date(self.start_date));
        props.insert("end_date".to_string(), format_date(self.end_date));
        props.insert("daily_times".to_string(), self.daily_times.clone().into());
        props.insert("altitude".to_string(), altitude.to_string().into());

        props
    }
}

fn format_date(date: Option<DateTime<Utc>>) -> JsonValue {
    date.map(|d| d.format(DATE_FORMAT).to_string()).into()
}
