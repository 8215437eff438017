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

//! Notice to Airmen.

use chrono::{DateTime, Utc};
use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::Altitude;

mod polygon;
mod range_ring;

pub use polygon::Polygon;
pub use range_ring::RangeRing;

/// A NOTAM describing a temporary airspace restriction.
///
/// The restricted airspace is made up of [range rings] and [polygons], each
/// with its own vertical limits. A NOTAM is decoded once from its text by an
/// [`Extractor`] and only read thereafter.
///
/// [range rings]: RangeRing
/// [polygons]: Polygon
/// [`Extractor`]: crate::extract::Extractor
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Notam {
    /// The accountable facility, usually a three letter code like `ZLC`, an
    /// airport or `GPS`.
    pub accountability: Option<String>,

    /// Location indicator the NOTAM is filed under.
    pub location: Option<String>,

    /// The NOTAM number, e.g. `01/020`.
    pub number: Option<String>,

    pub description: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub range_rings: Vec<RangeRing>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub polygons: Vec<Polygon>,

    /// Daily times the NOTAM is active in Zulu time, e.g. `1000Z-1300Z`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub daily_times: Vec<String>,

    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub caveats: Vec<String>,
}

impl Notam {
    /// Validates all range rings and polygons.
    ///
    /// Inverted altitude ranges are accepted but logged.
    pub fn validate(&self) -> Result<()> {
        for ring in &self.range_rings {
            ring.validate()?;

            if let Altitude::Range(range) = ring.altitude {
                if range.is_inverted() {
                    warn!("range ring around {} has inverted limits {range}", ring.center);
                }
            }
        }

        for polygon in &self.polygons {
            polygon.validate()?;

            if polygon.altitude.is_inverted() {
                warn!("polygon has inverted limits {}", polygon.altitude);
            }
        }

        Ok(())
    }

    /// Returns `true` if there are neither range rings nor polygons.
    pub fn is_empty(&self) -> bool {
        self.range_rings.is_empty() && self.polygons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::error::Error;
    use crate::geom::Coordinates;
    use crate::{AltitudeRange, VerticalLimit};

    fn notam() -> Notam {
        Notam {
            accountability: Some("GPS".to_string()),
            location: Some("ZLA".to_string()),
            number: Some("05/067".to_string()),
            description: Some("GPS (SCTTR GPS 24-03) MAY NOT BE AVBL".to_string()),
            polygons: vec![Polygon::new(
                ["282847N1212520W", "274903N1164760W", "301046N1134113W"]
                    .iter()
                    .map(|c| c.parse().unwrap())
                    .collect(),
                AltitudeRange::new(VerticalLimit::Sfc, VerticalLimit::Fl(400)),
            )
            .unwrap()],
            start_date: Some(Utc.with_ymd_and_hms(2024, 5, 14, 7, 0, 0).unwrap()),
            end_date: Some(Utc.with_ymd_and_hms(2024, 5, 14, 13, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn default_is_empty() {
        assert!(Notam::default().is_empty());
        assert!(!notam().is_empty());
    }

    #[test]
    fn validates_rings_bypassing_constructor() {
        let mut n = notam();
        n.range_rings.push(RangeRing {
            center: Coordinates::new("424006N", "1153225W").unwrap(),
            radius_nm: 0.0,
            altitude: VerticalLimit::Fl(250).into(),
        });

        assert!(matches!(n.validate(), Err(Error::InvalidGeometry { .. })));
    }

    #[test]
    fn validates_polygons_bypassing_constructor() {
        let mut n = notam();
        n.polygons[0].vertices.truncate(2);

        assert!(matches!(n.validate(), Err(Error::InvalidGeometry { .. })));
    }

    #[test]
    fn rejects_ring_center_beyond_the_pole() {
        let mut n = notam();
        n.range_rings.push(RangeRing {
            center: "999999N1154403W".parse().unwrap(),
            radius_nm: 80.0,
            altitude: VerticalLimit::Fl(250).into(),
        });

        assert!(matches!(
            n.validate(),
            Err(Error::MalformedCoordinate { .. })
        ));
    }

    #[test]
    fn rejects_polygon_vertex_off_the_globe() {
        let mut n = notam();
        n.polygons[0].vertices[1] = "100000N1990000W".parse().unwrap();

        assert_eq!(
            n.validate(),
            Err(Error::MalformedCoordinate {
                value: "100000N1990000W".to_string(),
                reason: "longitude should be within 180° W and E",
            })
        );
    }

    #[test]
    fn inverted_limits_are_valid() {
        let mut n = notam();
        n.polygons[0].altitude = AltitudeRange::new(VerticalLimit::Fl(400), VerticalLimit::Sfc);

        assert_eq!(n.validate(), Ok(()));
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Notam>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_extraction_output() {
        let json = r#"{
            "accountability": "ZIT",
            "location": null,
            "number": null,
            "description": "CEREMONIE",
            "range_rings": [{
                "center": {"lat": "485111N", "lon": "0022100E"},
                "radius_nm": 80.0,
                "altitude": {"type": "RANGE", "min": {"type": "SFC"}, "max": {"type": "UNL"}}
            }],
            "polygons": [],
            "daily_times": [],
            "start_date": null,
            "end_date": null,
            "caveats": []
        }"#;

        let notam: Notam = serde_json::from_str(json).expect("NOTAM should deserialize");

        assert_eq!(notam.accountability.as_deref(), Some("ZIT"));
        assert_eq!(notam.range_rings.len(), 1);
        assert_eq!(notam.range_rings[0].altitude.to_string(), "SFC-UNL");
        assert!((notam.range_rings[0].center.point().x() - 2.35).abs() < 1e-9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_dates_as_utc() {
        let value = serde_json::to_value(notam()).unwrap();

        assert_eq!(value["start_date"], "2024-05-14T07:00:00Z");
        assert_eq!(value["polygons"][0]["coordinates"][0]["lat"], "282847N");
        assert_eq!(value["polygons"][0]["altitude"]["max"]["height_ft"], 400);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rejects_malformed_coordinates() {
        let json = r#"{
            "description": null,
            "polygons": [{
                "coordinates": [
                    {"lat": "2828N", "lon": "1212520W"},
                    {"lat": "274903N", "lon": "1164760W"},
                    {"lat": "301046N", "lon": "1134113W"}
                ],
                "altitude": {"type": "RANGE", "min": {"type": "SFC"}, "max": {"type": "UNL"}}
            }]
        }"#;

        assert!(serde_json::from_str::<Notam>(json).is_err());
    }
}
