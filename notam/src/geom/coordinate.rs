// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use geo::Point;
use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fc;

const LAT_LEN: usize = 7;
const LON_LEN: usize = 8;

/// Decodes a 15 character sexagesimal coordinate like `422750N1154403W`.
///
/// The latitude `DDMMSS[N|S]` is followed by the longitude `DDDMMSS[W|E]`.
/// Returns the position as [`Point`] with longitude as `x` and latitude as
/// `y`.
///
/// Only the format is checked. Components that are out of range, e.g. a
/// minute of 75 or a latitude beyond 90°, are decoded as they are and logged
/// as warning. [`Coordinates::validate`] rejects points off the globe.
///
/// # Errors
///
/// Returns [`MalformedCoordinate`] if the string isn't 15 characters long, any
/// degree, minute or second isn't numeric or a hemisphere letter is invalid.
///
/// [`MalformedCoordinate`]: Error::MalformedCoordinate
pub fn decode(coord: &str) -> Result<Point<f64>> {
    let bytes = coord.as_bytes();

    if bytes.len() != LAT_LEN + LON_LEN {
        return Err(Error::MalformedCoordinate {
            value: coord.to_string(),
            reason: "should be 15 characters long",
        });
    }

    let lat = decode_axis(coord, &bytes[..LAT_LEN], Axis::Latitude)?;
    let lon = decode_axis(coord, &bytes[LAT_LEN..], Axis::Longitude)?;

    Ok(Point::new(lon, lat))
}

/// Encodes a point as 15 character sexagesimal coordinate.
///
/// The position is rounded to the nearest second.
pub fn encode(point: Point<f64>) -> String {
    let (lat_deg, lat_min, lat_sec) = to_dms(point.y());
    let (lon_deg, lon_min, lon_sec) = to_dms(point.x());

    format!(
        "{lat_deg:02}{lat_min:02}{lat_sec:02}{}{lon_deg:03}{lon_min:02}{lon_sec:02}{}",
        if point.y() < 0.0 { 'S' } else { 'N' },
        if point.x() < 0.0 { 'W' } else { 'E' },
    )
}

#[derive(Copy, Clone, Debug)]
enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn degree_len(self) -> usize {
        match self {
            Self::Latitude => 2,
            Self::Longitude => 3,
        }
    }

    fn limit(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }
}

fn decode_axis(coord: &str, field: &[u8], axis: Axis) -> Result<f64> {
    let n = axis.degree_len();

    let deg = parse_digits(coord, &field[..n])?;
    let min = parse_digits(coord, &field[n..n + 2])? as u8;
    let sec = parse_digits(coord, &field[n + 2..n + 4])? as u8;
    let decimal = fc::dms_to_decimal(deg, min, sec);

    if min >= 60 || sec >= 60 || decimal > axis.limit() {
        warn!("coordinate {coord} has an out of range {axis:?} component");
    }

    match (axis, field[n + 4]) {
        (Axis::Latitude, b'N') | (Axis::Longitude, b'E') => Ok(decimal),
        (Axis::Latitude, b'S') | (Axis::Longitude, b'W') => Ok(-decimal),
        (Axis::Latitude, _) => Err(Error::MalformedCoordinate {
            value: coord.to_string(),
            reason: "latitude hemisphere should be N or S",
        }),
        (Axis::Longitude, _) => Err(Error::MalformedCoordinate {
            value: coord.to_string(),
            reason: "longitude hemisphere should be W or E",
        }),
    }
}

fn parse_digits(coord: &str, bytes: &[u8]) -> Result<u16> {
    bytes.iter().try_fold(0u16, |acc, &b| {
        if b.is_ascii_digit() {
            Ok(acc * 10 + u16::from(b - b'0'))
        } else {
            Err(Error::MalformedCoordinate {
                value: coord.to_string(),
                reason: "degrees, minutes and seconds should be numeric",
            })
        }
    })
}

/// Returns why the point isn't on the globe, if it isn't.
fn out_of_range(point: Point<f64>) -> Option<&'static str> {
    if !(-90.0..=90.0).contains(&point.y()) {
        Some("latitude should be within 90° N and S")
    } else if !(-180.0..=180.0).contains(&point.x()) {
        Some("longitude should be within 180° W and E")
    } else {
        None
    }
}

fn to_dms(decimal: f64) -> (u32, u32, u32) {
    let total = (decimal.abs() * 3600.0).round() as u32;
    (total / 3600, total % 3600 / 60, total % 60)
}

/// Coordinates of a NOTAM as latitude and longitude token.
///
/// The latitude is given as `DDMMSS[N|S]` and the longitude as
/// `DDDMMSS[W|E]`, e.g. `422750N` and `1154403W`. The tokens are validated and
/// decoded once on construction.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "CoordinatesRepr", into = "CoordinatesRepr")
)]
pub struct Coordinates {
    lat: String,
    lon: String,
    point: Point<f64>,
}

impl Coordinates {
    /// Creates coordinates from the latitude and longitude token.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedCoordinate`] if a token has the wrong length or
    /// doesn't decode.
    ///
    /// [`MalformedCoordinate`]: Error::MalformedCoordinate
    pub fn new(lat: impl Into<String>, lon: impl Into<String>) -> Result<Self> {
        let lat = lat.into();
        let lon = lon.into();

        if lat.len() != LAT_LEN {
            return Err(Error::MalformedCoordinate {
                value: lat,
                reason: "latitude should be 7 characters long",
            });
        }

        if lon.len() != LON_LEN {
            return Err(Error::MalformedCoordinate {
                value: lon,
                reason: "longitude should be 8 characters long",
            });
        }

        let point = decode(&format!("{lat}{lon}"))?;
        Ok(Self { lat, lon, point })
    }

    /// Creates coordinates from a point, rounded to the nearest second.
    ///
    /// The point of the returned coordinates is the rounded one, as decoded
    /// from the tokens.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedCoordinate`] if the point isn't finite or off the
    /// globe.
    ///
    /// [`MalformedCoordinate`]: Error::MalformedCoordinate
    pub fn from_point(point: Point<f64>) -> Result<Self> {
        if let Some(reason) = out_of_range(point) {
            return Err(Error::MalformedCoordinate {
                value: format!("{} {}", point.y(), point.x()),
                reason,
            });
        }

        encode(point).parse()
    }

    /// Checks that the decoded point is on the globe.
    ///
    /// Tokens are only checked for their format on construction, so
    /// `999999N` is a valid token but lies beyond the pole.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedCoordinate`] if the latitude exceeds 90° or the
    /// longitude exceeds 180°.
    ///
    /// [`MalformedCoordinate`]: Error::MalformedCoordinate
    pub fn validate(&self) -> Result<()> {
        match out_of_range(self.point) {
            Some(reason) => Err(Error::MalformedCoordinate {
                value: self.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }

    pub fn lat(&self) -> &str {
        &self.lat
    }

    pub fn lon(&self) -> &str {
        &self.lon
    }

    /// Returns the decoded position with longitude as `x` and latitude as `y`.
    pub fn point(&self) -> Point<f64> {
        self.point
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    /// Parses the concatenated form like `422750N1154403W`.
    fn from_str(s: &str) -> Result<Self> {
        // a decoded coordinate is plain ASCII so we can split at any byte
        let point = decode(s)?;
        let (lat, lon) = s.split_at(LAT_LEN);

        Ok(Self {
            lat: lat.to_string(),
            lon: lon.to_string(),
            point,
        })
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.lat, self.lon)
    }
}

impl From<&Coordinates> for Point<f64> {
    fn from(c: &Coordinates) -> Self {
        c.point
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct CoordinatesRepr {
    lat: String,
    lon: String,
}

#[cfg(feature = "serde")]
impl TryFrom<CoordinatesRepr> for Coordinates {
    type Error = Error;

    fn try_from(repr: CoordinatesRepr) -> Result<Self> {
        Self::new(repr.lat, repr.lon)
    }
}

#[cfg(feature = "serde")]
impl From<Coordinates> for CoordinatesRepr {
    fn from(c: Coordinates) -> Self {
        Self {
            lat: c.lat,
            lon: c.lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_western_hemisphere() {
        let p = decode("422750N1154403W").expect("coordinate should decode");
        assert!((p.x() - -115.734).abs() < 1e-3);
        assert!((p.y() - 42.463).abs() < 1e-3);
    }

    #[test]
    fn decodes_southern_and_eastern_hemisphere() {
        // Sydney Kingsford Smith
        let p = decode("335646S1511038E").expect("coordinate should decode");
        assert!((p.x() - 151.177222).abs() < 1e-6);
        assert!((p.y() - -33.946111).abs() < 1e-6);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            decode("1234"),
            Err(Error::MalformedCoordinate { .. })
        ));
        assert!(matches!(
            decode("422750N1154403WX"),
            Err(Error::MalformedCoordinate { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_components() {
        assert!(matches!(
            decode("42275XN1154403W"),
            Err(Error::MalformedCoordinate { .. })
        ));
        assert!(matches!(
            decode("422750N11544 3W"),
            Err(Error::MalformedCoordinate { .. })
        ));
    }

    #[test]
    fn rejects_invalid_hemisphere() {
        assert_eq!(
            decode("422750E1154403W"),
            Err(Error::MalformedCoordinate {
                value: "422750E1154403W".to_string(),
                reason: "latitude hemisphere should be N or S",
            })
        );
        assert_eq!(
            decode("422750N1154403N"),
            Err(Error::MalformedCoordinate {
                value: "422750N1154403N".to_string(),
                reason: "longitude hemisphere should be W or E",
            })
        );
    }

    #[test]
    fn rejects_multibyte_input_without_panic() {
        // 15 bytes, but the degree sign occupies two of them
        assert!(matches!(
            decode("°0006N1153225W"),
            Err(Error::MalformedCoordinate { .. })
        ));
    }

    #[test]
    fn accepts_out_of_range_components() {
        let p = decode("999999N1154403W").expect("format is valid");
        assert!((p.y() - (99.0 + 99.0 / 60.0 + 99.0 / 3600.0)).abs() < 1e-9);
    }

    #[test]
    fn encodes_with_carry() {
        assert_eq!(encode(Point::new(-115.734166, 42.463888)), "422750N1154403W");
        // 59.9999" rounds up into the next minute and degree
        assert_eq!(encode(Point::new(2.0, 48.999_999_99)), "490000N0020000E");
    }

    #[test]
    fn coordinates_from_tokens() {
        let c = Coordinates::new("424006N", "1153225W").expect("tokens should be valid");
        assert_eq!(c.lat(), "424006N");
        assert_eq!(c.lon(), "1153225W");
        assert_eq!(c.to_string(), "424006N1153225W");
        assert_eq!(c.point(), decode("424006N1153225W").unwrap());
        assert_eq!("424006N1153225W".parse::<Coordinates>(), Ok(c));
    }

    #[test]
    fn coordinates_reject_swapped_token_lengths() {
        // a 15 character concatenation that would decode, but split wrongly
        assert!(matches!(
            Coordinates::new("4240006N", "153225W"),
            Err(Error::MalformedCoordinate { .. })
        ));
    }

    #[test]
    fn coordinates_from_point() {
        let c = Coordinates::from_point(Point::new(2.35, 48.853056)).unwrap();
        assert_eq!(c.lat(), "485111N");
        assert_eq!(c.lon(), "0022100E");
        // the point is the one of the rounded tokens
        assert_eq!(c.point(), decode("485111N0022100E").unwrap());
        assert_eq!(c.to_string().parse::<Coordinates>(), Ok(c));
    }

    #[test]
    fn coordinates_from_point_off_the_globe() {
        for point in [
            Point::new(f64::NAN, 1.0),
            Point::new(2.35, f64::INFINITY),
            Point::new(0.0, 1000.5),
            Point::new(-180.5, 0.0),
        ] {
            assert!(matches!(
                Coordinates::from_point(point),
                Err(Error::MalformedCoordinate { .. })
            ));
        }

        let pole = Coordinates::from_point(Point::new(-180.0, -90.0)).unwrap();
        assert_eq!(pole.to_string(), "900000S1800000W");
    }

    #[test]
    fn validates_decoded_point() {
        assert_eq!("424006N1153225W".parse::<Coordinates>().unwrap().validate(), Ok(()));
        assert_eq!(
            "999999N1154403W".parse::<Coordinates>().unwrap().validate(),
            Err(Error::MalformedCoordinate {
                value: "999999N1154403W".to_string(),
                reason: "latitude should be within 90° N and S",
            })
        );
        assert!(matches!(
            "100000N1990000W".parse::<Coordinates>().unwrap().validate(),
            Err(Error::MalformedCoordinate { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn coordinates_from_point_survive_serde() {
        let c = Coordinates::from_point(Point::new(2.35, 48.853056)).unwrap();
        let json = serde_json::to_string(&c).unwrap();

        assert_eq!(json, r#"{"lat":"485111N","lon":"0022100E"}"#);
        assert_eq!(serde_json::from_str::<Coordinates>(&json).unwrap(), c);
    }
}
