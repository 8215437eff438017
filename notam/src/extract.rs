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

//! Extraction of NOTAMs from their text.
//!
//! Decoding the free text of a NOTAM is left to an external service, e.g. a
//! language model completing a few-shot prompt. The service is abstracted by
//! the [`Extractor`] trait which either returns a [`Notam`] or an
//! [`ExtractionError`].

use std::error;
use std::fmt;

use ::geojson::FeatureCollection;
use log::debug;
#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::error::Error;
use crate::Notam;

/// Errors of an [`Extractor`].
#[derive(Clone, PartialEq, Debug)]
pub enum ExtractionError {
    /// The service flagged the text as not decodable, optionally with a
    /// message why.
    Rejected(Option<String>),

    /// The service couldn't be reached or failed.
    Service(String),

    /// The service responded with something that isn't a NOTAM.
    Response(String),

    /// The NOTAM is invalid.
    Invalid(Error),
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(Some(message)) => write!(f, "NOTAM rejected: {message}"),
            Self::Rejected(None) => write!(f, "NOTAM rejected"),
            Self::Service(e) => write!(f, "extraction service failed: {e}"),
            Self::Response(e) => write!(f, "invalid extraction response: {e}"),
            Self::Invalid(e) => write!(f, "invalid NOTAM: {e}"),
        }
    }
}

impl error::Error for ExtractionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Error> for ExtractionError {
    fn from(e: Error) -> Self {
        Self::Invalid(e)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ExtractionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Response(e.to_string())
    }
}

/// Decodes the text of a NOTAM.
///
/// Implemented for closures, which comes in handy for tests:
///
/// ```
/// use notam::extract::{Extractor, ExtractionError};
/// use notam::Notam;
///
/// let extractor = |_: &str| -> Result<Notam, ExtractionError> {
///     Err(ExtractionError::Rejected(None))
/// };
///
/// assert!(extractor.extract("!GPS 01/020 ZLC NAV GPS").is_err());
/// ```
pub trait Extractor {
    fn extract(&self, text: &str) -> Result<Notam, ExtractionError>;
}

impl<F> Extractor for F
where
    F: Fn(&str) -> Result<Notam, ExtractionError>,
{
    fn extract(&self, text: &str) -> Result<Notam, ExtractionError> {
        self(text)
    }
}

/// Extracts the NOTAM from the text and returns it as GeoJSON.
pub fn extract_geojson<E>(extractor: &E, text: &str) -> Result<FeatureCollection, ExtractionError>
where
    E: Extractor + ?Sized,
{
    let notam = extractor.extract(text)?;
    debug!("extracted NOTAM {:?}", notam.number);
    Ok(notam.to_geojson()?)
}

/// Response of the extraction service which wraps the NOTAM in case it could
/// be decoded.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct MaybeNotam {
    result: Option<Notam>,
    #[serde(default)]
    error: bool,
    message: Option<String>,
}

/// Parses the JSON response of an extraction service.
///
/// The response is expected as
/// `{"result": <NOTAM or null>, "error": <bool>, "message": <string or null>}`.
///
/// # Errors
///
/// Returns [`Rejected`] if the response flags an error or has no result and
/// [`Response`] if it can't be parsed.
///
/// [`Rejected`]: ExtractionError::Rejected
/// [`Response`]: ExtractionError::Response
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub fn parse_response(json: &str) -> Result<Notam, ExtractionError> {
    let maybe: MaybeNotam = serde_json::from_str(json)?;

    match maybe {
        MaybeNotam {
            result: Some(notam),
            error: false,
            ..
        } => Ok(notam),
        MaybeNotam { message, .. } => Err(ExtractionError::Rejected(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_extractor_to_geojson() {
        let extractor = |_: &str| -> Result<Notam, ExtractionError> { Ok(Notam::default()) };

        let fc = extract_geojson(&extractor, "ZIT CEREMONIE").unwrap();
        assert!(fc.features.is_empty());
    }

    #[test]
    fn service_errors_pass_through() {
        let extractor = |_: &str| -> Result<Notam, ExtractionError> {
            Err(ExtractionError::Service("timeout".to_string()))
        };

        assert_eq!(
            extract_geojson(&extractor, "").unwrap_err(),
            ExtractionError::Service("timeout".to_string())
        );
    }

    #[test]
    fn invalid_notam_fails_export() {
        use crate::geom::Coordinates;
        use crate::{RangeRing, VerticalLimit};

        let extractor = |_: &str| -> Result<Notam, ExtractionError> {
            Ok(Notam {
                range_rings: vec![RangeRing {
                    center: Coordinates::new("485111N", "0022100E")?,
                    radius_nm: -80.0,
                    altitude: VerticalLimit::Sfc.into(),
                }],
                ..Default::default()
            })
        };

        assert!(matches!(
            extract_geojson(&extractor, ""),
            Err(ExtractionError::Invalid(Error::InvalidGeometry { .. }))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parses_result() {
        let notam = parse_response(
            r#"{"result": {"accountability": "GPS", "location": "ZLA", "number": "05/071",
                           "description": null, "range_rings": [], "polygons": [],
                           "start_date": "2024-05-15T07:00:00Z", "end_date": null},
                "error": false, "message": null}"#,
        )
        .unwrap();

        assert_eq!(notam.number.as_deref(), Some("05/071"));
        assert!(notam.start_date.is_some());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parses_rejection() {
        assert_eq!(
            parse_response(r#"{"result": null, "error": true, "message": "not a NOTAM"}"#),
            Err(ExtractionError::Rejected(Some("not a NOTAM".to_string())))
        );
        assert_eq!(
            parse_response(r#"{"result": null, "error": false, "message": null}"#),
            Err(ExtractionError::Rejected(None))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn malformed_response() {
        assert!(matches!(
            parse_response(r#"{"result": {"polygons": 3}}"#),
            Err(ExtractionError::Response(_))
        ));
    }
}
