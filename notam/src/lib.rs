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

//! Geometry of NOTAMs.
//!
//! This crate turns a structured [`Notam`] into GeoJSON that can be rendered
//! on a map. A NOTAM restricts the airspace within [range rings] and
//! [polygons] whose vertices are given as sexagesimal [coordinates]. Range
//! rings are approximated by polygons sampled on the WGS84 ellipsoid.
//!
//! # Examples
//!
//! ```
//! use notam::prelude::*;
//!
//! # fn main() -> Result<(), Error> {
//! let notam = Notam {
//!     number: Some("01/020".to_string()),
//!     range_rings: vec![RangeRing::new(
//!         Coordinates::new("424006N", "1153225W")?,
//!         372.0,
//!         "FL400-UNL".parse::<Altitude>()?,
//!     )?],
//!     ..Default::default()
//! };
//!
//! let fc = notam.to_geojson()?;
//! assert_eq!(fc.features.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `serde`: (De)serialization of the NOTAM as returned by the extraction
//!   service and parsing of its [responses](extract::parse_response).
//!
//! [range rings]: RangeRing
//! [polygons]: Polygon
//! [coordinates]: geom::Coordinates

#![cfg_attr(docsrs, feature(doc_cfg))]

mod core;
mod error;
pub mod extract;
pub mod fc;
pub mod geojson;
pub mod geom;
mod notam;

pub use crate::core::*;
pub use crate::error::{Error, Result};
pub use crate::notam::*;

pub mod prelude {
    pub use crate::extract::{ExtractionError, Extractor};
    pub use crate::geom::Coordinates;
    pub use crate::{Altitude, AltitudeRange, Error, Notam, Polygon, RangeRing, VerticalLimit};
}
