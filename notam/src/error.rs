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

use std::error;
use std::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validation errors raised while building or exporting a NOTAM.
///
/// All variants are detected before any geodesic computation takes place.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A sexagesimal coordinate has the wrong length, a non-numeric degree,
    /// minute or second component, an invalid hemisphere letter or lies off
    /// the globe.
    MalformedCoordinate { value: String, reason: &'static str },

    /// A ring or polygon can't be constructed from the given parameters.
    InvalidGeometry { reason: String },

    /// An altitude of the wrong kind was found, e.g. a range nested in a
    /// range.
    InvalidAltitudeVariant {
        expected: &'static str,
        found: String,
    },

    /// An altitude label could not be parsed.
    UnexpectedString(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedCoordinate { value, reason } => {
                write!(f, "malformed coordinate \"{value}\": {reason}")
            }
            Self::InvalidGeometry { reason } => write!(f, "invalid geometry: {reason}"),
            Self::InvalidAltitudeVariant { expected, found } => {
                write!(f, "found altitude {found} but should be {expected}")
            }
            Self::UnexpectedString(s) => write!(f, "unexpected altitude \"{s}\""),
        }
    }
}

impl error::Error for Error {}
