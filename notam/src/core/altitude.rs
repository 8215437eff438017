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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single vertical limit of a restricted area.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "AltitudeRepr", into = "AltitudeRepr")
)]
pub enum VerticalLimit {
    /// Surface, i.e. ground level.
    Sfc,

    /// An unlimited vertical extent.
    Unlimited,

    /// True altitude in feet above mean sea level.
    Msl(i32),

    /// Height in feet above ground level.
    Agl(i32),

    /// Flight level in hundreds of feet at standard air pressure.
    Fl(u16),
}

impl VerticalLimit {
    /// Feet with reference to standard pressure or mean sea level.
    ///
    /// Flight levels are taken as if QNH were standard.
    fn msl_ft(self) -> Option<i64> {
        match self {
            Self::Msl(n) => Some(n.into()),
            Self::Fl(n) => Some(i64::from(n) * 100),
            Self::Sfc | Self::Unlimited | Self::Agl(_) => None,
        }
    }
}

impl FromStr for VerticalLimit {
    type Err = Error;

    /// Parses a limit as written in NOTAMs.
    ///
    /// - Surface as `SFC` or `GND`
    /// - Unlimited as `UNL` or `UNLTD`
    /// - Flight level as `FL` followed by the level e.g. `FL250`
    /// - Height above ground with `AGL` suffix e.g. `4000FT AGL`
    /// - Altitude in feet with optional `MSL` suffix e.g. `10000FT`
    fn from_str(s: &str) -> Result<Self> {
        let unexpected = || Error::UnexpectedString(s.to_string());
        let upper = s.trim().to_ascii_uppercase();

        fn feet(s: &str) -> Option<i32> {
            let s = s.trim();
            s.strip_suffix("FT").unwrap_or(s).trim().parse().ok()
        }

        match upper.as_str() {
            "SFC" | "GND" => Ok(Self::Sfc),
            "UNL" | "UNLTD" => Ok(Self::Unlimited),
            _ => {
                if let Some(level) = upper.strip_prefix("FL") {
                    level.trim().parse().map(Self::Fl).map_err(|_| unexpected())
                } else if let Some(height) = upper.strip_suffix("AGL") {
                    feet(height).map(Self::Agl).ok_or_else(unexpected)
                } else {
                    let height = upper.strip_suffix("MSL").unwrap_or(&upper);
                    feet(height).map(Self::Msl).ok_or_else(unexpected)
                }
            }
        }
    }
}

impl fmt::Display for VerticalLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerticalLimit::Sfc => write!(f, "SFC"),
            VerticalLimit::Unlimited => write!(f, "UNL"),
            VerticalLimit::Msl(value) => write!(f, "{value}FT MSL"),
            VerticalLimit::Agl(value) => write!(f, "{value}FT AGL"),
            VerticalLimit::Fl(value) => write!(f, "FL{value}"),
        }
    }
}

/// Vertical limits from a floor to a ceiling.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "AltitudeRepr", into = "AltitudeRepr")
)]
pub struct AltitudeRange {
    pub min: VerticalLimit,
    pub max: VerticalLimit,
}

impl AltitudeRange {
    pub fn new(min: VerticalLimit, max: VerticalLimit) -> Self {
        Self { min, max }
    }

    /// Returns `true` if the floor is above the ceiling.
    ///
    /// Heights above ground can only be compared with each other, with the
    /// surface or unlimited. Limits that can't be compared are never
    /// inverted.
    pub fn is_inverted(&self) -> bool {
        use VerticalLimit::*;

        match (self.min, self.max) {
            (Sfc, Sfc) | (Unlimited, Unlimited) => false,
            (Unlimited, _) | (_, Sfc) => true,
            (Sfc, _) | (_, Unlimited) => false,
            (Agl(min), Agl(max)) => min > max,
            (min, max) => match (min.msl_ft(), max.msl_ft()) {
                (Some(min), Some(max)) => min > max,
                _ => false,
            },
        }
    }
}

impl FromStr for AltitudeRange {
    type Err = Error;

    /// Parses a range as `MIN-MAX` or `MIN/MAX`, e.g. `FL400-UNL` or
    /// `SFC/UNL`.
    fn from_str(s: &str) -> Result<Self> {
        let (min, max) =
            split_range(s).ok_or_else(|| Error::UnexpectedString(s.to_string()))?;

        Ok(Self::new(min.parse()?, max.parse()?))
    }
}

/// Splits at the first `-` or `/` after the first character, so a negative
/// floor like `-100FT MSL` stays intact.
fn split_range(s: &str) -> Option<(&str, &str)> {
    let s = s.trim();

    s.char_indices()
        .skip(1)
        .find(|&(_, c)| c == '-' || c == '/')
        .map(|(i, _)| (&s[..i], &s[i + 1..]))
}

impl fmt::Display for AltitudeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// The vertical extent of a range ring or polygon.
///
/// Either a single [`VerticalLimit`] or an [`AltitudeRange`]. Since a range
/// is made of two limits, it can't contain another range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "AltitudeRepr", into = "AltitudeRepr")
)]
pub enum Altitude {
    Limit(VerticalLimit),
    Range(AltitudeRange),
}

impl Altitude {
    /// Composes a range from the two altitudes.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAltitudeVariant`] if either altitude is a range
    /// itself.
    ///
    /// [`InvalidAltitudeVariant`]: Error::InvalidAltitudeVariant
    pub fn range(min: Altitude, max: Altitude) -> Result<Self> {
        Ok(Self::Range(AltitudeRange::new(
            min.try_into()?,
            max.try_into()?,
        )))
    }
}

impl From<VerticalLimit> for Altitude {
    fn from(limit: VerticalLimit) -> Self {
        Self::Limit(limit)
    }
}

impl From<AltitudeRange> for Altitude {
    fn from(range: AltitudeRange) -> Self {
        Self::Range(range)
    }
}

impl TryFrom<Altitude> for VerticalLimit {
    type Error = Error;

    fn try_from(altitude: Altitude) -> Result<Self> {
        match altitude {
            Altitude::Limit(limit) => Ok(limit),
            Altitude::Range(range) => Err(Error::InvalidAltitudeVariant {
                expected: "SFC, UNL, MSL, AGL or FL",
                found: range.to_string(),
            }),
        }
    }
}

impl TryFrom<Altitude> for AltitudeRange {
    type Error = Error;

    fn try_from(altitude: Altitude) -> Result<Self> {
        match altitude {
            Altitude::Range(range) => Ok(range),
            Altitude::Limit(limit) => Err(Error::InvalidAltitudeVariant {
                expected: "a range",
                found: limit.to_string(),
            }),
        }
    }
}

impl FromStr for Altitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if split_range(s).is_some() {
            s.parse().map(Self::Range)
        } else {
            s.parse().map(Self::Limit)
        }
    }
}

impl fmt::Display for Altitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Altitude::Limit(limit) => fmt::Display::fmt(limit, f),
            Altitude::Range(range) => fmt::Display::fmt(range, f),
        }
    }
}

/// Altitudes as tagged by the extraction service, e.g.
/// `{"type": "FL", "height_ft": 400}`.
#[cfg(feature = "serde")]
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
enum AltitudeRepr {
    #[serde(rename = "SFC")]
    Sfc,
    #[serde(rename = "UNL")]
    Unl,
    #[serde(rename = "MSL")]
    Msl { height_ft: i32 },
    #[serde(rename = "AGL")]
    Agl { height_ft: i32 },
    #[serde(rename = "FL")]
    Fl { height_ft: u16 },
    #[serde(rename = "RANGE")]
    Range {
        min: Box<AltitudeRepr>,
        max: Box<AltitudeRepr>,
    },
}

#[cfg(feature = "serde")]
impl TryFrom<AltitudeRepr> for Altitude {
    type Error = Error;

    fn try_from(repr: AltitudeRepr) -> Result<Self> {
        let limit = match repr {
            AltitudeRepr::Sfc => VerticalLimit::Sfc,
            AltitudeRepr::Unl => VerticalLimit::Unlimited,
            AltitudeRepr::Msl { height_ft } => VerticalLimit::Msl(height_ft),
            AltitudeRepr::Agl { height_ft } => VerticalLimit::Agl(height_ft),
            AltitudeRepr::Fl { height_ft } => VerticalLimit::Fl(height_ft),
            AltitudeRepr::Range { min, max } => {
                return Self::range((*min).try_into()?, (*max).try_into()?)
            }
        };

        Ok(Self::Limit(limit))
    }
}

#[cfg(feature = "serde")]
impl TryFrom<AltitudeRepr> for VerticalLimit {
    type Error = Error;

    fn try_from(repr: AltitudeRepr) -> Result<Self> {
        Altitude::try_from(repr)?.try_into()
    }
}

#[cfg(feature = "serde")]
impl TryFrom<AltitudeRepr> for AltitudeRange {
    type Error = Error;

    fn try_from(repr: AltitudeRepr) -> Result<Self> {
        Altitude::try_from(repr)?.try_into()
    }
}

#[cfg(feature = "serde")]
impl From<VerticalLimit> for AltitudeRepr {
    fn from(limit: VerticalLimit) -> Self {
        match limit {
            VerticalLimit::Sfc => Self::Sfc,
            VerticalLimit::Unlimited => Self::Unl,
            VerticalLimit::Msl(height_ft) => Self::Msl { height_ft },
            VerticalLimit::Agl(height_ft) => Self::Agl { height_ft },
            VerticalLimit::Fl(height_ft) => Self::Fl { height_ft },
        }
    }
}

#[cfg(feature = "serde")]
impl From<AltitudeRange> for AltitudeRepr {
    fn from(range: AltitudeRange) -> Self {
        Self::Range {
            min: Box::new(range.min.into()),
            max: Box::new(range.max.into()),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Altitude> for AltitudeRepr {
    fn from(altitude: Altitude) -> Self {
        match altitude {
            Altitude::Limit(limit) => limit.into(),
            Altitude::Range(range) => range.into(),
        }
    }
}
