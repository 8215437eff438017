// SPDX-License-Identifier: Apache-2.0
// Copyright 2024 Joe Pearson
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

//! Flight Computer.

pub const NAUTICAL_MILE_IN_METER: f64 = 1852.0;

/// Converts an angle from degree minutes and seconds to decimal.
pub fn dms_to_decimal(degree: u16, minutes: u8, seconds: u8) -> f64 {
    degree as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0
}

/// Converts a distance in nautical miles to meters.
pub fn nautical_miles_to_meters(nm: f64) -> f64 {
    NAUTICAL_MILE_IN_METER * nm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_nautical_mile_is_exactly_1852_m() {
        assert_eq!(nautical_miles_to_meters(1.0), 1852.0);
        assert_eq!(nautical_miles_to_meters(372.0), 688_944.0);
    }

    #[test]
    fn dms() {
        assert_eq!(dms_to_decimal(42, 30, 0), 42.5);
        assert!((dms_to_decimal(115, 44, 3) - 115.734166).abs() < 1e-6);
    }
}
