//! Points, coordinates and the centroid reduction.

use std::fmt;

use tracing::{debug, error, info};

use crate::error::{ReportError, Result};

/// A named location loaded from the input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// A latitude/longitude pair.
///
/// Displays as `(lat, lon)` with each component rendered by
/// [`format_degrees`], e.g. `(20.0, 30.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `[lat, lon]` ordering, as map libraries expect it.
    pub fn as_lat_lon(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", format_degrees(self.lat), format_degrees(self.lon))
    }
}

/// Shortest round-trip text of a degree value, in the same shape Python's
/// `repr` gives a float: positional for decimal exponents in [-4, 16)
/// (`20.0`, `0.0001`), scientific with a signed two-digit exponent otherwise
/// (`1e-05`, `1.5e+16`).
pub fn format_degrees(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.2345e-7".
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if !(-4..16).contains(&exponent) {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{:02}", exponent.abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let body = if exponent < 0 {
        format!("0.{}{digits}", "0".repeat((-exponent - 1) as usize))
    } else {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            format!("{digits}{}.0", "0".repeat(int_len - digits.len()))
        } else {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        }
    };
    format!("{sign}{body}")
}

/// Arithmetic mean of latitudes and longitudes, computed independently.
///
/// Fails with [`ReportError::EmptyInput`] for an empty slice rather than
/// producing NaN.
pub fn calculate_centroid(points: &[Point]) -> Result<Coordinate> {
    if points.is_empty() {
        error!("Centroid requested for an empty point collection");
        return Err(ReportError::EmptyInput);
    }

    let count = points.len() as f64;
    let (lat_sum, lon_sum) = points
        .iter()
        .fold((0.0_f64, 0.0_f64), |(lat, lon), p| (lat + p.lat, lon + p.lon));
    let centroid = Coordinate::new(lat_sum / count, lon_sum / count);

    debug!(points = points.len(), lat_sum, lon_sum, "Summed point coordinates");
    info!(centroid = %centroid, points = points.len(), "Computed centroid");
    Ok(centroid)
}
