//! Data loader: reads the JSON point file into an ordered `Vec<Point>`.
//!
//! The input is a JSON array of records. Each record must carry `lat` and
//! `lon` numbers and a display name under `thing-name` (or `name` when
//! `thing-name` is absent). Extra keys are ignored. Problems are reported
//! per record index so a broken entry in a long file can be found.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, error, info};

use crate::error::{ReportError, Result};
use crate::geo::Point;

#[derive(Debug, Deserialize)]
struct PointRecord {
    #[serde(rename = "thing-name")]
    thing_name: Option<String>,
    name: Option<String>,
    lat: f64,
    lon: f64,
}

/// Loads all points from `path`, preserving file order.
///
/// With `validate_ranges` set, latitudes outside [-90, 90] and longitudes
/// outside [-180, 180] are rejected as parse errors.
pub fn load_points(path: &Path, validate_ranges: bool) -> Result<Vec<Point>> {
    info!(input = %path.display(), "Loading points");

    let content = fs::read_to_string(path).map_err(|e| {
        error!(error = ?e, input = %path.display(), "Failed to read input file");
        match e.kind() {
            ErrorKind::NotFound => ReportError::NotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::InvalidData => ReportError::parse(path, format!("input is not UTF-8: {e}")),
            _ => ReportError::io(path, e),
        }
    })?;

    let points = parse_points(&content, validate_ranges).map_err(|message| {
        error!(input = %path.display(), %message, "Failed to parse input file");
        ReportError::parse(path, message)
    })?;

    info!(input = %path.display(), points = points.len(), "Loaded points");
    Ok(points)
}

/// Parses JSON text into points. Errors are human-readable messages.
pub fn parse_points(content: &str, validate_ranges: bool) -> std::result::Result<Vec<Point>, String> {
    let records: Vec<serde_json::Value> = serde_json::from_str(content)
        .map_err(|e| format!("expected a JSON array of point records: {e}"))?;

    let mut points = Vec::with_capacity(records.len());
    for (index, value) in records.into_iter().enumerate() {
        let record: PointRecord =
            serde_json::from_value(value).map_err(|e| format!("record {index}: {e}"))?;
        let name = record
            .thing_name
            .or(record.name)
            .ok_or_else(|| format!("record {index}: missing display name (`thing-name` or `name`)"))?;
        let point = Point {
            name,
            lat: record.lat,
            lon: record.lon,
        };
        if validate_ranges {
            check_range(index, &point)?;
        }
        debug!(index, name = %point.name, lat = point.lat, lon = point.lon, "Parsed point");
        points.push(point);
    }
    Ok(points)
}

fn check_range(index: usize, point: &Point) -> std::result::Result<(), String> {
    if !(-90.0..=90.0).contains(&point.lat) {
        return Err(format!(
            "record {index} ({}): latitude {} is outside [-90, 90]",
            point.name, point.lat
        ));
    }
    if !(-180.0..=180.0).contains(&point.lon) {
        return Err(format!(
            "record {index} ({}): longitude {} is outside [-180, 180]",
            point.name, point.lon
        ));
    }
    Ok(())
}
