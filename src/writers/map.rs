//! Interactive Leaflet map: one marker per point, a highlighted centroid
//! marker, and a line from every point to the centroid.
//!
//! The page is a single HTML file. Map data is embedded as a JSON literal and
//! popups are set through `textContent`, so point names never reach the DOM as
//! markup.

use std::path::Path;

use serde::Serialize;
use tracing::{error, info};

use super::{write_atomically, ReportWriter};
use crate::config::MapConfig;
use crate::error::{ReportError, Result};
use crate::geo::Point;
use crate::report::ReportData;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

pub struct MapWriter {
    config: MapConfig,
}

impl MapWriter {
    pub fn new(config: MapConfig) -> Self {
        Self { config }
    }
}

impl ReportWriter for MapWriter {
    fn name(&self) -> &'static str {
        "map"
    }

    fn file_name(&self) -> String {
        self.config.file_name.clone()
    }

    fn write(&self, points: &[Point], report: &ReportData, path: &Path) -> Result<()> {
        let html = render_map(points, report, &self.config).map_err(|e| {
            error!(error = ?e, "Failed to serialize map data");
            ReportError::io(path, std::io::Error::other(e))
        })?;
        write_atomically(path, html.as_bytes())?;
        info!(path = %path.display(), markers = points.len() + 1, "Wrote interactive map");
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct MapData<'a> {
    center: [f64; 2],
    zoom: u8,
    tile_url: &'a str,
    attribution: &'a str,
    centroid_color: &'a str,
    line_color: &'a str,
    points: Vec<MapPoint<'a>>,
}

#[derive(Debug, Serialize)]
struct MapPoint<'a> {
    name: &'a str,
    at: [f64; 2],
}

pub fn render_map(
    points: &[Point],
    report: &ReportData,
    config: &MapConfig,
) -> std::result::Result<String, serde_json::Error> {
    let data = MapData {
        center: report.centroid.as_lat_lon(),
        zoom: config.zoom,
        tile_url: &config.tile_url,
        attribution: &config.attribution,
        centroid_color: &config.centroid_color,
        line_color: &config.line_color,
        points: points
            .iter()
            .map(|p| MapPoint {
                name: &p.name,
                at: p.coordinate().as_lat_lon(),
            })
            .collect(),
    };
    let json = script_safe_json(&data)?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Centroid {title}</title>
<link rel="stylesheet" href="{LEAFLET_CSS}">
<script src="{LEAFLET_JS}"></script>
<style>html, body, #map {{ height: 100%; width: 100%; margin: 0; padding: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
const data = {json};
function popup(text) {{
    const el = document.createElement('span');
    el.textContent = text;
    return el;
}}
const map = L.map('map').setView(data.center, data.zoom);
L.tileLayer(data.tile_url, {{ attribution: data.attribution, maxZoom: 19 }}).addTo(map);
L.circleMarker(data.center, {{
    radius: 9, color: data.centroid_color, fillColor: data.centroid_color, fillOpacity: 0.9
}}).bindPopup(popup('Centroid')).addTo(map);
data.points.forEach(p => {{
    L.marker(p.at).bindPopup(popup(p.name)).addTo(map);
    L.polyline([p.at, data.center], {{ color: data.line_color }}).addTo(map);
}});
</script>
</body>
</html>
"#,
        title = escape_html(&report.centroid.to_string()),
    ))
}

/// JSON that is safe to inline inside a `<script>` element.
fn script_safe_json<T: Serialize>(value: &T) -> std::result::Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?
        .replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use crate::links::SearchLinks;
    use crate::report::assemble_report;

    fn points() -> Vec<Point> {
        vec![
            Point {
                name: "A".into(),
                lat: 10.0,
                lon: 20.0,
            },
            Point {
                name: "B</script><b>".into(),
                lat: 30.0,
                lon: 40.0,
            },
        ]
    }

    fn embedded_data(html: &str) -> serde_json::Value {
        let start = html.find("const data = ").unwrap() + "const data = ".len();
        let end = start + html[start..].find(";\n").unwrap();
        serde_json::from_str(&html[start..end]).unwrap()
    }

    #[test]
    fn embeds_centroid_points_and_zoom() {
        let report = assemble_report(Coordinate::new(20.0, 30.0), SearchLinks::default());
        let html = render_map(&points(), &report, &MapConfig::default()).unwrap();
        let data = embedded_data(&html);

        assert_eq!(data["center"], serde_json::json!([20.0, 30.0]));
        assert_eq!(data["zoom"], 5);
        assert_eq!(data["centroid_color"], "red");
        assert_eq!(data["line_color"], "blue");
        assert_eq!(data["points"].as_array().unwrap().len(), 2);
        assert_eq!(data["points"][0]["name"], "A");
        assert_eq!(data["points"][1]["at"], serde_json::json!([30.0, 40.0]));
        assert!(html.contains("L.polyline([p.at, data.center]"));
    }

    #[test]
    fn names_cannot_close_the_script_element() {
        let report = assemble_report(Coordinate::new(20.0, 30.0), SearchLinks::default());
        let html = render_map(&points(), &report, &MapConfig::default()).unwrap();
        assert_eq!(html.matches("</script>").count(), 2);
        assert_eq!(embedded_data(&html)["points"][1]["name"], "B</script><b>");
    }
}
