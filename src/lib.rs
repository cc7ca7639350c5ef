#![doc = "centroid-report: centroid of geolocated points, rendered as map, PDF and Markdown reports."]

//! Pipeline, in order: [`load_points`] → [`geo`] → [`links`] → [`report`] →
//! [`output_dir`] → [`writers`]. [`pipeline`] wires them together and [`cli`]
//! is the binary's front door.

pub mod cli;
pub mod config;
pub mod error;
pub mod geo;
pub mod links;
pub mod load_config;
pub mod load_points;
pub mod output_dir;
pub mod pipeline;
pub mod report;
pub mod writers;
