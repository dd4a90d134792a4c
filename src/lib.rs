//! boundmap - Fetch and render OSM country boundaries from Nominatim data

pub mod api;
pub mod config;
pub mod domain;
pub mod flow;
pub mod geojson;
pub mod geometry;
pub mod map;
pub mod server;
