pub mod base;
pub mod parks;
pub mod roads;
pub mod text;
pub mod water;

pub use base::generate_base_plate;
pub use parks::generate_park_meshes;
pub use roads::{RoadConfig, generate_road_meshes};
pub use text::TextRenderer;
pub use water::generate_water_meshes;
