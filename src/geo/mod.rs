mod directory;
mod geo_type;
mod geography;

pub use directory::{DirectoryBuilder, GeoRecord};
pub use geo_type::GeoType;
pub use geography::{County, Geography, State};
