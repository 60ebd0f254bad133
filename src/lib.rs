pub mod data;
pub mod errors;
pub mod etl;
pub mod summary;

use serde::Deserialize;

use crate::errors::Result;
use crate::etl::render_map::Theme;

#[derive(Deserialize)]
pub struct RenderConfig<'a> {
    pub width_px: u64,
    pub height_px: u64,
    pub title: String,
    pub theme: Theme<'a>,
}

// There is no user-facing configuration surface: output name, canvas size and
// styling are fixed. The theme still goes through the serde path so the color
// constants read the same as everywhere else ("rgb(r, g, b)").
const DEFAULT_CONFIG: &str = r#"{
    "width_px": 1600,
    "height_px": 1000,
    "title": "Batman Filming Locations & Supercar Factories - Cargo Plane Travel Time from Gotham",
    "theme": {
        "land_color": "rgb(243, 243, 243)",
        "coastline_color": "rgb(204, 204, 204)",
        "lake_color": "rgb(255, 255, 255)",
        "country_color": "rgb(204, 204, 204)",
        "text_color": "rgb(60, 60, 60)",
        "marker_outline_color": "rgb(255, 255, 255)"
    }
}"#;

pub fn default_render_config() -> Result<RenderConfig<'static>> {
    Ok(serde_json::from_str(DEFAULT_CONFIG)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = default_render_config().unwrap();
        assert_eq!(config.width_px, 1600);
        assert_eq!(config.height_px, 1000);
    }
}
