use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::constants::{
    ACCENT_COLOR, BRANDING_TEXT, DEFAULT_ZOOM, FILE_PREFIX, OUTPUT_SUBDIR, PAGE_TITLE,
    VT_CENTER_LAT, VT_CENTER_LON, WIDGET_SETTLE_DELAY_MS,
};
use crate::data::location::Coordinates;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub center: Coordinates,
    pub zoom: u8,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub page_title: String,
    pub branding_text: String,
    pub accent_color: String,
    pub settle_delay_ms: u32,
    pub open_viewer: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: Coordinates::new(VT_CENTER_LAT, VT_CENTER_LON),
            zoom: DEFAULT_ZOOM,
            output_dir: default_output_dir(),
            file_prefix: FILE_PREFIX.to_string(),
            page_title: PAGE_TITLE.to_string(),
            branding_text: BRANDING_TEXT.to_string(),
            accent_color: ACCENT_COLOR.to_string(),
            settle_delay_ms: WIDGET_SETTLE_DELAY_MS,
            open_viewer: true,
        }
    }
}

/// `~/Documents/VT_Dining_Maps`, falling back to the working directory when no
/// home directory is known.
pub fn default_output_dir() -> PathBuf {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(OUTPUT_SUBDIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapConfig::default();
        assert_eq!(config.center, Coordinates::new(37.2284, -80.4234));
        assert_eq!(config.zoom, 15);
        assert_eq!(config.file_prefix, "VT_Dining_Halls");
        assert_eq!(config.settle_delay_ms, 100);
        assert!(config.open_viewer);
        assert!(config.output_dir.ends_with("Documents/VT_Dining_Maps"));
    }
}
