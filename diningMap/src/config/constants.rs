// Campus Constants
pub const VT_CENTER_LAT: f64 = 37.2284;
pub const VT_CENTER_LON: f64 = -80.4234;
pub const DEFAULT_ZOOM: u8 = 15;                   // Campus-wide view

// Distance Estimation
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
pub const WALKING_SPEED_M_PER_MIN: f64 = 80.0;     // Roughly 3 mph
pub const MIN_WALK_MINUTES: u32 = 1;

// Viewer Script
pub const WIDGET_SETTLE_DELAY_MS: u32 = 100;       // Lets the map widget finish initializing
pub const LOCATE_MAX_ZOOM: u8 = 17;

// Output
pub const OUTPUT_SUBDIR: &str = "Documents/VT_Dining_Maps";
pub const FILE_PREFIX: &str = "VT_Dining_Halls";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// Branding
pub const PAGE_TITLE: &str = "Virginia Tech Dining Halls";
pub const BRANDING_TEXT: &str = "🦃 Virginia Tech Dining";
pub const ACCENT_COLOR: &str = "#861F41";          // VT maroon
pub const PANEL_BACKGROUND: &str = "#fef9f0";

// Popup Geometry
pub const POPUP_MAX_WIDTH: u32 = 350;
pub const POPUP_WIDTH: u32 = 320;
pub const LABEL_ICON_SIZE: (u32, u32) = (100, 20);
pub const LABEL_ICON_ANCHOR: (i32, i32) = (50, -10);

// Widget Assets
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const AWESOME_MARKERS_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css";
pub const AWESOME_MARKERS_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js";
pub const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css";
pub const FULLSCREEN_CSS: &str =
    "https://cdn.jsdelivr.net/npm/leaflet.fullscreen@3.0.2/Control.FullScreen.css";
pub const FULLSCREEN_JS: &str =
    "https://cdn.jsdelivr.net/npm/leaflet.fullscreen@3.0.2/Control.FullScreen.js";
pub const LOCATE_CSS: &str =
    "https://cdn.jsdelivr.net/npm/leaflet.locatecontrol@0.79.0/dist/L.Control.Locate.min.css";
pub const LOCATE_JS: &str =
    "https://cdn.jsdelivr.net/npm/leaflet.locatecontrol@0.79.0/dist/L.Control.Locate.min.js";
