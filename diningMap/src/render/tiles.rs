use serde::Serialize;

/// A selectable background layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub name: &'static str,
    pub url: &'static str,
    pub attribution: &'static str,
    pub is_default: bool,
}

pub fn default_tile_layers() -> Vec<TileLayer> {
    vec![
        TileLayer {
            name: "OpenStreetMap",
            url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
            attribution: "&copy; OpenStreetMap contributors",
            is_default: true,
        },
        TileLayer {
            name: "Light Mode",
            url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
            attribution: "&copy; OpenStreetMap contributors &copy; CARTO",
            is_default: false,
        },
        TileLayer {
            name: "Dark Mode",
            url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
            attribution: "&copy; OpenStreetMap contributors &copy; CARTO",
            is_default: false,
        },
        TileLayer {
            name: "Satellite View",
            url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
            attribution: "Esri",
            is_default: false,
        },
    ]
}
