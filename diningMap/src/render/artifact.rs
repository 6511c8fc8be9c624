use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::constants::{
    AWESOME_MARKERS_CSS, AWESOME_MARKERS_JS, FONT_AWESOME_CSS, FULLSCREEN_CSS, FULLSCREEN_JS,
    LEAFLET_CSS, LEAFLET_JS, LOCATE_CSS, LOCATE_JS, PANEL_BACKGROUND, POPUP_WIDTH,
};
use crate::render::markers::MarkerSpec;
use crate::render::tiles::TileLayer;

/// The generated map page. Built once by `render::builder::build` and only
/// read afterwards.
#[derive(Debug, Clone)]
pub struct MapArtifact {
    title: String,
    branding_text: String,
    markers: Vec<MarkerSpec>,
    tile_layers: Vec<TileLayer>,
    style: String,
    script: String,
}

impl MapArtifact {
    pub(crate) fn new(
        title: String,
        branding_text: String,
        markers: Vec<MarkerSpec>,
        tile_layers: Vec<TileLayer>,
        style: String,
        script: String,
    ) -> Self {
        Self {
            title,
            branding_text,
            markers,
            tile_layers,
            style,
            script,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }

    pub fn tile_layers(&self) -> &[TileLayer] {
        &self.tile_layers
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    /// Marker keys in declaration order; the same order the script receives.
    pub fn marker_keys(&self) -> Vec<&str> {
        self.markers.iter().map(|m| m.key.as_str()).collect()
    }

    pub fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) }
                    @for css in [LEAFLET_CSS, AWESOME_MARKERS_CSS, FONT_AWESOME_CSS, FULLSCREEN_CSS, LOCATE_CSS] {
                        link rel="stylesheet" href=(css);
                    }
                    @for js in [LEAFLET_JS, AWESOME_MARKERS_JS, FULLSCREEN_JS, LOCATE_JS] {
                        script src=(js) {}
                    }
                    style { (PreEscaped(&self.style)) }
                }
                body {
                    div id="map" {}
                    div class="branding" {
                        span { (self.branding_text) }
                    }
                    div id="marker-templates" hidden {
                        @for marker in &self.markers {
                            (marker.popup())
                            (marker.label_markup())
                        }
                    }
                    script { (PreEscaped(&self.script)) }
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

pub fn page_style(accent_color: &str) -> String {
    format!(
        r#"
html, body {{ height: 100%; margin: 0; padding: 0; }}
#map {{ position: absolute; inset: 0; }}
:root {{ --accent: {accent}; }}
.location-popup {{ font-family: Arial, sans-serif; width: {popup_width}px; }}
.location-popup h3 {{ color: var(--accent); margin: 5px 0; }}
.location-popup hr {{ margin: 5px 0; border-color: var(--accent); }}
.location-popup p {{ margin: 5px 0; }}
.location-popup .location-category {{ color: #666; font-size: 12px; text-transform: uppercase; }}
.distance-placeholder {{ color: #666; margin-top: 8px; }}
.distance-info {{ background: {panel}; padding: 8px; border-radius: 5px; margin-top: 8px; border: 1px solid var(--accent); color: #333; }}
.nav-buttons {{ margin-top: 10px; text-align: center; }}
.nav-title {{ margin-bottom: 8px; font-weight: bold; color: var(--accent); }}
.nav-row {{ display: flex; gap: 8px; justify-content: center; flex-wrap: wrap; }}
.nav-link {{ color: white !important; padding: 6px 12px; border-radius: 4px; text-decoration: none; font-size: 12px; display: inline-block; }}
.location-label-icon {{ background: none; border: none; }}
.location-label {{ font-size: 11px; color: var(--accent); font-weight: bold; text-align: center; white-space: nowrap;
  text-shadow: 2px 2px 4px white, -2px -2px 4px white, 2px -2px 4px white, -2px 2px 4px white; }}
.branding {{ position: fixed; bottom: 30px; left: 10px; background-color: white; border: 1px solid var(--accent);
  z-index: 9999; font-size: 14px; padding: 8px; border-radius: 3px; }}
.branding span {{ color: var(--accent); font-weight: bold; }}
"#,
        accent = accent_color,
        popup_width = POPUP_WIDTH,
        panel = PANEL_BACKGROUND,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_style_uses_accent() {
        let css = page_style("#123456");
        assert!(css.contains("--accent: #123456;"));
        assert!(css.contains("width: 320px;"));
    }

    #[test]
    fn test_empty_artifact_renders_shell() {
        let artifact = MapArtifact::new(
            "T & C".to_string(),
            "Brand".to_string(),
            Vec::new(),
            Vec::new(),
            String::new(),
            "var x = 1;".to_string(),
        );
        let html = artifact.to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>T &amp; C</title>"));
        assert!(html.contains(r#"<div id="map"></div>"#));
        assert!(html.contains("<script>var x = 1;</script>"));
        assert!(artifact.marker_keys().is_empty());
    }
}
