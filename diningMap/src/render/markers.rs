//! Per-location marker definitions and their popup/label markup.
//!
//! Popups and labels are rendered as real DOM nodes inside a hidden template
//! container; the viewer script looks them up by location key and hands the
//! nodes to the map widget, so location text is never spliced into script
//! strings.

use maud::{html, Markup};
use serde::Serialize;

use crate::data::location::{Coordinates, Location};
use crate::render::navigation::NavProvider;

pub const PLACEHOLDER_CLASS: &str = "distance-placeholder";
pub const PLACEHOLDER_TEXT: &str = "📍 Click location button above to see walking distance";

pub fn popup_id(key: &str) -> String {
    format!("popup-{}", key)
}

pub fn label_id(key: &str) -> String {
    format!("label-{}", key)
}

/// A primary marker plus its label, in the form the viewer script consumes.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerSpec {
    pub key: String,
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub tooltip: String,
    pub category: &'static str,
    pub icon: String,
    pub color: &'static str,
    #[serde(skip)]
    pub description: String,
    #[serde(skip)]
    pub hours: String,
}

impl MarkerSpec {
    pub fn from_location(location: &Location) -> Self {
        Self {
            key: location.get_key().to_string(),
            name: location.get_name().to_string(),
            label: location.short_label().to_string(),
            coordinates: location.get_coordinates(),
            tooltip: format!("{} - Click for details & directions", location.get_name()),
            category: location.get_category().display_name(),
            icon: location.get_icon().to_string(),
            color: location.get_color().as_str(),
            description: location.get_description().to_string(),
            hours: location.get_hours().to_string(),
        }
    }

    pub fn popup(&self) -> Markup {
        html! {
            div id=(popup_id(&self.key)) class="location-popup" data-location-key=(self.key) {
                h3 { "🍴 " (self.name) }
                p class="location-category" { (self.category) }
                hr;
                p { b { "Description:" } " " (self.description) }
                p { b { "Hours:" } " " (self.hours) }
                div class=(PLACEHOLDER_CLASS) {
                    small { (PLACEHOLDER_TEXT) }
                }
                (self.nav_buttons())
            }
        }
    }

    fn nav_buttons(&self) -> Markup {
        html! {
            div class="nav-buttons" {
                div class="nav-title" { "🧭 Get Directions:" }
                div class="nav-row" {
                    @for provider in NavProvider::ALL {
                        a class="nav-link"
                            href=(provider.directions_url(self.coordinates))
                            target="_blank"
                            rel="noopener"
                            style=(format!("background: {};", provider.button_color())) {
                            (provider.emoji()) " " (provider.display_name())
                        }
                    }
                }
            }
        }
    }

    pub fn label_markup(&self) -> Markup {
        html! {
            div id=(label_id(&self.key)) class="location-label" { (self.label) }
        }
    }
}
