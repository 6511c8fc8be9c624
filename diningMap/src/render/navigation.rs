use crate::data::location::Coordinates;

/// External map apps the popup links out to for directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavProvider {
    GoogleMaps,
    AppleMaps,
    Waze,
}

impl NavProvider {
    pub const ALL: [NavProvider; 3] = [NavProvider::GoogleMaps, NavProvider::AppleMaps, NavProvider::Waze];

    pub fn display_name(&self) -> &'static str {
        match self {
            NavProvider::GoogleMaps => "Google Maps",
            NavProvider::AppleMaps => "Apple Maps",
            NavProvider::Waze => "Waze",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            NavProvider::GoogleMaps => "📍",
            NavProvider::AppleMaps => "🍎",
            NavProvider::Waze => "🚗",
        }
    }

    pub fn button_color(&self) -> &'static str {
        match self {
            NavProvider::GoogleMaps => "#4285f4",
            NavProvider::AppleMaps => "#007aff",
            NavProvider::Waze => "#33ccff",
        }
    }

    /// What the link is good for, as listed in the console usage notes.
    pub fn usage_hint(&self) -> &'static str {
        match self {
            NavProvider::GoogleMaps => "walking directions",
            NavProvider::AppleMaps => "iPhone/Mac users",
            NavProvider::Waze => "driving directions",
        }
    }

    /// Directions URL to `destination`. Coordinates go in as raw decimals.
    pub fn directions_url(&self, destination: Coordinates) -> String {
        let Coordinates { lat, lon } = destination;
        match self {
            NavProvider::GoogleMaps => format!(
                "https://www.google.com/maps/dir/?api=1&destination={},{}&travelmode=walking",
                lat, lon
            ),
            NavProvider::AppleMaps => format!("http://maps.apple.com/?daddr={},{}&dirflg=w&t=m", lat, lon),
            NavProvider::Waze => format!("https://www.waze.com/ul?ll={}%2C{}&navigate=yes&zoom=17", lat, lon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_urls() {
        let dest = Coordinates::new(37.22475, -80.42091);
        assert_eq!(
            NavProvider::GoogleMaps.directions_url(dest),
            "https://www.google.com/maps/dir/?api=1&destination=37.22475,-80.42091&travelmode=walking"
        );
        assert_eq!(
            NavProvider::AppleMaps.directions_url(dest),
            "http://maps.apple.com/?daddr=37.22475,-80.42091&dirflg=w&t=m"
        );
        assert_eq!(
            NavProvider::Waze.directions_url(dest),
            "https://www.waze.com/ul?ll=37.22475%2C-80.42091&navigate=yes&zoom=17"
        );
    }

    #[test]
    fn test_full_precision_coordinates_are_kept() {
        let dest = Coordinates::new(37.224750005269854, -80.42090944212596);
        let url = NavProvider::GoogleMaps.directions_url(dest);
        assert!(url.contains("destination=37.224750005269854,-80.42090944212596"));
    }
}
