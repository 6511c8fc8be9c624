use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl std::str::FromStr for Coordinates {
    type Err = anyhow::Error;

    /// Parses `"lat,lon"` in decimal degrees.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| anyhow::anyhow!("expected LAT,LON but got {:?}", s))?;
        let coordinates = Coordinates::new(lat.trim().parse()?, lon.trim().parse()?);
        anyhow::ensure!(
            coordinates.is_valid(),
            "coordinates out of range: {}, {}",
            coordinates.lat,
            coordinates.lon
        );
        Ok(coordinates)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    DiningHall,
    Cafe,
    Market,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::DiningHall => "Dining Hall",
            Category::Cafe => "Cafe",
            Category::Market => "Market",
        }
    }
}

/// Marker colours understood by the awesome-markers icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
    Orange,
    Green,
    Blue,
    Purple,
    Darkred,
    Cadetblue,
}

impl MarkerColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::Orange => "orange",
            MarkerColor::Green => "green",
            MarkerColor::Blue => "blue",
            MarkerColor::Purple => "purple",
            MarkerColor::Darkred => "darkred",
            MarkerColor::Cadetblue => "cadetblue",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    key: String,
    name: String,
    coordinates: Coordinates,
    description: String,
    hours: String,
    category: Category,
    icon: String,
    color: MarkerColor,
}

impl Location {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        coordinates: Coordinates,
        description: impl Into<String>,
        hours: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            coordinates,
            description: description.into(),
            hours: hours.into(),
            category: Category::DiningHall,
            icon: "cutlery".to_string(),
            color: MarkerColor::Orange,
        }
    }

    pub fn with_presentation(mut self, category: Category, icon: &str, color: MarkerColor) -> Self {
        self.category = category;
        self.icon = icon.to_string();
        self.color = color;
        self
    }

    pub fn get_key(&self) -> &str {
        &self.key
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn get_description(&self) -> &str {
        &self.description
    }

    pub fn get_hours(&self) -> &str {
        &self.hours
    }

    pub fn get_category(&self) -> Category {
        self.category
    }

    pub fn get_icon(&self) -> &str {
        &self.icon
    }

    pub fn get_color(&self) -> MarkerColor {
        self.color
    }

    /// Name without any parenthesised suffix, used for the map label.
    pub fn short_label(&self) -> &str {
        short_label(&self.name)
    }
}

pub fn short_label(name: &str) -> &str {
    name.split('(').next().unwrap_or(name).trim()
}
