use std::collections::HashSet;

use anyhow::{bail, ensure, Result};

use super::location::{Coordinates, Location};

/// Ordered, immutable set of locations. Declaration order is marker order.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    pub fn new(locations: Vec<Location>) -> Result<Self> {
        ensure!(!locations.is_empty(), "location registry is empty");

        validate(&locations)?;
        Ok(Self { locations })
    }

    /// The Virginia Tech all-you-care-to-eat dining halls.
    pub fn vt_dining_halls() -> Result<Self> {
        Self::new(vec![
            Location::new(
                "dietrick-hall",
                "Dietrick Hall (D2)",
                Coordinates::new(37.224750005269854, -80.42090944212596),
                "All-you-care-to-eat dining hall at Dietrick",
                "Mon-Fri: 7AM-9PM, Sat-Sun: 9AM-8PM",
            ),
            Location::new(
                "perry-place",
                "Perry Place",
                Coordinates::new(37.229636537709645, -80.42611056271015),
                "All-you-care-to-eat dining hall at Perry Street",
                "Mon-Fri: 7AM-9PM, Sat-Sun: 9AM-8PM",
            ),
            Location::new(
                "turner-place",
                "Turner Place",
                Coordinates::new(37.23113957256836, -80.42267514582704),
                "All-you-care-to-eat dining at Turner Hall",
                "Mon-Fri: 7AM-10PM, Sat-Sun: 10AM-10PM",
            ),
            Location::new(
                "west-end-market",
                "West End Market",
                Coordinates::new(37.22351950716079, -80.42187920803231),
                "All-you-care-to-eat dining hall at West End",
                "Mon-Fri: 7AM-11PM, Sat-Sun: 9AM-11PM",
            ),
        ])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get_by_key(&self, key: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.get_key() == key)
    }
}

impl<'a> IntoIterator for &'a LocationRegistry {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate(locations: &[Location]) -> Result<()> {
    let mut names = HashSet::new();
    let mut keys = HashSet::new();
    for location in locations {
        let c = location.get_coordinates();
        ensure!(
            c.is_valid(),
            "{} has out-of-range coordinates ({}, {})",
            location.get_name(),
            c.lat,
            c.lon
        );
        if !is_valid_key(location.get_key()) {
            bail!("{} has malformed key {:?}", location.get_name(), location.get_key());
        }
        if !names.insert(location.get_name()) {
            bail!("duplicate location name {:?}", location.get_name());
        }
        if !keys.insert(location.get_key()) {
            bail!("duplicate location key {:?}", location.get_key());
        }
    }
    Ok(())
}

// Keys end up in HTML attributes and JS lookups, so keep them to a plain slug.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
