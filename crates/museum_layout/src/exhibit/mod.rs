//! Exhibit catalog: the museum objects to lay out, in display order.
//!
//! With the `serde` feature a [`Catalog`] deserializes directly from the JSON
//! array the viewer ships (`[{"id", "name", "location": [lat, lon],
//! "description"}, ...]`), rejecting duplicate ids.
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod arrange;
pub mod media;

pub type ExhibitId = String;

/// Geographic origin of an exhibit, in degrees.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 2]", into = "[f64; 2]"))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(p: GeoPoint) -> Self {
        [p.lat, p.lon]
    }
}

/// A single museum object.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Exhibit {
    /// Stable identifier, also used to locate the exhibit's model files.
    pub id: ExhibitId,
    /// Display name.
    pub name: String,
    /// Where the object comes from.
    pub location: GeoPoint,
    /// Description markup (HTML in the shipped data).
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl Exhibit {
    pub fn new(id: impl Into<ExhibitId>, name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Ordered, id-unique collection of exhibits. Order decides layout index.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Exhibit>", into = "Vec<Exhibit>")
)]
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    exhibits: Vec<Exhibit>,
    index: HashMap<ExhibitId, usize>,
}

impl Catalog {
    pub fn new(exhibits: Vec<Exhibit>) -> Result<Self> {
        let mut index = HashMap::with_capacity(exhibits.len());
        for (i, e) in exhibits.iter().enumerate() {
            if index.insert(e.id.clone(), i).is_some() {
                return Err(Error::DuplicateExhibit { id: e.id.clone() });
            }
        }
        Ok(Self { exhibits, index })
    }

    pub fn get(&self, id: &str) -> Option<&Exhibit> {
        self.index.get(id).map(|&i| &self.exhibits[i])
    }

    /// Layout index of the exhibit with `id`.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Exhibit> {
        self.exhibits.iter()
    }

    pub fn as_slice(&self) -> &[Exhibit] {
        &self.exhibits
    }

    pub fn len(&self) -> usize {
        self.exhibits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exhibits.is_empty()
    }
}

impl TryFrom<Vec<Exhibit>> for Catalog {
    type Error = Error;

    fn try_from(exhibits: Vec<Exhibit>) -> Result<Self> {
        Catalog::new(exhibits)
    }
}

impl From<Catalog> for Vec<Exhibit> {
    fn from(catalog: Catalog) -> Self {
        catalog.exhibits
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Exhibit;
    type IntoIter = std::slice::Iter<'a, Exhibit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
