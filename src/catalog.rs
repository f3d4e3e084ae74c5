//! Star and constellation catalog.
//!
//! The viewer ships with a built-in JSON catalog; parsing walks the
//! document as untyped values and drops malformed entries with a warning
//! rather than failing the whole load. NaN or out-of-range coordinates
//! are rejected here so the math core never sees them.

use std::collections::HashMap;

use crate::celestial::CelestialCoordinate;

const BUILTIN_CATALOG: &str = include_str!("../stars.json");

pub struct Star {
    pub id: u32,
    pub name: String,
    /// Apparent magnitude; smaller is brighter.
    pub magnitude: f64,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub spectral_type: Option<String>,
    pub distance_ly: Option<f64>,
}

impl Star {
    pub fn coordinate(&self) -> CelestialCoordinate {
        CelestialCoordinate::new(self.ra_deg, self.dec_deg)
    }
}

pub struct Constellation {
    pub name: String,
    /// Ordered star-id pairs to connect.
    pub lines: Vec<(u32, u32)>,
}

impl Constellation {
    /// Member star ids in first-appearance order over the line list.
    pub fn star_ids(&self) -> Vec<u32> {
        let mut ids = Vec::new();
        for &(a, b) in &self.lines {
            if !ids.contains(&a) {
                ids.push(a);
            }
            if !ids.contains(&b) {
                ids.push(b);
            }
        }
        ids
    }
}

pub struct Catalog {
    pub stars: Vec<Star>,
    pub constellations: Vec<Constellation>,
    index: HashMap<u32, usize>,
}

pub enum CatalogLoadState {
    Loaded(Catalog),
    Failed(String),
}

impl Catalog {
    pub fn builtin() -> CatalogLoadState {
        match parse_catalog(BUILTIN_CATALOG) {
            Ok(catalog) => CatalogLoadState::Loaded(catalog),
            Err(err) => {
                log::warn!("built-in catalog failed to parse: {}", err);
                CatalogLoadState::Failed(err)
            }
        }
    }

    pub fn from_parts(stars: Vec<Star>, constellations: Vec<Constellation>) -> Self {
        let index = stars
            .iter()
            .enumerate()
            .map(|(i, star)| (star.id, i))
            .collect();
        Self {
            stars,
            constellations,
            index,
        }
    }

    pub fn star(&self, id: u32) -> Option<&Star> {
        self.index.get(&id).map(|&i| &self.stars[i])
    }

    pub fn constellation_stars(&self, cons: &Constellation) -> Vec<&Star> {
        cons.star_ids()
            .iter()
            .filter_map(|&id| self.star(id))
            .collect()
    }
}

pub fn parse_catalog(json: &str) -> Result<Catalog, String> {
    let v: serde_json::Value = serde_json::from_str(json).map_err(|e| format!("{}", e))?;
    let entries = v["stars"].as_array().ok_or("no stars array")?;
    let mut stars = Vec::with_capacity(entries.len());
    for entry in entries {
        match parse_star(entry) {
            Some(star) => stars.push(star),
            None => log::warn!("skipping malformed star entry: {}", entry),
        }
    }
    if stars.is_empty() {
        return Err("catalog contains no usable stars".to_string());
    }
    let mut constellations = Vec::new();
    if let Some(entries) = v["constellations"].as_array() {
        for entry in entries {
            match parse_constellation(entry) {
                Some(cons) => constellations.push(cons),
                None => log::warn!("skipping malformed constellation entry: {}", entry),
            }
        }
    }
    Ok(Catalog::from_parts(stars, constellations))
}

fn parse_star(entry: &serde_json::Value) -> Option<Star> {
    let id = u32::try_from(entry["id"].as_u64()?).ok()?;
    let name = entry["name"].as_str()?.to_string();
    let magnitude = entry["magnitude"].as_f64()?;
    let ra = entry["ra"].as_f64()?;
    let dec = entry["dec"].as_f64()?;
    if !ra.is_finite() || !dec.is_finite() || !magnitude.is_finite() {
        return None;
    }
    if !(-90.0..=90.0).contains(&dec) {
        return None;
    }
    Some(Star {
        id,
        name,
        magnitude,
        ra_deg: ra.rem_euclid(360.0),
        dec_deg: dec,
        spectral_type: entry["spectral"].as_str().map(str::to_string),
        distance_ly: entry["distance_ly"].as_f64(),
    })
}

fn parse_constellation(entry: &serde_json::Value) -> Option<Constellation> {
    let name = entry["name"].as_str()?.to_string();
    let pairs = entry["lines"].as_array()?;
    let mut lines = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let pair = pair.as_array()?;
        let a = u32::try_from(pair.first()?.as_u64()?).ok()?;
        let b = u32::try_from(pair.get(1)?.as_u64()?).ok()?;
        lines.push((a, b));
    }
    Some(Constellation { name, lines })
}
