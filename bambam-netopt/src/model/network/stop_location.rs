use super::StopId;
use crate::model::NetoptError;
use geo::{Coord, Distance, Haversine, Point};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// geographic position of a stop in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopLocation {
    pub lat: f64,
    pub lon: f64,
}

/// stop coordinates keyed by stop identifier.
pub type GeoLookup = HashMap<StopId, StopLocation>;

impl StopLocation {
    pub fn new(lat: f64, lon: f64) -> StopLocation {
        StopLocation { lat, lon }
    }

    /// planar coordinate with x = longitude, y = latitude.
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }

    pub fn point(&self) -> Point<f64> {
        Point::from(self.coord())
    }

    /// great-circle distance in kilometers.
    pub fn haversine_km(&self, other: &StopLocation) -> f64 {
        Haversine.distance(self.point(), other.point()) / 1000.0
    }
}

/// helper with error handling for getting the location of a stop
pub fn stop_location<'a>(
    geo: &'a GeoLookup,
    stop: &StopId,
) -> Result<&'a StopLocation, NetoptError> {
    geo.get(stop)
        .ok_or_else(|| NetoptError::MissingGeoData(stop.clone()))
}

/// great-circle distance in kilometers between two stops of the geo lookup.
pub fn geo_distance_km(geo: &GeoLookup, a: &StopId, b: &StopId) -> Result<f64, NetoptError> {
    let loc_a = stop_location(geo, a)?;
    let loc_b = stop_location(geo, b)?;
    Ok(loc_a.haversine_km(loc_b))
}
