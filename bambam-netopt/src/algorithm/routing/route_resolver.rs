use super::segment_intersection;
use crate::model::network::{stop_location, DistanceLookup, GeoLookup, StopId, TransitGraph};
use crate::model::NetoptError;
use geo::{Coord, Distance, Euclidean, Line, Point};
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};

/// the existing stops a new line would serve, ordered from its first
/// endpoint, with the hub-mates of each of them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    pub stops: Vec<StopId>,
    /// one-walk-edge neighbors of each stop of the route
    pub hub_adjacency: BTreeMap<StopId, BTreeSet<StopId>>,
}

/// finds the interchanges of a straight line drawn between two stops.
///
/// every transit edge crossed by the segment contributes the edge endpoint
/// nearest to the crossing point (planar distance in degrees, ties going to
/// the edge destination), unless that stop is already on the route or is a
/// hub-mate of a stop on the route. edges touching either endpoint's
/// coordinates are ignored, as are edges whose stops have no coordinates.
///
/// # Arguments
///
/// * `stop_a` - first endpoint, which the route is ordered from
/// * `stop_b` - second endpoint
/// * `graph` - network the line is drawn over
/// * `distances` - distance table used to order the route
/// * `geo` - stop coordinates
///
/// # Returns
///
/// The route in ascending distance from `stop_a`, or an error if either
/// endpoint has no coordinates or a route stop has no distance to `stop_a`.
pub fn resolve_route<D: DistanceLookup>(
    stop_a: &StopId,
    stop_b: &StopId,
    graph: &TransitGraph,
    distances: &D,
    geo: &GeoLookup,
) -> Result<ResolvedRoute, NetoptError> {
    let a_coord = stop_location(geo, stop_a)?.coord();
    let b_coord = stop_location(geo, stop_b)?.coord();
    let new_line = Line::new(a_coord, b_coord);

    let mut selected: Vec<StopId> = vec![stop_a.clone(), stop_b.clone()];
    let mut hub_adjacency: BTreeMap<StopId, BTreeSet<StopId>> = BTreeMap::new();
    hub_adjacency.insert(stop_a.clone(), graph.walk_neighbors(stop_a));
    hub_adjacency.insert(stop_b.clone(), graph.walk_neighbors(stop_b));

    for (src, edge) in graph.sorted_transit_edges() {
        let (src_coord, dst_coord) = match (geo.get(src), geo.get(&edge.dst)) {
            (Some(s), Some(d)) => (s.coord(), d.coord()),
            _ => {
                log::debug!("edge {src} -> {} has a stop without coordinates, skipping", edge.dst);
                continue;
            }
        };
        let shares_coordinate = [src_coord, dst_coord]
            .iter()
            .any(|c| *c == a_coord || *c == b_coord);
        if shares_coordinate {
            continue;
        }
        let crossing = match segment_intersection(Line::new(src_coord, dst_coord), new_line) {
            Some(c) => c,
            None => continue,
        };
        let interchange = if planar_distance(crossing, src_coord) < planar_distance(crossing, dst_coord) {
            src
        } else {
            &edge.dst
        };
        let is_selected = selected.contains(interchange);
        let is_hub_mate = hub_adjacency.values().any(|mates| mates.contains(interchange));
        if is_selected || is_hub_mate {
            continue;
        }
        log::debug!("line {stop_a} <-> {stop_b} crosses {src} -> {} at {interchange}", edge.dst);
        selected.push(interchange.clone());
        hub_adjacency.insert(interchange.clone(), graph.walk_neighbors(interchange));
    }

    let with_distance = selected
        .into_iter()
        .map(|stop| -> Result<(StopId, f64), NetoptError> {
            if &stop == stop_a {
                Ok((stop, 0.0))
            } else {
                let d = distances.distance_km(&stop, stop_a)?;
                Ok((stop, d))
            }
        })
        .collect::<Result<Vec<_>, NetoptError>>()?;
    let stops = with_distance
        .into_iter()
        .sorted_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(stop, _)| stop)
        .collect_vec();

    Ok(ResolvedRoute {
        stops,
        hub_adjacency,
    })
}

fn planar_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    Euclidean.distance(Point::from(a), Point::from(b))
}
