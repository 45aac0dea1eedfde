use super::{stop_location, GeoLookup, LineClassifier, LineMode, TransitGraph};
use crate::model::NetoptError;
use serde::{Deserialize, Serialize};

/// empirical travel characteristics of the base network, used to weight the
/// edges of a simulated line and to normalize efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeSpeeds {
    #[serde(rename = "RER")]
    pub rer_kmh: f64,
    pub metro_kmh: f64,
    pub tram_kmh: f64,
    /// average walking speed between hub stops, if any walk edge had a length
    pub walk_kmh: Option<f64>,
    /// average time spent walking between two stops of a hub
    pub transfer_time_seconds: f64,
}

/// user-supplied values that replace the estimates of [`ModeSpeeds::from_graph`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeSpeedOverrides {
    #[serde(rename = "RER")]
    pub rer_kmh: Option<f64>,
    pub metro_kmh: Option<f64>,
    pub tram_kmh: Option<f64>,
    pub transfer_time_seconds: Option<f64>,
}

#[derive(Default)]
struct SpeedSamples {
    rer: Vec<f64>,
    metro: Vec<f64>,
    tram: Vec<f64>,
    walk_speed: Vec<f64>,
    walk_time: Vec<f64>,
}

impl ModeSpeeds {
    pub fn speed_kmh(&self, mode: LineMode) -> f64 {
        match mode {
            LineMode::Rer => self.rer_kmh,
            LineMode::Metro => self.metro_kmh,
            LineMode::Tram => self.tram_kmh,
        }
    }

    /// the idealized network assumes every pair of stops is linked directly
    /// at RER speed.
    pub fn reference_speed_kmh(&self) -> f64 {
        self.rer_kmh
    }

    /// estimates the average speed of each line mode and the average walking
    /// transfer time from the edges of a graph. the speed of an edge is its
    /// great-circle length over its traversal time; zero-length edges are
    /// ignored. overrides take precedence, and a mode with neither samples
    /// nor override is an error.
    pub fn from_graph(
        graph: &TransitGraph,
        geo: &GeoLookup,
        classifier: &LineClassifier,
        overrides: &ModeSpeedOverrides,
    ) -> Result<ModeSpeeds, NetoptError> {
        let mut samples = SpeedSamples::default();
        for (src, edge) in graph.edge_iter() {
            if edge.length == 0.0 {
                continue;
            }
            let src_loc = stop_location(geo, src)?;
            let dst_loc = stop_location(geo, &edge.dst)?;
            let speed_kmh = (src_loc.haversine_km(dst_loc) / edge.length) * 3600.0;
            if edge.mode.is_walk() {
                samples.walk_speed.push(speed_kmh);
                samples.walk_time.push(edge.length);
            } else {
                match classifier.classify(src) {
                    LineMode::Rer => samples.rer.push(speed_kmh),
                    LineMode::Metro => samples.metro.push(speed_kmh),
                    LineMode::Tram => samples.tram.push(speed_kmh),
                }
            }
        }

        let speeds = ModeSpeeds {
            rer_kmh: resolve(overrides.rer_kmh, &samples.rer, LineMode::Rer.as_str())?,
            metro_kmh: resolve(overrides.metro_kmh, &samples.metro, LineMode::Metro.as_str())?,
            tram_kmh: resolve(overrides.tram_kmh, &samples.tram, LineMode::Tram.as_str())?,
            walk_kmh: mean(&samples.walk_speed),
            transfer_time_seconds: resolve(
                overrides.transfer_time_seconds,
                &samples.walk_time,
                "walk",
            )?,
        };
        log::info!("average speed of RERs (km/h): {}", speeds.rer_kmh);
        log::info!("average speed of metros (km/h): {}", speeds.metro_kmh);
        log::info!("average speed of trams (km/h): {}", speeds.tram_kmh);
        if let Some(walk) = speeds.walk_kmh {
            log::info!("average speed of walking (km/h): {walk}");
        }
        log::info!(
            "average time spent walking between two stations (sec): {}",
            speeds.transfer_time_seconds
        );
        Ok(speeds)
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn resolve(
    override_value: Option<f64>,
    values: &[f64],
    name: &str,
) -> Result<f64, NetoptError> {
    override_value
        .or_else(|| mean(values))
        .ok_or_else(|| NetoptError::InsufficientSpeedData(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::{EdgeMode, StopId, StopLocation};

    fn add_leg(
        graph: &mut TransitGraph,
        geo: &mut GeoLookup,
        src: (&str, f64, f64),
        dst: (&str, f64, f64),
        mode: EdgeMode,
        speed_kmh: f64,
    ) {
        let (src_id, dst_id) = (StopId::from(src.0), StopId::from(dst.0));
        let src_loc = StopLocation::new(src.1, src.2);
        let dst_loc = StopLocation::new(dst.1, dst.2);
        let seconds = src_loc.haversine_km(&dst_loc) / speed_kmh * 3600.0;
        geo.insert(src_id.clone(), src_loc);
        geo.insert(dst_id.clone(), dst_loc);
        graph.add_edge(&src_id, &dst_id, mode, seconds);
    }

    #[test]
    fn test_from_graph_estimates_each_mode() {
        let mut graph = TransitGraph::empty();
        let mut geo = GeoLookup::new();
        let t = EdgeMode::Transit;
        add_leg(&mut graph, &mut geo, ("A - 1", 48.80, 2.30), ("A - 2", 48.90, 2.30), t, 50.0);
        add_leg(&mut graph, &mut geo, ("B - 1", 48.80, 2.40), ("B - 2", 48.80, 2.50), t, 70.0);
        add_leg(&mut graph, &mut geo, ("T2 - 1", 48.70, 2.30), ("T2 - 2", 48.71, 2.30), t, 20.0);
        add_leg(&mut graph, &mut geo, ("6 - 1", 48.60, 2.30), ("6 - 2", 48.62, 2.30), t, 30.0);
        // co-located hub stops, walk speed is 0 but the transfer time counts
        geo.insert(StopId::from("6 - 3"), StopLocation::new(48.62, 2.30));
        graph.add_edge(&StopId::from("6 - 2"), &StopId::from("6 - 3"), EdgeMode::Walk, 100.0);
        graph.add_edge(&StopId::from("6 - 3"), &StopId::from("6 - 2"), EdgeMode::Walk, 200.0);
        // ignored zero-length edge
        graph.add_edge(&StopId::from("6 - 1"), &StopId::from("6 - 2"), EdgeMode::Transit, 0.0);

        let speeds = ModeSpeeds::from_graph(
            &graph,
            &geo,
            &LineClassifier::default(),
            &ModeSpeedOverrides::default(),
        )
        .unwrap();
        assert!((speeds.rer_kmh - 60.0).abs() < 1e-9);
        assert!((speeds.tram_kmh - 20.0).abs() < 1e-9);
        assert!((speeds.metro_kmh - 30.0).abs() < 1e-9);
        assert!((speeds.transfer_time_seconds - 150.0).abs() < 1e-9);
        assert_eq!(speeds.walk_kmh, Some(0.0));
        assert_eq!(speeds.reference_speed_kmh(), speeds.rer_kmh);
    }

    #[test]
    fn test_missing_mode_requires_override() {
        let mut graph = TransitGraph::empty();
        let mut geo = GeoLookup::new();
        add_leg(
            &mut graph,
            &mut geo,
            ("A - 1", 48.80, 2.30),
            ("A - 2", 48.90, 2.30),
            EdgeMode::Transit,
            50.0,
        );
        let classifier = LineClassifier::default();
        let result =
            ModeSpeeds::from_graph(&graph, &geo, &classifier, &ModeSpeedOverrides::default());
        assert!(matches!(result, Err(NetoptError::InsufficientSpeedData(_))));

        let overrides = ModeSpeedOverrides {
            rer_kmh: None,
            metro_kmh: Some(25.0),
            tram_kmh: Some(18.0),
            transfer_time_seconds: Some(240.0),
        };
        let speeds = ModeSpeeds::from_graph(&graph, &geo, &classifier, &overrides).unwrap();
        assert!((speeds.rer_kmh - 50.0).abs() < 1e-9);
        assert_eq!(speeds.metro_kmh, 25.0);
        assert_eq!(speeds.tram_kmh, 18.0);
        assert_eq!(speeds.transfer_time_seconds, 240.0);
        assert_eq!(speeds.walk_kmh, None);
    }
}
