use crate::{
    algorithm::{
        filter::DEFAULT_MIN_LENGTH_KM,
        simulation::{SearchControl, SearchParameters},
    },
    model::{
        network::{LineClassifier, LineMode, ModeCosts, ModeSpeedOverrides},
        NetoptCliError,
    },
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// defines behaviors for a new line search
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct NetoptConfiguration {
    /// number of cheapest candidates to simulate per mode
    pub k: usize,
    /// number of best improvements to report per mode
    pub n: usize,
    pub min_candidate_length_km: f64,
    pub modes: Vec<LineMode>,
    pub costs: ModeCosts,
    pub speeds: ModeSpeedOverrides,
    pub line_classifier: LineClassifier,
    pub parallelize: bool,
    /// stop evaluating candidates after this many seconds
    pub time_limit_seconds: Option<u64>,
    pub overwrite: bool,
    /// compute summary metrics of the base network and of each best line
    pub diagnostics: bool,
}

impl Default for NetoptConfiguration {
    fn default() -> Self {
        Self {
            k: 100,
            n: 5,
            min_candidate_length_km: DEFAULT_MIN_LENGTH_KM,
            modes: LineMode::ALL.to_vec(),
            costs: ModeCosts::default(),
            speeds: ModeSpeedOverrides::default(),
            line_classifier: LineClassifier::default(),
            parallelize: true,
            time_limit_seconds: None,
            overwrite: false,
            diagnostics: true,
        }
    }
}

impl NetoptConfiguration {
    pub fn search_parameters(&self) -> SearchParameters {
        SearchParameters {
            k: self.k,
            n: self.n,
            min_length_km: self.min_candidate_length_km,
            modes: self.modes.clone(),
            parallelize: self.parallelize,
        }
    }

    pub fn search_control(&self) -> SearchControl {
        match self.time_limit_seconds {
            Some(secs) => SearchControl::with_time_limit(Duration::from_secs(secs)),
            None => SearchControl::new(),
        }
    }
}

impl TryFrom<&String> for NetoptConfiguration {
    type Error = NetoptCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                NetoptCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                NetoptCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                NetoptCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                NetoptCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(NetoptCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::scratch_directory;

    #[test]
    fn test_defaults() {
        let conf = NetoptConfiguration::default();
        let params = conf.search_parameters();
        assert_eq!(params.k, 100);
        assert_eq!(params.n, 5);
        assert_eq!(params.min_length_km, 5.0);
        assert_eq!(params.modes, LineMode::ALL.to_vec());
        assert_eq!(conf.costs.tram, 22_000_000.0);
        assert!(!conf.search_control().is_stopped());
    }

    #[test]
    fn test_decode_partial_toml() {
        let dir = scratch_directory("config-toml");
        let path = dir.join("netopt.toml");
        let contents = r#"
k = 20
modes = ["tram", "RER"]
time_limit_seconds = 600

[costs]
RER = 100000000.0
metro = 70000000.0
tram = 25000000.0

[speeds]
tram_kmh = 19.5
"#;
        std::fs::write(&path, contents).unwrap();
        let conf = NetoptConfiguration::try_from(&path.to_string_lossy().to_string()).unwrap();
        assert_eq!(conf.k, 20);
        assert_eq!(conf.n, 5);
        assert_eq!(conf.modes, vec![LineMode::Tram, LineMode::Rer]);
        assert_eq!(conf.costs.tram, 25_000_000.0);
        assert_eq!(conf.speeds.tram_kmh, Some(19.5));
        assert_eq!(conf.speeds.rer_kmh, None);
        assert_eq!(conf.time_limit_seconds, Some(600));
        assert_eq!(conf.line_classifier, LineClassifier::default());
    }

    #[test]
    fn test_decode_json_and_reject_other_extensions() {
        let dir = scratch_directory("config-json");
        let path = dir.join("netopt.json");
        std::fs::write(&path, r#"{"n": 2, "parallelize": false}"#).unwrap();
        let conf = NetoptConfiguration::try_from(&path.to_string_lossy().to_string()).unwrap();
        assert_eq!(conf.n, 2);
        assert!(!conf.parallelize);

        let yaml = dir.join("netopt.yaml").to_string_lossy().to_string();
        assert!(matches!(
            NetoptConfiguration::try_from(&yaml),
            Err(NetoptCliError::ConfigurationError(_))
        ));
    }
}
