use super::{LineMode, StopId};
use serde::{Deserialize, Serialize};

/// assigns existing lines to a [`LineMode`] from the line tag of their stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineClassifier {
    /// line tags operated as RER
    pub rer_line_tags: Vec<String>,
    /// line tags starting with this prefix are trams
    pub tram_line_prefix: String,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self {
            rer_line_tags: vec![String::from("A"), String::from("B")],
            tram_line_prefix: String::from("T"),
        }
    }
}

impl LineClassifier {
    /// classifies a stop by its line tag. anything neither RER nor tram is
    /// treated as metro.
    pub fn classify(&self, stop: &StopId) -> LineMode {
        let tag = stop.line_tag();
        if self.rer_line_tags.iter().any(|t| t == tag) {
            LineMode::Rer
        } else if !self.tram_line_prefix.is_empty() && tag.starts_with(&self.tram_line_prefix) {
            LineMode::Tram
        } else {
            LineMode::Metro
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classification() {
        let classifier = LineClassifier::default();
        assert_eq!(classifier.classify(&StopId::from("A - Nation")), LineMode::Rer);
        assert_eq!(classifier.classify(&StopId::from("B - Gare du Nord")), LineMode::Rer);
        assert_eq!(classifier.classify(&StopId::from("T3a - Porte d'Italie")), LineMode::Tram);
        assert_eq!(classifier.classify(&StopId::from("14 - Olympiades")), LineMode::Metro);
    }
}
