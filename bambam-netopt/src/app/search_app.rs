use super::{
    network_reader::read_network,
    result_writer::{write_search_result, ReportDiagnostics},
};
use crate::algorithm::{
    diagnostics::NetworkSummary,
    simulation::{search_new_lines, SearchResult},
};
use crate::config::NetoptConfiguration;
use crate::model::{network::ModeSpeeds, NetoptCliError};
use std::path::Path;

/// reads a network, searches it for the most cost-effective new lines and
/// writes the results to `output_directory`.
pub fn run_search(
    stops_file: &Path,
    edges_file: &Path,
    distances_file: Option<&Path>,
    conf: &NetoptConfiguration,
    output_directory: &Path,
) -> Result<SearchResult, NetoptCliError> {
    let network = read_network(stops_file, edges_file, distances_file)?;
    let speeds = ModeSpeeds::from_graph(
        &network.graph,
        &network.geo,
        &conf.line_classifier,
        &conf.speeds,
    )?;

    let base_summary = if conf.diagnostics {
        let summary = NetworkSummary::from_graph(&network.graph);
        summary.log("base network");
        Some(summary)
    } else {
        None
    };

    let result = search_new_lines(
        &network,
        &speeds,
        &conf.costs,
        &conf.search_parameters(),
        &conf.search_control(),
    )?;

    let diagnostics = base_summary.map(|base| {
        let best_per_mode = result
            .improvements
            .iter()
            .filter_map(|(mode, imps)| {
                let best = imps.first()?;
                let summary = NetworkSummary::from_graph(&best.graph);
                summary.log(&format!("best {mode} network"));
                Some((*mode, summary))
            })
            .collect();
        ReportDiagnostics {
            base,
            best_per_mode,
        }
    });

    write_search_result(&result, diagnostics.as_ref(), output_directory, conf.overwrite)?;
    Ok(result)
}

/// reads a network and computes its summary metrics.
pub fn run_summary(stops_file: &Path, edges_file: &Path) -> Result<NetworkSummary, NetoptCliError> {
    let network = read_network(stops_file, edges_file, None)?;
    let summary = NetworkSummary::from_graph(&network.graph);
    summary.log("network");
    Ok(summary)
}
