use crate::algorithm::diagnostics::NetworkSummary;
use crate::algorithm::simulation::SearchResult;
use crate::model::{network::LineMode, NetoptCliError};
use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use serde::Serialize;
use std::{collections::BTreeMap, fs::File, path::Path};

mod filenames {
    pub const IMPROVEMENTS: &str = "improvements.json";

    pub fn best_graph(mode: &super::LineMode) -> String {
        format!("best-graph-{mode}.csv.gz")
    }
}

/// summary metrics of the base network and of the best network per mode.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDiagnostics {
    pub base: NetworkSummary,
    pub best_per_mode: BTreeMap<LineMode, NetworkSummary>,
}

#[derive(Serialize)]
struct SearchReport<'a> {
    #[serde(flatten)]
    result: &'a SearchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostics: Option<&'a ReportDiagnostics>,
}

/// writes `improvements.json` with the ranked improvements of each mode,
/// plus one gzipped edge list per mode holding the network with its best
/// new line built in. existing files are kept unless `overwrite` is set.
pub fn write_search_result(
    result: &SearchResult,
    diagnostics: Option<&ReportDiagnostics>,
    output_directory: &Path,
    overwrite: bool,
) -> Result<(), NetoptCliError> {
    if !output_directory.is_dir() && std::fs::create_dir_all(output_directory).is_err() {
        let dirname = output_directory.as_os_str().to_string_lossy();
        return Err(NetoptCliError::OutputError(format!(
            "unable to create directory {}",
            &dirname
        )));
    }

    let report_path = output_directory.join(filenames::IMPROVEMENTS);
    if report_path.exists() && !overwrite {
        log::warn!("{report_path:?} exists and overwrite is false, skipping");
    } else {
        let report = SearchReport {
            result,
            diagnostics,
        };
        let file = File::create(&report_path)?;
        serde_json::to_writer_pretty(file, &report)?;
        log::info!("wrote {report_path:?}");
    }

    for (mode, improvements) in result.improvements.iter() {
        let best = match improvements.first() {
            Some(b) => b,
            None => continue,
        };
        let filename = filenames::best_graph(mode);
        let mut writer = match create_writer(
            output_directory,
            &filename,
            true,
            QuoteStyle::Necessary,
            overwrite,
        )? {
            Some(w) => w,
            None => {
                log::warn!("{filename} exists and overwrite is false, skipping");
                continue;
            }
        };
        for record in best.graph.to_records() {
            writer
                .serialize(record)
                .map_err(|e| NetoptCliError::CsvError(filename.clone(), e))?;
        }
        writer.flush()?;
        log::info!("wrote best {mode} network to {filename}");
    }
    Ok(())
}

fn create_writer(
    directory: &Path,
    filename: &str,
    has_headers: bool,
    quote_style: QuoteStyle,
    overwrite: bool,
) -> Result<Option<csv::Writer<GzEncoder<File>>>, NetoptCliError> {
    let filepath = directory.join(filename);
    if filepath.exists() && !overwrite {
        return Ok(None);
    }
    let file = File::create(filepath)?;
    let buffer = GzEncoder::new(file, Compression::default());
    let writer = csv::WriterBuilder::new()
        .has_headers(has_headers)
        .quote_style(quote_style)
        .from_writer(buffer);
    Ok(Some(writer))
}
