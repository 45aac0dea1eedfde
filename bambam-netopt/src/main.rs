use bambam_netopt::{
    app::{run_search, run_summary},
    config::NetoptConfiguration,
    model::NetoptCliError,
};
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct NetoptAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// search a transit network for the most cost-effective new lines
    Run {
        #[arg(long, help = "path to stops CSV file with columns stop_id,lat,lon")]
        stops_file: String,
        #[arg(long, help = "path to edges CSV file with columns src,dst,mode,length")]
        edges_file: String,
        #[arg(
            long,
            help = "path to distances CSV file with columns src,dst,distance_km. computed from stop coordinates if omitted"
        )]
        distances_file: Option<String>,
        #[arg(long, help = "path to file with bambam-netopt search parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "override the number of cheapest candidates simulated per mode")]
        k: Option<usize>,
        #[arg(long, help = "override the number of best lines reported per mode")]
        n: Option<usize>,
        #[arg(long, help = "output path for search results")]
        output_directory: String,
    },
    /// print summary metrics of a transit network
    Summary {
        #[arg(long, help = "path to stops CSV file with columns stop_id,lat,lon")]
        stops_file: String,
        #[arg(long, help = "path to edges CSV file with columns src,dst,mode,length")]
        edges_file: String,
    },
}

pub fn run(app: &App) -> Result<(), NetoptCliError> {
    env_logger::init();
    match app {
        App::Run {
            stops_file,
            edges_file,
            distances_file,
            configuration_file,
            k,
            n,
            output_directory,
        } => {
            let mut conf = match configuration_file {
                None => Ok(NetoptConfiguration::default()),
                Some(f) => {
                    log::info!("reading bambam-netopt configuration from {f}");
                    NetoptConfiguration::try_from(f)
                }
            }?;
            if let Some(k) = k {
                conf.k = *k;
            }
            if let Some(n) = n {
                conf.n = *n;
            }
            let result = run_search(
                Path::new(stops_file),
                Path::new(edges_file),
                distances_file.as_ref().map(Path::new),
                &conf,
                Path::new(output_directory),
            );
            match result {
                Ok(_) => {
                    eprintln!("finished.");
                    Ok(())
                }
                Err(e) => {
                    log::error!("bambam-netopt failed: {e}");
                    Err(e)
                }
            }
        }
        App::Summary {
            stops_file,
            edges_file,
        } => {
            let summary = run_summary(Path::new(stops_file), Path::new(edges_file))?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
    }
}

fn main() {
    let args = NetoptAppArguments::parse();
    if let Err(e) = run(&args.app) {
        println!("{e}");
        panic!("{}", e.to_string())
    }
}
