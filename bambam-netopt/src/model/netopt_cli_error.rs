use super::NetoptError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetoptCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure running line search: {source}")]
    NetoptError {
        #[from]
        source: NetoptError,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure reading network input: {0}")]
    InputError(String),
    #[error("failure processing csv file {0}: {1}")]
    CsvError(String, csv::Error),
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("{0}")]
    OutputError(String),
}
