use thiserror::Error;

use super::network::StopId;

#[derive(Error, Debug)]
pub enum NetoptError {
    #[error("stop '{0}' is missing from the geo lookup")]
    MissingGeoData(StopId),
    #[error("distance table has no entry between '{0}' and '{1}'")]
    MissingDistance(StopId, StopId),
    #[error("attempting to get stop '{0}' not in graph")]
    MissingStop(StopId),
    #[error("no edges available to estimate the average speed of mode '{0}', and no override configured")]
    InsufficientSpeedData(String),
    #[error("invalid network input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    InternalError(String),
}
