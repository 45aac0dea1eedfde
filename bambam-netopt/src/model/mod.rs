pub mod candidate;
pub mod network;
mod netopt_cli_error;
mod netopt_error;

pub use netopt_cli_error::NetoptCliError;
pub use netopt_error::NetoptError;
