mod netopt_config;

pub use netopt_config::NetoptConfiguration;
