pub mod algorithm;
pub mod app;
pub mod config;
pub mod model;

#[cfg(test)]
pub(crate) mod test_util;
