//! Utility modules: endpoint URL normalization, timeout.

pub mod timeout;
pub mod url;
