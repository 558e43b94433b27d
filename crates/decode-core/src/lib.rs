pub mod config;
pub mod logging;

pub mod codec;
pub mod link_risk;
pub mod shorten;
