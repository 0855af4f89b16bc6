pub mod environment;
pub mod logging;
