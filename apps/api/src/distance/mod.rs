// Astronomical distance conversion.
// Catalog → engine → validator → gateway; handlers and the agent tool sit on top of the gateway.

pub mod engine;
pub mod gateway;
pub mod handlers;
pub mod tool;
pub mod units;
pub mod validation;
