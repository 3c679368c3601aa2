pub mod implementations;

/// Logs status and latency, with the level picked by status class.
#[derive(Clone, Copy, Debug, Default)]
pub struct CustomOnResponse;
