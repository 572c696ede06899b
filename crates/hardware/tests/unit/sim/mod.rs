
/// Run loop: snapshot sink, limits and aborts.
pub mod simulator;
