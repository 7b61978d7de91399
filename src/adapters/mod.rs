/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports: archive and
/// filesystem readers, console progress output and report formatters.
pub mod outbound;
