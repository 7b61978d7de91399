/// ProgressReporter port for user feedback during an audit
///
/// Loading artifact metadata touches every archive of the dependency graph,
/// so the use cases report per-dependency progress through this port.
/// Implementations must not write to stdout, which carries the report.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress of the dependency currently being loaded
    ///
    /// # Arguments
    /// * `current` - Number of dependencies loaded so far
    /// * `total` - Number of dependencies in the resolved graph
    /// * `message` - Coordinates of the current dependency, if any
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a non-fatal error
    fn report_error(&self, message: &str);

    /// Reports completion of a step
    fn report_completion(&self, message: &str);
}
