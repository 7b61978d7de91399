use crate::license_compliance::domain::{Gav, Pom};
use crate::shared::Result;
use std::path::Path;

/// PomLoader port for reading the descriptor of a dependency
pub trait PomLoader {
    /// Loads the descriptor of the artifact `file` of module `gav`
    ///
    /// Returns an empty [`Pom`] when no descriptor is available.
    ///
    /// # Errors
    /// Returns an error if the artifact or descriptor cannot be read
    fn load_pom(&self, file: &Path, gav: &Gav) -> Result<Pom>;
}
