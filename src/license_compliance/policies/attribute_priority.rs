/// AttributePriority policy for resolving artifact attributes
///
/// An artifact's attributes can come from its descriptor (POM) or from its
/// packaged manifest. This policy encodes the precedence between them.
///
/// Priority order:
/// 1. descriptor value (if present and non-empty)
/// 2. manifest value (if present and non-empty)
/// 3. the attribute's default
pub struct AttributePriority;

impl AttributePriority {
    /// Selects the first non-empty value, falling back to `default`
    ///
    /// # Arguments
    /// * `descriptor` - Value declared by the descriptor
    /// * `manifest` - Value found in the packaged manifest
    /// * `default` - Value used when neither source has one
    pub fn select<'a>(
        descriptor: Option<&'a str>,
        manifest: Option<&'a str>,
        default: &'a str,
    ) -> &'a str {
        Self::non_empty(descriptor)
            .or_else(|| Self::non_empty(manifest))
            .unwrap_or(default)
    }

    fn non_empty(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !v.is_empty())
    }
}
