//! Common validation utilities

/// Common validation functions
pub mod validators {
    /// Check that a required value is present and non-empty
    ///
    /// Whitespace-only values count as present; callers treat addresses and
    /// codes as opaque strings.
    pub fn is_present(value: Option<&str>) -> bool {
        value.map_or(false, |v| !v.is_empty())
    }

    /// Check that every required value is present
    pub fn all_present(values: &[Option<&str>]) -> bool {
        values.iter().all(|value| is_present(*value))
    }
}
