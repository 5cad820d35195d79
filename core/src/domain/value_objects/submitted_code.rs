//! A passcode as submitted by a client.

/// Submitted passcode
///
/// Clients may send a passcode of any JSON type. Only text is compared
/// against the stored code; any other value is still looked up and
/// classified but can never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmittedCode<'a> {
    /// A textual passcode
    Text(&'a str),
    /// A present value that is not text
    Other,
}

impl SubmittedCode<'_> {
    /// Whether a value was supplied at all
    ///
    /// Empty text counts as absent.
    pub fn is_present(&self) -> bool {
        match self {
            SubmittedCode::Text(code) => !code.is_empty(),
            SubmittedCode::Other => true,
        }
    }
}

impl<'a> From<&'a str> for SubmittedCode<'a> {
    fn from(code: &'a str) -> Self {
        SubmittedCode::Text(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence() {
        assert!(SubmittedCode::from("123456").is_present());
        assert!(SubmittedCode::Other.is_present());
        assert!(!SubmittedCode::from("").is_present());
    }
}
