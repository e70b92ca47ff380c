//! Machine-readable violation codes.

use serde::Serialize;
use std::fmt;

/// A machine-readable code identifying one specific check of one sniff.
///
/// The `sniff` part names the rule (e.g. `Classes.InstantiateNewClasses`)
/// and the `name` part the individual finding within it (e.g. `NewClass`).
/// Displayed as `sniff.name`. Both parts are static: the full set of codes a
/// build can emit is known at compile time, which lets configuration refer to
/// sniffs by prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct ViolationCode {
    /// The dotted name of the sniff that owns this check.
    pub sniff: &'static str,
    /// The name of the individual check within the sniff.
    pub name: &'static str,
}

impl ViolationCode {
    /// Creates a new violation code.
    pub const fn new(sniff: &'static str, name: &'static str) -> Self {
        Self { sniff, name }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.sniff, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let code = ViolationCode::new("Classes.InstantiateNewClasses", "NewClass");
        assert_eq!(format!("{code}"), "Classes.InstantiateNewClasses.NewClass");
    }

    #[test]
    fn equality() {
        let a = ViolationCode::new("Commenting.FileComment", "Missing");
        let b = ViolationCode::new("Commenting.FileComment", "Missing");
        let c = ViolationCode::new("Commenting.FileComment", "WrongStyle");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn serializes_as_parts() {
        let code = ViolationCode::new("Commenting.FileComment", "Missing");
        let json = serde_json::to_string(&code).unwrap();
        assert!(json.contains("Commenting.FileComment"));
        assert!(json.contains("Missing"));
    }
}
