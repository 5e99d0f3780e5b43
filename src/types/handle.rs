//! Handle type for CAD objects
//!
//! Handles are unique 64-bit identifiers for objects in a drawing, written
//! to the tag stream as uppercase hexadecimal.

use std::fmt;

/// A unique identifier for CAD objects
///
/// Handle 0 is reserved and invalid; records with a null handle omit the
/// handle tag entirely when emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    /// The null/invalid handle (0)
    pub const NULL: Handle = Handle(0);

    /// Create a new handle from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is a null/invalid handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Parse a handle from its hexadecimal wire form
    pub fn from_hex(text: &str) -> Option<Self> {
        u64::from_str_radix(text.trim(), 16).ok().map(Handle)
    }
}

impl Default for Handle {
    fn default() -> Self {
        Handle::NULL
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_null() {
        assert!(Handle::NULL.is_null());
        assert!(!Handle::new(1).is_null());
    }

    #[test]
    fn test_handle_hex_round_trip() {
        let h = Handle::new(0x1AF);
        assert_eq!(h.to_string(), "1AF");
        assert_eq!(Handle::from_hex("1AF"), Some(h));
        assert_eq!(Handle::from_hex("zz"), None);
    }
}
