//! Entity handles
//!
//! Quick selection reports its result as the handles of the selected
//! entities, so the handle is the only identity a caller needs to keep.

use std::fmt;

/// A unique identifier for an entity within a document
///
/// Handle 0 is reserved and means "not yet assigned".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Handle(u64);

impl Handle {
    /// The unassigned handle
    pub const NULL: Handle = Handle(0);

    /// Create a handle from a raw value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Raw handle value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if the handle has not been assigned
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// The handle following this one
    #[inline]
    pub const fn next(&self) -> Handle {
        Handle(self.0 + 1)
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_handle() {
        assert!(Handle::NULL.is_null());
        assert!(!Handle::new(42).is_null());
        assert_eq!(Handle::default(), Handle::NULL);
    }

    #[test]
    fn test_handle_sequence() {
        let h = Handle::new(0x1F);
        assert_eq!(h.next().value(), 0x20);
        assert!(h < h.next());
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(Handle::new(0xABCD).to_string(), "0xABCD");
    }
}
