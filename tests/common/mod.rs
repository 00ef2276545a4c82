//! Shared test utilities for entity_match integration tests.
//!
//! Document builders and small numeric helpers, imported by every test
//! crate via `mod common;`.

#![allow(dead_code)]

pub mod builders;

use entity_match::matching::{registry, MatchOperation, PropertyValue, WorldMapper};
use entity_match::{EntityKind, EntityMatcher};

/// Tolerance used where a test does not care about the exact value
pub const TOL: f64 = 1e-9;

/// Build a matcher from the process-wide registry, comparing in world space
pub fn matcher(
    kind: EntityKind,
    property: &str,
    op: MatchOperation,
    target: impl Into<PropertyValue>,
    tolerance: f64,
) -> EntityMatcher<'static> {
    registry()
        .descriptor(kind)
        .and_then(|d| d.matcher(property, op, &target.into(), tolerance, Some(&WorldMapper)))
        .unwrap_or_else(|e| panic!("no matcher for {kind}.{property}: {e}"))
}

/// Assert two floats are within `tol` of each other
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}
