//! Match descriptors of the built-in entity kinds
//!
//! Every kind starts with the common layer and pen properties, followed by
//! its own geometric and textual properties.

mod arc;
mod circle;
pub mod common;
mod dim_aligned;
mod dim_linear;
mod dim_ordinate;
pub mod dimension;
mod ellipse;
mod hatch;
mod image;
mod insert;
mod line;
mod mtext;
mod point;
mod polyline;
mod spline;
mod text;

use super::descriptor::EntityMatchDescriptor;

/// Descriptors of all built-in kinds, in registration order
pub fn builtin_descriptors() -> Vec<EntityMatchDescriptor> {
    vec![
        point::descriptor(),
        line::descriptor(),
        circle::descriptor(),
        arc::descriptor(),
        ellipse::descriptor(),
        polyline::descriptor(),
        spline::descriptor(),
        hatch::descriptor(),
        text::descriptor(),
        mtext::descriptor(),
        insert::descriptor(),
        image::descriptor(),
        dim_aligned::descriptor(),
        dim_linear::descriptor(),
        dim_ordinate::descriptor(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EntityKind;
    use std::collections::HashSet;

    #[test]
    fn test_every_kind_has_a_descriptor() {
        let kinds: Vec<EntityKind> = builtin_descriptors().iter().map(|d| d.kind()).collect();
        assert_eq!(kinds, EntityKind::ALL.to_vec());
    }

    #[test]
    fn test_property_names_are_unique_per_kind() {
        for descriptor in builtin_descriptors() {
            let mut seen = HashSet::new();
            for property in descriptor.properties() {
                assert!(
                    seen.insert(property.name().to_string()),
                    "{} declares {} twice",
                    descriptor.kind(),
                    property.name()
                );
            }
        }
    }

    fn property_names(kind: EntityKind) -> Vec<String> {
        builtin_descriptors()
            .into_iter()
            .find(|d| d.kind() == kind)
            .map(|d| d.properties().map(|p| p.name().to_string()).collect())
            .unwrap_or_default()
    }

    fn assert_has(kind: EntityKind, names: &[&str]) {
        let declared = property_names(kind);
        for name in names {
            assert!(declared.iter().any(|n| n == name), "{} lacks {}", kind, name);
        }
    }

    fn assert_lacks(kind: EntityKind, names: &[&str]) {
        let declared = property_names(kind);
        for name in names {
            assert!(!declared.iter().any(|n| n == name), "{} declares {}", kind, name);
        }
    }

    #[test]
    fn test_image_properties() {
        assert_has(
            EntityKind::Image,
            &["file", "insertX", "insertY", "scale", "angle", "sizeX", "sizeY", "width", "height"],
        );
    }

    #[test]
    fn test_hatch_properties() {
        assert_has(
            EntityKind::Hatch,
            &["pattern", "solid", "scale", "angle", "associative", "loops", "area"],
        );
    }

    #[test]
    fn test_spline_point_properties() {
        assert_has(
            EntityKind::Spline,
            &["useControlPoints", "pointX", "pointY", "controlPointX", "controlPointY", "vertexX", "vertexY"],
        );
    }

    #[test]
    fn test_dimension_style_properties() {
        let style_derived = [
            "dimStyle",
            "hasStyleOverride",
            "dimTxtStyle",
            "dimTextHeight",
            "dimExtLineColor",
            "dimExtLineWeight",
            "dimExtOffset",
            "dimPrimaryScalelinear",
            "dimPrimarySuppressLeading",
            "dimAltEnabled",
            "dimAltPrefix",
            "dimTolDisplay",
            "dimTolSuppressTrailing",
            "measurement",
        ];
        for kind in [EntityKind::DimAligned, EntityKind::DimLinear, EntityKind::DimOrdinate] {
            assert_has(kind, &style_derived);
        }
        for kind in [EntityKind::DimAligned, EntityKind::DimLinear] {
            assert_has(
                kind,
                &[
                    "dimFlipArrow1",
                    "dimFlipArrow2",
                    "dimLineColor",
                    "dimLineLineType",
                    "dimLineWeight",
                    "dimExt1LineType",
                    "dimExtExtent",
                    "defX",
                    "ext1X",
                    "ext2Y",
                    "textMiddleX",
                    "textMiddleY",
                ],
            );
        }
    }

    #[test]
    fn test_linear_keeps_rotation_and_oblique() {
        assert_has(EntityKind::DimLinear, &["angle", "oblique"]);
        assert_lacks(EntityKind::DimAligned, &["angle", "oblique"]);
    }

    #[test]
    fn test_ordinate_properties() {
        assert_has(
            EntityKind::DimOrdinate,
            &[
                "originX", "originY", "ordinate", "featureX", "featureY", "leaderEndX", "leaderEndY",
                "textMiddleX", "textMiddleY", "hdir", "dimExtLineType",
            ],
        );
        assert_lacks(
            EntityKind::DimOrdinate,
            &["dimFlipArrow1", "dimFlipArrow2", "dimLineColor", "dimExtExtent", "dimExt1LineType"],
        );
    }

    #[test]
    fn test_common_properties_come_first() {
        for descriptor in builtin_descriptors() {
            let first: Vec<&str> = descriptor.properties().take(2).map(|p| p.name()).collect();
            assert_eq!(first, vec!["layer", "color"], "{}", descriptor.kind());
        }
    }
}
