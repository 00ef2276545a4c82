//! Dimension style table entry

use std::sync::Arc;

use bitflags::bitflags;

use super::TableEntry;
use crate::types::{Color, LineTypeRef, LineWeight};

/// Shared dimension style reference
///
/// Like layers, dimension styles are compared by identity.
pub type DimStyleRef = Arc<DimStyle>;

bitflags! {
    /// Zero suppression bits (DIMZIN, DIMALTZ, DIMTZIN)
    ///
    /// The two low bits select the feet and inches policy; the others
    /// apply to decimal values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ZeroSuppression: i16 {
        /// Keep zero feet and zero inches
        const INCLUDE_FEET_AND_INCHES = 1;
        /// Keep zero feet, suppress zero inches
        const INCLUDE_FEET_ONLY = 2;
        /// Keep zero inches, suppress zero feet (both low bits)
        const INCLUDE_INCHES_ONLY = 3;
        /// Drop leading zeros of decimals
        const LEADING = 4;
        /// Drop trailing zeros of decimals
        const TRAILING = 8;
    }
}

impl ZeroSuppression {
    fn feet_and_inches(self) -> i16 {
        self.bits() & 3
    }

    /// Check whether leading decimal zeros are dropped
    pub fn suppresses_leading(self) -> bool {
        self.contains(ZeroSuppression::LEADING)
    }

    /// Check whether trailing decimal zeros are dropped
    pub fn suppresses_trailing(self) -> bool {
        self.contains(ZeroSuppression::TRAILING)
    }

    /// Check whether a zero feet part is dropped
    pub fn suppresses_zero_feet(self) -> bool {
        matches!(self.feet_and_inches(), 0 | 3)
    }

    /// Check whether a zero inches part is dropped
    pub fn suppresses_zero_inches(self) -> bool {
        matches!(self.feet_and_inches(), 0 | 2)
    }
}

/// How tolerances are appended to the measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceDisplay {
    None = 0,
    Symmetrical = 1,
    Deviation = 2,
    Limits = 3,
    Basic = 4,
}

impl ToleranceDisplay {
    /// All modes with their labels
    pub const ALL: [(ToleranceDisplay, &'static str); 5] = [
        (ToleranceDisplay::None, "None"),
        (ToleranceDisplay::Symmetrical, "Symmetrical"),
        (ToleranceDisplay::Deviation, "Deviation"),
        (ToleranceDisplay::Limits, "Limits"),
        (ToleranceDisplay::Basic, "Basic"),
    ];
}

/// A dimension style table entry
#[derive(Debug, Clone)]
pub struct DimStyle {
    /// Style name
    pub name: String,

    // ─── Dimension line ───
    /// Dimension line color (DIMCLRD)
    pub dimclrd: Color,
    /// Dimension line extension past extension lines (DIMDLE)
    pub dimdle: f64,
    /// Gap between dimension line and text; negative marks a basic dimension (DIMGAP)
    pub dimgap: f64,
    /// Dimension line weight (DIMLWD)
    pub dimlwd: LineWeight,
    /// Dimension line type (DIMLTYPE)
    pub dimltype: LineTypeRef,
    /// Suppress first dimension line (DIMSD1)
    pub dimsd1: bool,
    /// Suppress second dimension line (DIMSD2)
    pub dimsd2: bool,

    // ─── Extension lines ───
    /// Extension line color (DIMCLRE)
    pub dimclre: Color,
    /// Extension line extension beyond the dimension line (DIMEXE)
    pub dimexe: f64,
    /// Extension line offset from the origin (DIMEXO)
    pub dimexo: f64,
    /// Extension line weight (DIMLWE)
    pub dimlwe: LineWeight,
    /// First extension line type (DIMLTEX1)
    pub dimltex1: LineTypeRef,
    /// Second extension line type (DIMLTEX2)
    pub dimltex2: LineTypeRef,
    /// Suppress first extension line (DIMSE1)
    pub dimse1: bool,
    /// Suppress second extension line (DIMSE2)
    pub dimse2: bool,
    /// Fixed extension line length (DIMFXL)
    pub dimfxl: f64,
    /// Use the fixed extension line length (DIMFXLON)
    pub dimfxlon: bool,

    // ─── Arrows ───
    /// Arrow size (DIMASZ)
    pub dimasz: f64,

    // ─── Text ───
    /// Text color (DIMCLRT)
    pub dimclrt: Color,
    /// Text height (DIMTXT)
    pub dimtxt: f64,
    /// Text style name (DIMTXSTY)
    pub dimtxsty: String,
    /// Horizontal text position (DIMJUST)
    pub dimjust: i16,
    /// Vertical text position (DIMTAD)
    pub dimtad: i16,
    /// Text inside extension lines is horizontal (DIMTIH)
    pub dimtih: bool,
    /// Text outside extension lines is horizontal (DIMTOH)
    pub dimtoh: bool,
    /// Force text between extension lines (DIMTIX)
    pub dimtix: bool,
    /// Suppress arrows outside extension lines (DIMSOXD)
    pub dimsoxd: bool,
    /// Text movement rule (DIMTMOVE)
    pub dimtmove: i16,
    /// Text reads right to left (DIMTXTDIRECTION)
    pub dimtxtdirection: bool,

    // ─── Fit ───
    /// What moves outside when space is short (DIMATFIT)
    pub dimatfit: i16,
    /// Draw dimension line between extension lines even with text outside (DIMTOFL)
    pub dimtofl: bool,

    // ─── Primary units ───
    /// Overall scale factor (DIMSCALE)
    pub dimscale: f64,
    /// Linear measurement scale factor (DIMLFAC)
    pub dimlfac: f64,
    /// Linear unit format (DIMLUNIT)
    pub dimlunit: i16,
    /// Decimal places for primary units (DIMDEC)
    pub dimdec: i16,
    /// Rounding of measurements (DIMRND)
    pub dimrnd: f64,
    /// Decimal separator character code (DIMDSEP)
    pub dimdsep: i16,
    /// Primary zero suppression (DIMZIN)
    pub dimzin: ZeroSuppression,
    /// Primary prefix and suffix around `<>` (DIMPOST)
    pub dimpost: String,

    // ─── Alternate units ───
    /// Alternate units shown (DIMALT)
    pub dimalt: bool,
    /// Alternate unit multiplier (DIMALTF)
    pub dimaltf: f64,
    /// Decimal places for alternate units (DIMALTD)
    pub dimaltd: i16,
    /// Alternate unit format (DIMALTU)
    pub dimaltu: i16,
    /// Rounding of alternate units (DIMALTRND)
    pub dimaltrnd: f64,
    /// Alternate zero suppression (DIMALTZ)
    pub dimaltz: ZeroSuppression,
    /// Alternate prefix and suffix around `[]` (DIMAPOST)
    pub dimapost: String,

    // ─── Tolerances ───
    /// Append tolerances (DIMTOL)
    pub dimtol: bool,
    /// Show limits instead of the measurement (DIMLIM)
    pub dimlim: bool,
    /// Upper tolerance (DIMTP)
    pub dimtp: f64,
    /// Lower tolerance (DIMTM)
    pub dimtm: f64,
    /// Decimal places of tolerances (DIMTDEC)
    pub dimtdec: i16,
    /// Tolerance text height relative to DIMTXT (DIMTFAC)
    pub dimtfac: f64,
    /// Vertical justification of tolerances (DIMTOLJ)
    pub dimtolj: i16,
    /// Tolerance zero suppression (DIMTZIN)
    pub dimtzin: ZeroSuppression,
}

impl DimStyle {
    /// Create a new dimension style with default values
    pub fn new(name: impl Into<String>) -> Self {
        DimStyle {
            name: name.into(),
            dimclrd: Color::ByBlock,
            dimdle: 0.0,
            dimgap: 0.625,
            dimlwd: LineWeight::ByBlock,
            dimltype: LineTypeRef::ByBlock,
            dimsd1: false,
            dimsd2: false,
            dimclre: Color::ByBlock,
            dimexe: 1.25,
            dimexo: 0.625,
            dimlwe: LineWeight::ByBlock,
            dimltex1: LineTypeRef::ByBlock,
            dimltex2: LineTypeRef::ByBlock,
            dimse1: false,
            dimse2: false,
            dimfxl: 1.0,
            dimfxlon: false,
            dimasz: 0.18,
            dimclrt: Color::ByBlock,
            dimtxt: 0.18,
            dimtxsty: "Standard".to_string(),
            dimjust: 0,
            dimtad: 1,
            dimtih: false,
            dimtoh: false,
            dimtix: false,
            dimsoxd: false,
            dimtmove: 0,
            dimtxtdirection: false,
            dimatfit: 3,
            dimtofl: false,
            dimscale: 1.0,
            dimlfac: 1.0,
            dimlunit: 2,
            dimdec: 2,
            dimrnd: 0.0,
            dimdsep: i16::from(b'.'),
            dimzin: ZeroSuppression::TRAILING,
            dimpost: String::new(),
            dimalt: false,
            dimaltf: 25.4,
            dimaltd: 3,
            dimaltu: 2,
            dimaltrnd: 0.0,
            dimaltz: ZeroSuppression::empty(),
            dimapost: String::new(),
            dimtol: false,
            dimlim: false,
            dimtp: 0.0,
            dimtm: 0.0,
            dimtdec: 2,
            dimtfac: 1.0,
            dimtolj: 0,
            dimtzin: ZeroSuppression::TRAILING,
        }
    }

    /// Create the standard dimension style
    pub fn standard() -> Self {
        Self::new("Standard")
    }

    /// Share the style so dimensions can reference it
    pub fn into_ref(self) -> DimStyleRef {
        Arc::new(self)
    }

    /// Tolerance mode implied by DIMTOL, DIMLIM, DIMTP/DIMTM and the sign of DIMGAP
    pub fn tolerance_display(&self) -> ToleranceDisplay {
        if self.dimgap < 0.0 {
            ToleranceDisplay::Basic
        } else if self.dimlim {
            ToleranceDisplay::Limits
        } else if !self.dimtol {
            ToleranceDisplay::None
        } else if self.dimtp == self.dimtm {
            ToleranceDisplay::Symmetrical
        } else {
            ToleranceDisplay::Deviation
        }
    }

    /// Prefix and suffix of primary units
    pub fn primary_affixes(&self) -> (&str, &str) {
        split_affixes(&self.dimpost, "<>")
    }

    /// Prefix and suffix of alternate units
    pub fn alternate_affixes(&self) -> (&str, &str) {
        split_affixes(&self.dimapost, "[]")
    }
}

// Text without the placeholder is all suffix.
fn split_affixes<'a>(pattern: &'a str, placeholder: &str) -> (&'a str, &'a str) {
    pattern.split_once(placeholder).unwrap_or(("", pattern))
}

impl TableEntry for DimStyle {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        self.name == "Standard"
    }
}
