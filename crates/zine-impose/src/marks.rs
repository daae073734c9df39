//! Fold guide rendering
//!
//! Generates the PDF content stream operations for the fold guide drawn on
//! the first output sheet: a thin filled rectangle spanning the full sheet
//! height at the horizontal midpoint, marking where the sheet is folded.

use crate::constants::GUIDE_THICKNESS;

/// Generate the fold guide as PDF content stream operations.
///
/// A filled rectangle rather than a stroked line: it stays visible in
/// viewers that drop hairline strokes.
pub(crate) fn generate_fold_guide(sheet_width_pt: f32, sheet_height_pt: f32) -> String {
    let left = sheet_width_pt / 2.0 - GUIDE_THICKNESS / 2.0;
    format!(
        "q 0 0 0 rg {} 0 {} {} re f Q\n",
        left, GUIDE_THICKNESS, sheet_height_pt
    )
}
