use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Document has no pages")]
    NoPages,
    #[error("Invalid fill position \"{0}\": use \"end\" or \"before-last\"")]
    InvalidFillPosition(String),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Where blank filler pages are absorbed into the reading order when the
/// source page count is not a multiple of 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillPosition {
    /// Filler pages trail after the last real page
    #[default]
    End,
    /// Filler pages sit between the second-to-last and last real page,
    /// so the last page stays on the final physical position (back cover)
    BeforeLast,
}

impl FromStr for FillPosition {
    type Err = ImposeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "end" => Ok(FillPosition::End),
            "before-last" | "before_last" => Ok(FillPosition::BeforeLast),
            other => Err(ImposeError::InvalidFillPosition(other.to_string())),
        }
    }
}

impl FillPosition {
    /// Canonical string form, the inverse of `from_str`
    pub fn as_str(self) -> &'static str {
        match self {
            FillPosition::End => "end",
            FillPosition::BeforeLast => "before-last",
        }
    }
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Page scaling behavior when source pages don't match the half-sheet target
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScalingMode {
    /// Fit page to available space (preserve aspect ratio)
    #[default]
    Fit,
    /// Fill available space (may crop)
    Fill,
    /// Center without scaling
    None,
    /// Stretch to fill (ignore aspect ratio)
    Stretch,
}

/// Statistics about the imposition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpositionStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Source pages rounded up to the sheet unit (multiple of 4)
    pub padded_pages: usize,
    /// Number of blank pages added for padding
    pub filler_pages: usize,
    /// Total number of output sheets
    pub output_sheets: usize,
}
