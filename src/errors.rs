//! Error types with rich diagnostics using miette.
//!
//! The geometry core is total: degenerate inputs (zero-length segments,
//! parallel offset lines) are recovered locally with documented fallback
//! points and never surface here. What can fail is configuration coming in
//! and the output file going out.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration rejected up front, carrying every violated constraint at
/// once rather than failing on the first.
#[derive(Error, Diagnostic, Debug)]
#[error("invalid configuration: {} constraint(s) violated", violations.len())]
#[diagnostic(code(kapow::config::invalid))]
pub struct InvalidConfig {
    #[related]
    pub violations: Vec<ConfigViolation>,
}

/// One violated configuration constraint.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigViolation {
    #[error("page width must be positive, got {value}")]
    #[diagnostic(code(kapow::config::page_width))]
    PageWidth { value: u32 },

    #[error("page height must be positive, got {value}")]
    #[diagnostic(code(kapow::config::page_height))]
    PageHeight { value: u32 },

    #[error("row {row} has a panel count of zero")]
    #[diagnostic(
        code(kapow::config::empty_row),
        help("every row must hold at least one panel")
    )]
    EmptyRow { row: usize },

    #[error("margin must be a non-negative number, got {value}")]
    #[diagnostic(code(kapow::config::margin))]
    Margin { value: f64 },

    #[error("gutter must be a non-negative number, got {value}")]
    #[diagnostic(code(kapow::config::gutter))]
    Gutter { value: f64 },

    #[error("split pair ({row},{col}) is out of bounds or has no adjacent panel")]
    #[diagnostic(
        code(kapow::config::split_pair),
        help("a split pair needs panels at both (row,col) and (row,col+1)")
    )]
    SplitPair { row: usize, col: usize },

    #[error("canvas dimensions must be positive, got {width}x{height}")]
    #[diagnostic(code(kapow::config::canvas))]
    Canvas { width: f64, height: f64 },

    #[error("hour must be between 1 and 12, got {value}")]
    #[diagnostic(code(kapow::config::hour))]
    Hour { value: u32 },

    #[error("minute must be between 0 and 59, got {value}")]
    #[diagnostic(code(kapow::config::minute))]
    Minute { value: u32 },

    #[error("shadow size must be a non-negative number, got {value}")]
    #[diagnostic(code(kapow::config::shadow_size))]
    ShadowSize { value: f64 },

    #[error("shade level must be between 1 and 10, got {value}")]
    #[diagnostic(
        code(kapow::config::shade_level),
        help("1 is light gray, 10 is pure black")
    )]
    ShadeLevel { value: u8 },

    #[error("tail length must be a non-negative number, got {value}")]
    #[diagnostic(code(kapow::config::tail_length))]
    TailLength { value: f64 },

    #[error("bubble radii must be positive, got rx={rx}, ry={ry}")]
    #[diagnostic(code(kapow::config::bubble_radii))]
    BubbleRadii { rx: f64, ry: f64 },

    #[error("cloud radius must be positive, got {value}")]
    #[diagnostic(code(kapow::config::cloud_radius))]
    CloudRadius { value: f64 },
}

/// An unrecognized split style name at the input boundary. The geometry core
/// only ever sees the tagged [`crate::config::SplitSpec`] variants.
#[derive(Error, Diagnostic, Debug)]
#[error("unknown split style: {name}")]
#[diagnostic(
    code(kapow::split::unknown_style),
    help("valid styles are \"straight\", \"arrow\", and \"lightning\"")
)]
pub struct UnknownSplitStyle {
    pub name: String,
}

/// Failure writing the output SVG file.
#[derive(Error, Diagnostic, Debug)]
#[error("failed to write {path}")]
#[diagnostic(code(kapow::io::save))]
pub struct SaveError {
    pub path: String,
    #[source]
    pub source: std::io::Error,
}
