//! Comic-book SVG assets: panel pages and speech/thought bubbles.
//!
//! A page is a grid of panels described by a [`PageConfig`]; adjacent panels
//! can be fused into a pair divided by a straight, arrow, or lightning
//! split. A bubble is a single oval or cloud with a drop shadow and a tail
//! aimed by a clock time, described by a [`BubbleConfig`].
//!
//! # Example
//!
//! ```
//! use kapow::{PageConfig, comic_page};
//!
//! let svg = comic_page(&PageConfig::default())?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), miette::Report>(())
//! ```

pub mod config;
pub mod errors;
pub mod log;
pub mod render;

pub use config::{BubbleConfig, BubbleStyle, PageConfig, SplitSpec, SplitStyle};
pub use kapow_svg::Svg;

use std::path::Path;

use errors::SaveError;

/// Validate `config` and render a comic page to an SVG string.
pub fn comic_page(config: &PageConfig) -> miette::Result<String> {
    config.validate()?;
    Ok(render::render_page(config).to_string())
}

/// Validate `config` and write a comic page to `path`.
pub fn comic_page_to_file(config: &PageConfig, path: &Path) -> miette::Result<()> {
    config.validate()?;
    save(&render::render_page(config), path)
}

/// Validate `config` and render a bubble to an SVG string.
pub fn bubble(config: &BubbleConfig) -> miette::Result<String> {
    config.validate()?;
    Ok(render::render_bubble(config).to_string())
}

/// Validate `config` and write a bubble to `path`.
pub fn bubble_to_file(config: &BubbleConfig, path: &Path) -> miette::Result<()> {
    config.validate()?;
    save(&render::render_bubble(config), path)
}

fn save(svg: &Svg, path: &Path) -> miette::Result<()> {
    svg.save(path).map_err(|source| SaveError {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}
