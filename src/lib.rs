pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod layout;
pub mod layout_dump;
pub mod measure;
pub mod render;
pub mod theme;

pub use catalog::{Label, Weight, default_catalog};
pub use config::{CloudConfig, Config, RenderConfig, load_config};
pub use layout::{Canvas, CloudLayout, WordPlacement, compute_cloud_layout};
pub use measure::{Extent, ExtentMeasurer, FixedMeasurer, SystemFontMeasurer};
pub use render::render_svg;
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;
