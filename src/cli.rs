use crate::catalog::{default_catalog, load_catalog};
use crate::config::load_config;
use crate::layout::{Canvas, compute_cloud_layout};
use crate::layout_dump::write_layout_dump;
use crate::measure::SystemFontMeasurer;
#[cfg(feature = "png")]
use crate::render::write_output_png;
use crate::render::{render_svg, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wcloud", version, about = "Weighted word-cloud layout and SVG renderer")]
pub struct Args {
    /// Catalog JSON file (list of {text, weight}) or '-' for stdin.
    /// Defaults to the built-in catalog.
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, cloud, render sections)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Canvas width; stands in for the host container's measured width.
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Write the computed placements as JSON for debugging.
    #[arg(long = "dump-layout")]
    pub dump_layout: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let width = args.width.unwrap_or(config.render.width);
    if width <= 0.0 {
        return Err(anyhow::anyhow!("canvas width must be positive, got {width}"));
    }

    let catalog = match args.input.as_deref() {
        Some(path) => load_catalog(path)?,
        None => default_catalog(),
    };

    let measurer = SystemFontMeasurer::new(&config.theme);
    let canvas = Canvas::new(width, config.cloud.height);
    let layout = compute_cloud_layout(&catalog, &measurer, canvas, &config.theme, &config.cloud);

    if let Some(dump_path) = args.dump_layout.as_deref() {
        write_layout_dump(dump_path, &layout)?;
    }

    let svg = render_svg(&layout, &config.theme, &config.render);
    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        #[cfg(feature = "png")]
        OutputFormat::Png => {
            let output = args
                .output
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("Output path required for png output"))?;
            write_output_png(&svg, output, &config.theme)?;
        }
        #[cfg(not(feature = "png"))]
        OutputFormat::Png => {
            return Err(anyhow::anyhow!(
                "PNG output requires the 'png' feature"
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_parse_cleanly() {
        Args::command().debug_assert();
    }

    #[test]
    fn width_defaults_to_config() {
        let args = Args::parse_from(["wcloud"]);
        assert!(args.width.is_none());
        assert!(matches!(args.output_format, OutputFormat::Svg));
    }
}
