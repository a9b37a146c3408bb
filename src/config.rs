use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of the placement pass. Every constant of the spiral search
/// is exposed here so hosts can tune density without touching the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Fixed canvas height; width comes from the host container.
    pub height: f32,
    /// Keep-out margin along all four canvas edges.
    pub inset: f32,
    /// Archimedean spiral r = a + b * theta.
    pub spiral_a: f32,
    pub spiral_b: f32,
    /// Radians advanced per placement attempt.
    pub theta_step: f32,
    /// Spiral attempts per label before handing off to the fallback stacker.
    pub max_attempts: usize,
    /// Breathing room added to each measured extent before placement.
    pub extent_pad_x: f32,
    pub extent_pad_y: f32,
    /// Fallback stack: first row offset and inter-row gap.
    pub fallback_top: f32,
    pub fallback_gap: f32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            height: 420.0,
            inset: 8.0,
            spiral_a: 8.0,
            spiral_b: 6.0,
            theta_step: 0.18,
            max_attempts: 3000,
            extent_pad_x: 8.0,
            extent_pad_y: 4.0,
            fallback_top: 10.0,
            fallback_gap: 6.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Canvas width used when the CLI is not given one.
    pub width: f32,
    /// Emit the vertical bob animation on each placed word.
    pub animate: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            animate: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub cloud: CloudConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::halp(),
            cloud: CloudConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeFile {
    font_family: Option<String>,
    base_font_size: Option<f32>,
    brand_color: Option<String>,
    ink_color: Option<String>,
    background: Option<String>,
    ink_opacity: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CloudFile {
    height: Option<f32>,
    inset: Option<f32>,
    spiral_a: Option<f32>,
    spiral_b: Option<f32>,
    theta_step: Option<f32>,
    max_attempts: Option<usize>,
    extent_pad_x: Option<f32>,
    extent_pad_y: Option<f32>,
    fallback_top: Option<f32>,
    fallback_gap: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderFile {
    width: Option<f32>,
    animate: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeFile>,
    cloud: Option<CloudFile>,
    render: Option<RenderFile>,
}

/// Load a config JSON file and merge it over the defaults. A missing path
/// yields the default config.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "monochrome" {
            config.theme = Theme::monochrome();
        } else if theme_name == "halp" || theme_name == "default" {
            config.theme = Theme::halp();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.base_font_size {
            config.theme.base_font_size = v;
        }
        if let Some(v) = vars.brand_color {
            config.theme.brand_color = v;
        }
        if let Some(v) = vars.ink_color {
            config.theme.ink_color = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.ink_opacity {
            config.theme.ink_opacity = v;
        }
    }

    if let Some(cloud) = parsed.cloud {
        if let Some(v) = cloud.height {
            config.cloud.height = v;
        }
        if let Some(v) = cloud.inset {
            config.cloud.inset = v;
        }
        if let Some(v) = cloud.spiral_a {
            config.cloud.spiral_a = v;
        }
        if let Some(v) = cloud.spiral_b {
            config.cloud.spiral_b = v;
        }
        if let Some(v) = cloud.theta_step {
            config.cloud.theta_step = v;
        }
        if let Some(v) = cloud.max_attempts {
            config.cloud.max_attempts = v;
        }
        if let Some(v) = cloud.extent_pad_x {
            config.cloud.extent_pad_x = v;
        }
        if let Some(v) = cloud.extent_pad_y {
            config.cloud.extent_pad_y = v;
        }
        if let Some(v) = cloud.fallback_top {
            config.cloud.fallback_top = v;
        }
        if let Some(v) = cloud.fallback_gap {
            config.cloud.fallback_gap = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.animate {
            config.render.animate = v;
        }
    }

    Ok(config)
}
