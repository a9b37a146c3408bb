use crate::config::RenderConfig;
use crate::layout::CloudLayout;
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// Paint a computed cloud layout as an SVG document. Each word is drawn at
/// its placement with the decorative index-derived rotation; colors
/// alternate brand/ink every third word, and an optional SMIL bob
/// animation floats each word up and back down.
pub fn render_svg(layout: &CloudLayout, theme: &Theme, render: &RenderConfig) -> String {
    let mut svg = String::new();
    let width = layout.width.max(1.0);
    let height = layout.height.max(1.0);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    for (index, word) in layout.words.iter().enumerate() {
        let (color, opacity) = theme.word_color(index);
        let font_size = theme.font_size(word.weight);
        let font_weight = theme.font_weight(word.weight);
        let center_x = word.left + word.width / 2.0;
        let center_y = word.top + word.height / 2.0;
        // Approximate central baseline; the footprint already includes the
        // placement padding.
        let baseline_y = center_y + font_size * 0.35;

        svg.push_str("<g>");
        if render.animate {
            let duration = 6 + (index % 4);
            let delay = (index % 7) as f32 * 0.25;
            svg.push_str(&format!(
                "<animateTransform attributeName=\"transform\" type=\"translate\" additive=\"sum\" values=\"0 0; 0 -4; 0 0\" dur=\"{duration}s\" begin=\"{delay}s\" repeatCount=\"indefinite\"/>",
            ));
        }
        svg.push_str(&format!(
            "<text x=\"{center_x:.2}\" y=\"{baseline_y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{font_size}\" font-weight=\"{font_weight}\" fill=\"{color}\" fill-opacity=\"{opacity}\" transform=\"rotate({:.1} {center_x:.2} {center_y:.2})\">{}</text>",
            theme.font_family,
            word.rotate,
            escape_xml(&word.text)
        ));
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    svg
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, theme: &Theme) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = theme
        .font_family
        .split(',')
        .next()
        .unwrap_or("sans-serif")
        .trim()
        .to_string();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::config::Config;
    use crate::layout::{Canvas, compute_cloud_layout};
    use crate::measure::FixedMeasurer;

    fn rendered(animate: bool) -> String {
        let mut config = Config::default();
        config.render.animate = animate;
        let layout = compute_cloud_layout(
            &default_catalog(),
            &FixedMeasurer::default(),
            Canvas::new(960.0, config.cloud.height),
            &config.theme,
            &config.cloud,
        );
        render_svg(&layout, &config.theme, &config.render)
    }

    #[test]
    fn render_svg_basic() {
        let svg = rendered(false);
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("Cardiff University"));
        assert!(svg.contains("rotate("));
        assert!(!svg.contains("animateTransform"));
    }

    #[test]
    fn render_svg_animated_words_bob() {
        let svg = rendered(true);
        assert!(svg.contains("animateTransform"));
        assert!(svg.contains("0 0; 0 -4; 0 0"));
    }

    #[test]
    fn render_svg_escapes_markup_in_labels() {
        let svg_text = escape_xml("<b>&\"quotes\"</b>");
        assert_eq!(svg_text, "&lt;b&gt;&amp;&quot;quotes&quot;&lt;/b&gt;");
    }
}
