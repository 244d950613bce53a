//! SVG document helpers: export file names and the entrance animation.

use crate::constants::ANIMATION_DURATION_MS;
use crate::types::ChartConfig;

/// File name offered when exporting a chart: its title, or `chart`
pub fn svg_file_name(config: &ChartConfig) -> String {
    let title = config.title.trim();
    let stem: String = if title.is_empty() {
        "chart".to_string()
    } else {
        title
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':' | '\0') { '-' } else { c })
            .collect()
    };
    format!("{}.svg", stem)
}

/// Insert a fade-in stylesheet right after the opening `<svg>` tag.
///
/// Documents without an `<svg` element are returned unchanged.
pub fn with_entrance_animation(svg: &str) -> String {
    let Some(tag_end) = svg
        .find("<svg")
        .and_then(|start| svg[start..].find('>').map(|end| start + end + 1))
    else {
        return svg.to_string();
    };

    let style = format!(
        "\n<style>@keyframes dp-enter {{ from {{ opacity: 0; }} }} \
         rect, circle, polygon, polyline {{ animation: dp-enter {}ms ease-out; }}</style>",
        ANIMATION_DURATION_MS
    );
    let mut out = String::with_capacity(svg.len() + style.len());
    out.push_str(&svg[..tag_end]);
    out.push_str(&style);
    out.push_str(&svg[tag_end..]);
    out
}
