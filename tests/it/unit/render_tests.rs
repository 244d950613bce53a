//! Chart data and SVG output tests.

use crate::helpers::sales_playground;
use data_playground::render::{Surface, svg_file_name};
use data_playground::types::{ChartConfig, ChartConfigUpdate, ChartType};

/// Whether some text element holds exactly `content`
fn has_text(svg: &str, content: &str) -> bool {
    svg.contains(&format!(">{}<", content)) || svg.lines().any(|line| line.trim() == content)
}

#[test]
fn test_bar_values_follow_rows() {
    let playground = sales_playground();
    let chart = playground.render_chart("c1", &Surface::default()).unwrap();
    let values: Vec<f64> = chart.data.points().iter().map(|p| p.value).collect();
    assert_eq!(values, vec![10.0, 5.0]);
    assert_eq!(chart.data.y_domain().map(|d| d.max), Some(10.0));
    assert!(has_text(&chart.svg, "A"));
    assert!(has_text(&chart.svg, "B"));
}

#[test]
fn test_axis_titles_follow_labels_flag() {
    let mut playground = sales_playground();
    let chart = playground.render_chart("c1", &Surface::default()).unwrap();
    assert!(has_text(&chart.svg, "Product"));
    assert!(has_text(&chart.svg, "Sales"));

    playground.update_chart("c1", &ChartConfigUpdate::default().show_labels(false));
    let chart = playground.render_chart("c1", &Surface::default()).unwrap();
    assert!(!has_text(&chart.svg, "Product"));
    assert!(!has_text(&chart.svg, "Sales"));
    assert_eq!(chart.data.points().len(), 2);
}

#[test]
fn test_hiding_grid_draws_less() {
    let mut playground = sales_playground();
    let with_grid = playground.render_chart("c1", &Surface::default()).unwrap();

    playground.update_chart("c1", &ChartConfigUpdate::default().show_grid(false));
    let without_grid = playground.render_chart("c1", &Surface::default()).unwrap();

    assert_eq!(with_grid.data, without_grid.data);
    assert!(without_grid.svg.matches('<').count() < with_grid.svg.matches('<').count());
}

#[test]
fn test_every_chart_type_renders_marks() {
    let mut playground = sales_playground();
    for chart_type in ChartType::all() {
        playground.update_chart("c1", &ChartConfigUpdate::default().chart_type(*chart_type));
        let chart = playground.render_chart("c1", &Surface::default()).unwrap();
        assert!(chart.has_marks(), "{} drew nothing", chart_type.as_str());
        assert!(chart.svg.contains("<svg"), "{} produced no document", chart_type.as_str());
    }
}

#[test]
fn test_svg_document_shape() {
    let playground = sales_playground();
    let (file_name, svg) = playground.export_chart_svg("c1", &Surface::new(640.0, 400.0)).unwrap();
    assert_eq!(file_name, "c1.svg");
    assert!(svg.contains("<svg"));
    assert!(svg.contains(r#"width="640""#));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("@keyframes"));
}

#[test]
fn test_svg_without_animation_has_no_style() {
    let mut playground = sales_playground();
    playground.update_chart("c1", &ChartConfigUpdate::default().animation(false));
    let chart = playground.render_chart("c1", &Surface::default()).unwrap();
    assert!(!chart.svg.contains("@keyframes"));
}

#[test]
fn test_pie_legend_follows_flag() {
    let mut playground = sales_playground();
    playground.update_chart(
        "c1",
        &ChartConfigUpdate::default().chart_type(ChartType::Pie),
    );
    let chart = playground.render_chart("c1", &Surface::default()).unwrap();
    assert_eq!(chart.data.slices().len(), 2);
    assert!(chart.svg.contains("A (1)"));

    playground.update_chart("c1", &ChartConfigUpdate::default().show_legend(false));
    let chart = playground.render_chart("c1", &Surface::default()).unwrap();
    assert!(!chart.svg.contains("A (1)"));
}

#[test]
fn test_untitled_chart_file_name() {
    assert_eq!(svg_file_name(&ChartConfig::new("x", ChartType::Pie)), "chart.svg");
    let titled = ChartConfig::new("x", ChartType::Pie).with_title("Q1/Q2");
    assert_eq!(svg_file_name(&titled), "Q1-Q2.svg");
}
