//! Render cache dependency tracking tests.

use crate::helpers::{TestPlaygroundBuilder, row};
use data_playground::app::{CacheStats, RenderCache};
use data_playground::render::Surface;
use data_playground::types::{ChartConfigUpdate, ChartType, FieldType};

fn two_chart_playground() -> data_playground::app::Playground {
    TestPlaygroundBuilder::new()
        .with_field("Product", FieldType::Text)
        .with_field("Sales", FieldType::Number)
        .with_row(&[("Product", "A"), ("Sales", "3")])
        .with_chart("a", ChartType::Bar, "Product", "Sales")
        .with_chart("b", ChartType::Pie, "Product", "")
        .build()
}

#[test]
fn test_unchanged_inputs_hit_the_cache() {
    let playground = two_chart_playground();
    let surface = Surface::default();
    let mut cache = RenderCache::new();

    let first = cache.chart_for(&playground, "a", &surface).cloned().unwrap();
    let second = cache.chart_for(&playground, "a", &surface).cloned().unwrap();
    assert_eq!(first, second);
    assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
}

#[test]
fn test_config_change_only_invalidates_that_chart() {
    let mut playground = two_chart_playground();
    let surface = Surface::default();
    let mut cache = RenderCache::new();
    cache.chart_for(&playground, "a", &surface);
    cache.chart_for(&playground, "b", &surface);

    playground.update_chart("a", &ChartConfigUpdate::default().title("Renamed"));

    assert!(!cache.is_fresh(&playground, "a", &surface));
    assert!(cache.is_fresh(&playground, "b", &surface));
}

#[test]
fn test_data_change_invalidates_every_chart() {
    let mut playground = two_chart_playground();
    let surface = Surface::default();
    let mut cache = RenderCache::new();
    cache.chart_for(&playground, "a", &surface);
    cache.chart_for(&playground, "b", &surface);

    playground.add_row(row(&[("Product", "B"), ("Sales", "1")])).unwrap();

    assert!(!cache.is_fresh(&playground, "a", &surface));
    assert!(!cache.is_fresh(&playground, "b", &surface));
}

#[test]
fn test_surface_change_recomputes() {
    let playground = two_chart_playground();
    let mut cache = RenderCache::new();
    cache.chart_for(&playground, "a", &Surface::default());
    assert!(!cache.is_fresh(&playground, "a", &Surface::new(300.0, 200.0)));
}

#[test]
fn test_prune_drops_removed_charts() {
    let mut playground = two_chart_playground();
    let surface = Surface::default();
    let mut cache = RenderCache::new();
    cache.chart_for(&playground, "a", &surface);
    cache.chart_for(&playground, "b", &surface);

    playground.remove_chart("a");
    cache.prune(&playground);

    assert_eq!(cache.len(), 1);
    assert!(cache.chart_for(&playground, "a", &surface).is_none());
}
