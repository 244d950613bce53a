//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestPlaygroundBuilder` - Builder pattern for creating populated stores
//! - Fixtures like `sales_playground()` and `row()`
//! - Assertion helpers

use data_playground::app::Playground;
use data_playground::session::SessionPersistence;
use data_playground::types::{ChartConfig, ChartType, DataRow, FieldType, SchemaField, SessionSnapshot};

// ============================================================================
// TestPlaygroundBuilder - Builder pattern for creating test stores
// ============================================================================

/// Builder for creating test stores with a schema, rows and charts.
///
/// # Example
/// ```ignore
/// let playground = TestPlaygroundBuilder::new()
///     .with_field("Product", FieldType::Text)
///     .with_field("Sales", FieldType::Number)
///     .with_row(&[("Product", "A"), ("Sales", "10")])
///     .with_chart("c1", ChartType::Bar, "Product", "Sales")
///     .build();
/// ```
#[derive(Default)]
pub struct TestPlaygroundBuilder {
    fields: Vec<SchemaField>,
    rows: Vec<DataRow>,
    charts: Vec<ChartConfig>,
    active: Option<String>,
    persistence: Option<SessionPersistence>,
}

impl TestPlaygroundBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: &str, field_type: FieldType) -> Self {
        self.fields.push(SchemaField::new(name, field_type));
        self
    }

    pub fn with_row(mut self, pairs: &[(&str, &str)]) -> Self {
        self.rows.push(row(pairs));
        self
    }

    /// Add a chart; the first chart added becomes active
    pub fn with_chart(mut self, id: &str, chart_type: ChartType, x: &str, y: &str) -> Self {
        if self.active.is_none() {
            self.active = Some(id.to_string());
        }
        self.charts
            .push(ChartConfig::new(id, chart_type).with_title(id).with_axes(x, y));
        self
    }

    pub fn with_active(mut self, id: Option<&str>) -> Self {
        self.active = id.map(str::to_string);
        self
    }

    /// Back the store with `persistence`; the built state is saved immediately
    pub fn with_persistence(mut self, persistence: SessionPersistence) -> Self {
        self.persistence = Some(persistence);
        self
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            schema: self.fields.clone(),
            data: self.rows.clone(),
            charts: self.charts.clone(),
            active_chart: self.active.clone(),
        }
    }

    pub fn build(self) -> Playground {
        let snapshot = self.snapshot();
        match self.persistence {
            Some(persistence) => {
                persistence.save(&snapshot);
                Playground::with_persistence(persistence)
            }
            None => Playground::from_snapshot(snapshot),
        }
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn row(pairs: &[(&str, &str)]) -> DataRow {
    DataRow::from_pairs(pairs.iter().copied())
}

/// Product/Sales store with rows A=10, B=5 and one active bar chart `c1`
pub fn sales_playground() -> Playground {
    TestPlaygroundBuilder::new()
        .with_field("Product", FieldType::Text)
        .with_field("Sales", FieldType::Number)
        .with_row(&[("Product", "A"), ("Sales", "10")])
        .with_row(&[("Product", "B"), ("Sales", "5")])
        .with_chart("c1", ChartType::Bar, "Product", "Sales")
        .build()
}

// ============================================================================
// Assertions
// ============================================================================

pub fn assert_row_count(playground: &Playground, expected: usize) {
    assert_eq!(
        playground.row_count(),
        expected,
        "expected {} rows, found {}",
        expected,
        playground.row_count()
    );
}

pub fn field_names(playground: &Playground) -> Vec<&str> {
    playground.fields().iter().map(|f| f.name.as_str()).collect()
}
