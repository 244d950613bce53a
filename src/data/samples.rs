//! Sample schemas and datasets
//!
//! Ten ready-made schemas, curated rows for each, and a generic generator
//! for schemas that match none of them.

use crate::constants::GENERIC_SAMPLE_ROWS;
use crate::types::{DataRow, FieldType, SchemaField};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

// ============================================================================
// Sample schemas
// ============================================================================

/// A named sample schema
#[derive(Clone, Copy, Debug)]
pub struct SampleSchema {
    pub name: &'static str,
    pub fields: &'static [(&'static str, FieldType)],
}

impl SampleSchema {
    pub fn to_fields(&self) -> Vec<SchemaField> {
        self.fields
            .iter()
            .map(|(name, field_type)| SchemaField::new(*name, *field_type))
            .collect()
    }
}

use FieldType::{Date, Number, Text};

pub const SAMPLE_SCHEMAS: [SampleSchema; 10] = [
    SampleSchema {
        name: "Product Sales",
        fields: &[
            ("Product", Text),
            ("Category", Text),
            ("Sales", Number),
            ("Rating", Number),
            ("ReleaseDate", Date),
        ],
    },
    SampleSchema {
        name: "Weather",
        fields: &[
            ("Location", Text),
            ("Season", Text),
            ("Temperature", Number),
            ("Precipitation", Number),
            ("RecordDate", Date),
        ],
    },
    SampleSchema {
        name: "Student Performance",
        fields: &[
            ("Student", Text),
            ("Subject", Text),
            ("Score", Number),
            ("StudyHours", Number),
            ("ExamDate", Date),
        ],
    },
    SampleSchema {
        name: "Website Analytics",
        fields: &[
            ("Page", Text),
            ("Device", Text),
            ("Visitors", Number),
            ("ConversionRate", Number),
            ("Date", Date),
        ],
    },
    SampleSchema {
        name: "Financial",
        fields: &[
            ("Stock", Text),
            ("Sector", Text),
            ("Price", Number),
            ("Volume", Number),
            ("TradeDate", Date),
        ],
    },
    SampleSchema {
        name: "Health Metrics",
        fields: &[
            ("Patient", Text),
            ("Condition", Text),
            ("BloodSugar", Number),
            ("Weight", Number),
            ("CheckupDate", Date),
        ],
    },
    SampleSchema {
        name: "Social Media",
        fields: &[
            ("Platform", Text),
            ("ContentType", Text),
            ("Likes", Number),
            ("Comments", Number),
            ("PostDate", Date),
        ],
    },
    SampleSchema {
        name: "Travel Destinations",
        fields: &[
            ("Destination", Text),
            ("Region", Text),
            ("Visitors", Number),
            ("Rating", Number),
            ("Season", Date),
        ],
    },
    SampleSchema {
        name: "Restaurant Ratings",
        fields: &[
            ("Restaurant", Text),
            ("Cuisine", Text),
            ("Price", Number),
            ("Rating", Number),
            ("OpenDate", Date),
        ],
    },
    SampleSchema {
        name: "Employee Performance",
        fields: &[
            ("Employee", Text),
            ("Department", Text),
            ("Performance", Number),
            ("Satisfaction", Number),
            ("ReviewDate", Date),
        ],
    },
];

/// Pick one of [`SAMPLE_SCHEMAS`] at random
pub fn random_sample_schema() -> &'static SampleSchema {
    let mut rng = rand::thread_rng();
    SAMPLE_SCHEMAS
        .choose(&mut rng)
        .unwrap_or(&SAMPLE_SCHEMAS[0])
}

/// Look up a sample schema by case-insensitive name
pub fn find_sample_schema(name: &str) -> Option<&'static SampleSchema> {
    SAMPLE_SCHEMAS
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
}

// ============================================================================
// Curated datasets
// ============================================================================

struct SampleDataset {
    /// Lowercase field names that must all be present in the schema
    requires: &'static [&'static str],
    columns: [&'static str; 5],
    rows: &'static [[&'static str; 5]],
}

const DATASETS: &[SampleDataset] = &[
    SampleDataset {
        requires: &["product", "category", "sales"],
        columns: ["Product", "Category", "Sales", "Rating", "ReleaseDate"],
        rows: &[
            ["Laptop", "Electronics", "1200", "4.5", "2023-01-15"],
            ["Smartphone", "Electronics", "2500", "4.8", "2023-02-20"],
            ["Headphones", "Audio", "800", "4.2", "2023-03-10"],
            ["Monitor", "Electronics", "950", "4.4", "2023-04-05"],
            ["Keyboard", "Accessories", "350", "4.0", "2023-05-12"],
            ["Mouse", "Accessories", "280", "3.9", "2023-05-12"],
            ["Tablet", "Electronics", "1100", "4.6", "2023-06-18"],
            ["Speakers", "Audio", "600", "4.3", "2023-07-22"],
            ["Smart Watch", "Wearables", "750", "4.1", "2023-08-05"],
            ["Camera", "Electronics", "890", "4.7", "2023-09-10"],
        ],
    },
    SampleDataset {
        requires: &["location", "temperature"],
        columns: ["Location", "Season", "Temperature", "Precipitation", "RecordDate"],
        rows: &[
            ["New York", "Winter", "32", "4.5", "2023-01-15"],
            ["Los Angeles", "Winter", "68", "1.2", "2023-01-15"],
            ["Chicago", "Winter", "25", "3.8", "2023-01-15"],
            ["Miami", "Winter", "75", "2.1", "2023-01-15"],
            ["New York", "Summer", "85", "3.2", "2023-07-15"],
            ["Los Angeles", "Summer", "92", "0.1", "2023-07-15"],
            ["Chicago", "Summer", "88", "2.9", "2023-07-15"],
            ["Miami", "Summer", "91", "6.5", "2023-07-15"],
            ["Seattle", "Winter", "45", "5.8", "2023-01-15"],
            ["Denver", "Summer", "90", "1.5", "2023-07-15"],
        ],
    },
    SampleDataset {
        requires: &["student", "score"],
        columns: ["Student", "Subject", "Score", "StudyHours", "ExamDate"],
        rows: &[
            ["Alex", "Math", "92", "8.5", "2023-05-10"],
            ["Emma", "Math", "88", "7.0", "2023-05-10"],
            ["Noah", "Math", "79", "5.5", "2023-05-10"],
            ["Olivia", "Math", "95", "9.0", "2023-05-10"],
            ["Alex", "Science", "85", "7.5", "2023-05-12"],
            ["Emma", "Science", "91", "8.0", "2023-05-12"],
            ["Noah", "Science", "82", "6.0", "2023-05-12"],
            ["Olivia", "Science", "88", "7.0", "2023-05-12"],
            ["Liam", "Math", "90", "8.0", "2023-05-10"],
            ["Sophia", "Science", "93", "8.5", "2023-05-12"],
        ],
    },
    SampleDataset {
        requires: &["page", "visitors"],
        columns: ["Page", "Device", "Visitors", "ConversionRate", "Date"],
        rows: &[
            ["Home", "Desktop", "1250", "3.2", "2023-06-01"],
            ["Products", "Desktop", "980", "4.5", "2023-06-01"],
            ["Checkout", "Desktop", "540", "8.1", "2023-06-01"],
            ["Home", "Mobile", "1820", "2.1", "2023-06-01"],
            ["Products", "Mobile", "1340", "3.2", "2023-06-01"],
            ["Checkout", "Mobile", "680", "5.4", "2023-06-01"],
            ["Home", "Tablet", "420", "2.8", "2023-06-01"],
            ["Products", "Tablet", "310", "3.9", "2023-06-01"],
            ["Blog", "Desktop", "750", "2.5", "2023-06-01"],
            ["Contact", "Mobile", "480", "1.8", "2023-06-01"],
        ],
    },
    SampleDataset {
        requires: &["stock"],
        columns: ["Stock", "Sector", "Price", "Volume", "TradeDate"],
        rows: &[
            ["AAPL", "Technology", "182.52", "45.2", "2023-07-01"],
            ["MSFT", "Technology", "338.11", "32.1", "2023-07-01"],
            ["AMZN", "Consumer", "129.78", "38.5", "2023-07-01"],
            ["GOOGL", "Technology", "119.70", "29.8", "2023-07-01"],
            ["JPM", "Financial", "145.15", "18.2", "2023-07-01"],
            ["BAC", "Financial", "28.47", "22.6", "2023-07-01"],
            ["PFE", "Healthcare", "36.32", "15.4", "2023-07-01"],
            ["JNJ", "Healthcare", "165.52", "12.8", "2023-07-01"],
            ["TSLA", "Automotive", "261.77", "51.3", "2023-07-01"],
            ["NVDA", "Technology", "423.85", "47.6", "2023-07-01"],
        ],
    },
    SampleDataset {
        requires: &["patient"],
        columns: ["Patient", "Condition", "BloodSugar", "Weight", "CheckupDate"],
        rows: &[
            ["P001", "Diabetes", "142", "78.5", "2023-04-10"],
            ["P002", "Hypertension", "105", "82.3", "2023-04-11"],
            ["P003", "Healthy", "98", "65.7", "2023-04-12"],
            ["P004", "Diabetes", "156", "91.2", "2023-04-13"],
            ["P005", "Hypertension", "110", "75.8", "2023-04-14"],
            ["P006", "Healthy", "92", "68.4", "2023-04-15"],
            ["P007", "Diabetes", "138", "84.1", "2023-04-16"],
            ["P008", "Hypertension", "118", "79.6", "2023-04-17"],
            ["P009", "Obesity", "115", "102.3", "2023-04-18"],
            ["P010", "Anemia", "90", "61.2", "2023-04-19"],
        ],
    },
    SampleDataset {
        requires: &["platform"],
        columns: ["Platform", "ContentType", "Likes", "Comments", "PostDate"],
        rows: &[
            ["Instagram", "Photo", "1250", "85", "2023-03-05"],
            ["Instagram", "Video", "1820", "132", "2023-03-06"],
            ["Twitter", "Text", "450", "28", "2023-03-07"],
            ["Twitter", "Image", "680", "42", "2023-03-08"],
            ["Facebook", "Photo", "520", "35", "2023-03-09"],
            ["Facebook", "Video", "980", "76", "2023-03-10"],
            ["TikTok", "Video", "2450", "185", "2023-03-11"],
            ["YouTube", "Video", "1750", "210", "2023-03-12"],
            ["LinkedIn", "Article", "320", "45", "2023-03-13"],
            ["Pinterest", "Image", "890", "25", "2023-03-14"],
        ],
    },
    SampleDataset {
        requires: &["destination"],
        columns: ["Destination", "Region", "Visitors", "Rating", "Season"],
        rows: &[
            ["Paris", "Europe", "8500000", "4.7", "2023-06-15"],
            ["Tokyo", "Asia", "9200000", "4.8", "2023-06-15"],
            ["New York", "North America", "12500000", "4.6", "2023-06-15"],
            ["Rome", "Europe", "7800000", "4.5", "2023-06-15"],
            ["Bangkok", "Asia", "11500000", "4.4", "2023-06-15"],
            ["London", "Europe", "9700000", "4.6", "2023-06-15"],
            ["Dubai", "Middle East", "8200000", "4.7", "2023-06-15"],
            ["Sydney", "Oceania", "6400000", "4.8", "2023-06-15"],
            ["Barcelona", "Europe", "7100000", "4.6", "2023-06-15"],
            ["Bali", "Asia", "5800000", "4.9", "2023-06-15"],
        ],
    },
    SampleDataset {
        requires: &["restaurant"],
        columns: ["Restaurant", "Cuisine", "Price", "Rating", "OpenDate"],
        rows: &[
            ["Bella Italia", "Italian", "28", "4.6", "2022-05-10"],
            ["Sushi Palace", "Japanese", "42", "4.8", "2021-08-15"],
            ["Taco Fiesta", "Mexican", "18", "4.3", "2022-02-20"],
            ["Burger Joint", "American", "15", "4.1", "2021-11-05"],
            ["Spice Garden", "Indian", "25", "4.5", "2022-07-12"],
            ["Le Bistro", "French", "45", "4.7", "2021-04-30"],
            ["Dragon Wok", "Chinese", "22", "4.2", "2022-01-18"],
            ["Mediterranean", "Greek", "32", "4.4", "2021-09-22"],
            ["Thai Orchid", "Thai", "27", "4.6", "2022-03-15"],
            ["Brazilian Grill", "Brazilian", "38", "4.5", "2021-10-08"],
        ],
    },
    SampleDataset {
        requires: &["employee"],
        columns: ["Employee", "Department", "Performance", "Satisfaction", "ReviewDate"],
        rows: &[
            ["John Smith", "Sales", "85", "4.2", "2023-02-15"],
            ["Sarah Johnson", "Marketing", "92", "4.5", "2023-02-16"],
            ["Michael Brown", "Engineering", "88", "4.0", "2023-02-17"],
            ["Emily Davis", "HR", "90", "4.7", "2023-02-18"],
            ["David Wilson", "Sales", "78", "3.8", "2023-02-19"],
            ["Jessica Taylor", "Marketing", "86", "4.3", "2023-02-20"],
            ["Andrew Miller", "Engineering", "94", "4.1", "2023-02-21"],
            ["Olivia Moore", "HR", "89", "4.6", "2023-02-22"],
            ["Robert Chen", "Engineering", "91", "4.4", "2023-02-23"],
            ["Amanda Lewis", "Sales", "83", "4.0", "2023-02-24"],
        ],
    },
];

/// Rows to load for `schema`.
///
/// Picks the first curated dataset whose key fields all appear in the
/// schema (compared lowercase), otherwise generates generic rows. Curated
/// columns are renamed to the schema's own spelling of each field.
pub fn sample_rows_for(schema: &[SchemaField]) -> Vec<DataRow> {
    let lowered: Vec<String> = schema.iter().map(|f| f.name.to_lowercase()).collect();

    let dataset = DATASETS.iter().find(|d| {
        d.requires
            .iter()
            .all(|required| lowered.iter().any(|name| name == required))
    });

    match dataset {
        Some(dataset) => curated_rows(dataset, schema),
        None => generic_rows(schema, GENERIC_SAMPLE_ROWS),
    }
}

fn curated_rows(dataset: &SampleDataset, schema: &[SchemaField]) -> Vec<DataRow> {
    let keys: Vec<String> = dataset
        .columns
        .iter()
        .map(|column| {
            schema
                .iter()
                .find(|f| f.name.eq_ignore_ascii_case(column))
                .map(|f| f.name.clone())
                .unwrap_or_else(|| column.to_string())
        })
        .collect();

    dataset
        .rows
        .iter()
        .map(|values| DataRow::from_pairs(keys.iter().cloned().zip(values.iter().map(|v| v.to_string()))))
        .collect()
}

/// Generate `count` placeholder rows shaped by the schema.
///
/// Text cells read `Sample <Field> <i>`, numbers are random integers in
/// `0..100`, dates run from 2023-01-01 one day per row.
pub fn generic_rows(schema: &[SchemaField], count: usize) -> Vec<DataRow> {
    let mut rng = rand::thread_rng();

    (1..=count)
        .map(|i| {
            DataRow::from_pairs(schema.iter().map(|field| {
                let value = match field.field_type {
                    FieldType::Text => format!("Sample {} {}", field.name, i),
                    FieldType::Number => rng.gen_range(0..100).to_string(),
                    FieldType::Date => generic_date(i),
                };
                (field.name.clone(), value)
            }))
        })
        .collect()
}

/// Day `i` (1-based) counted from 2023-01-01
fn generic_date(i: usize) -> String {
    let offset = i64::try_from(i.saturating_sub(1)).unwrap_or(i64::MAX);
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|start| start.checked_add_signed(Duration::try_days(offset)?))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
