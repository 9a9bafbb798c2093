//! Generate a synthetic snack dataset so the dashboard can be exercised
//! without the real Open Food Facts extract.
//!
//! Usage: `generate_sample [output_stem] [seed]`
//! Writes `<stem>.csv` and `<stem>.parquet` (default stem
//! `food_facts_snacks`, default seed 42).

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// (label, row count, sugar range g/100g, protein range g/100g)
const CATEGORIES: [(&str, usize, (f64, f64), (f64, f64)); 8] = [
    ("Candy & Confectionery", 1800, (35.0, 85.0), (0.0, 6.0)),
    ("Cookies & Biscuits", 1500, (18.0, 55.0), (3.0, 9.0)),
    ("Chips & Savory Snacks", 1400, (0.5, 8.0), (4.0, 12.0)),
    ("General Snacks", 2200, (5.0, 45.0), (2.0, 15.0)),
    ("Fruit & Veg Snacks", 900, (15.0, 65.0), (1.0, 6.0)),
    ("Nuts & Seeds", 1100, (2.0, 12.0), (12.0, 28.0)),
    ("Dairy & Yogurt Snacks", 800, (8.0, 25.0), (3.0, 12.0)),
    ("Protein & Fitness Bars", 700, (4.0, 22.0), (18.0, 38.0)),
];

struct Row {
    name: String,
    category: &'static str,
    sugars: f64,
    proteins: f64,
}

fn generate(seed: u64) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::new();

    for (label, count, sugar, protein) in CATEGORIES {
        for k in 0..count {
            rows.push(Row {
                name: format!("{label} sample #{k:04}"),
                category: label,
                sugars: round1(rng.random_range(sugar.0..=sugar.1)),
                proteins: round1(rng.random_range(protein.0..=protein.1)),
            });
        }
    }
    rows
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn write_csv(path: &str, rows: &[Row]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).context("creating CSV")?;
    wtr.write_record(["product_name", "primary_category", "sugars_100g", "proteins_100g"])?;
    for row in rows {
        let sugars = format!("{:.1}", row.sugars);
        let proteins = format!("{:.1}", row.proteins);
        wtr.write_record([row.name.as_str(), row.category, sugars.as_str(), proteins.as_str()])?;
    }
    wtr.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &str, rows: &[Row]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("product_name", DataType::Utf8, false),
        Field::new("primary_category", DataType::Utf8, false),
        Field::new("sugars_100g", DataType::Float64, false),
        Field::new("proteins_100g", DataType::Float64, false),
    ]));

    let names = StringArray::from(rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>());
    let categories = StringArray::from(rows.iter().map(|r| r.category).collect::<Vec<_>>());
    let sugars = Float64Array::from(rows.iter().map(|r| r.sugars).collect::<Vec<_>>());
    let proteins = Float64Array::from(rows.iter().map(|r| r.proteins).collect::<Vec<_>>());

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(names),
            Arc::new(categories),
            Arc::new(sugars),
            Arc::new(proteins),
        ],
    )
    .context("building record batch")?;

    let file = File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let stem = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("food_facts_snacks"));
    let seed: u64 = std::env::args()
        .nth(2)
        .map(|s| s.parse())
        .transpose()
        .context("seed must be an integer")?
        .unwrap_or(42);

    let rows = generate(seed);
    write_csv(&format!("{stem}.csv"), &rows)?;
    write_parquet(&format!("{stem}.parquet"), &rows)?;

    println!(
        "Wrote {} rows to {stem}.csv and {stem}.parquet (seed {seed})",
        rows.len()
    );
    Ok(())
}
