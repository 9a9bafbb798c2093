use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, Float32Array, Float64Array, StringArray};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use thiserror::Error;

use super::model::{Category, Product, SnackDataset};

// ---------------------------------------------------------------------------
// Defects
// ---------------------------------------------------------------------------

/// Data-quality defects detected during load. Validation is strict: any
/// defect rejects the whole file rather than silently skewing aggregates.
#[derive(Debug, Error)]
pub enum LoadDefect {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("row {row}: unknown category '{label}'")]
    UnknownCategory { row: usize, label: String },
    #[error("row {row}: {column} is {value}, expected a finite non-negative number")]
    InvalidNutrient {
        row: usize,
        column: &'static str,
        value: f64,
    },
    #[error("row {row}: missing value in column '{column}'")]
    MissingValue { row: usize, column: &'static str },
    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the snack dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header `product_name,primary_category,sugars_100g,proteins_100g`
/// * `.json`    – `[{ "product_name": ..., "primary_category": ..., ... }, ...]`
/// * `.parquet` – flat Utf8/Float64 columns with the same names
pub fn load_file(path: &Path) -> Result<SnackDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let products = match ext.as_str() {
        "csv" => read_csv(std::fs::File::open(path).context("opening CSV")?)?,
        "json" => read_json(std::fs::File::open(path).context("opening JSON")?)?,
        "parquet" | "pq" => read_parquet(path)?,
        other => return Err(LoadDefect::UnsupportedExtension(other.to_string()).into()),
    };

    if products.is_empty() {
        return Err(LoadDefect::Empty.into());
    }
    Ok(SnackDataset::from_products(products))
}

// ---------------------------------------------------------------------------
// Raw record – shared by the CSV and JSON loaders
// ---------------------------------------------------------------------------

/// One row as it appears on disk. `Category`'s serde impl enforces the
/// closed label set, so an out-of-enum category fails deserialization
/// with the row position attached.
#[derive(Debug, Deserialize)]
struct RawRecord {
    product_name: String,
    primary_category: Category,
    sugars_100g: f64,
    proteins_100g: f64,
}

/// Nutrient range check shared by every format.
fn validate(raw: RawRecord, row: usize) -> Result<Product, LoadDefect> {
    for (column, value) in [
        ("sugars_100g", raw.sugars_100g),
        ("proteins_100g", raw.proteins_100g),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(LoadDefect::InvalidNutrient { row, column, value });
        }
    }
    Ok(Product {
        name: raw.product_name,
        category: raw.primary_category,
        sugars_100g: raw.sugars_100g,
        proteins_100g: raw.proteins_100g,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn read_csv<R: Read>(reader: R) -> Result<Vec<Product>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut products = Vec::new();

    for (row_no, result) in rdr.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        products.push(validate(raw, row_no)?);
    }
    Ok(products)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
fn read_json<R: Read>(reader: R) -> Result<Vec<Product>> {
    let records: Vec<RawRecord> =
        serde_json::from_reader(reader).context("parsing JSON records")?;

    records
        .into_iter()
        .enumerate()
        .map(|(row, raw)| validate(raw, row).map_err(Into::into))
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Flat-column Parquet as written by `df.to_parquet()`:
/// `product_name`/`primary_category` as Utf8, nutrients as Float64 (or
/// Float32, widened on read).
fn read_parquet(path: &Path) -> Result<Vec<Product>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut products = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let col = |name: &str| -> Result<usize> {
            schema
                .index_of(name)
                .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))
        };
        let names = string_column(batch.column(col("product_name")?), "product_name")?;
        let labels = string_column(batch.column(col("primary_category")?), "primary_category")?;
        let sugars = float_column(batch.column(col("sugars_100g")?), "sugars_100g")?;
        let proteins = float_column(batch.column(col("proteins_100g")?), "proteins_100g")?;

        for row_in_batch in 0..batch.num_rows() {
            let row = products.len();
            let label = labels[row_in_batch]
                .as_deref()
                .ok_or(LoadDefect::MissingValue {
                    row,
                    column: "primary_category",
                })?;
            let raw = RawRecord {
                product_name: names[row_in_batch]
                    .clone()
                    .ok_or(LoadDefect::MissingValue {
                        row,
                        column: "product_name",
                    })?,
                primary_category: Category::from_label(label).ok_or_else(|| {
                    LoadDefect::UnknownCategory {
                        row,
                        label: label.to_string(),
                    }
                })?,
                sugars_100g: sugars[row_in_batch].ok_or(LoadDefect::MissingValue {
                    row,
                    column: "sugars_100g",
                })?,
                proteins_100g: proteins[row_in_batch].ok_or(LoadDefect::MissingValue {
                    row,
                    column: "proteins_100g",
                })?,
            };
            products.push(validate(raw, row)?);
        }
    }
    Ok(products)
}

// -- Arrow helpers --

fn string_column(col: &dyn Array, name: &str) -> Result<Vec<Option<String>>> {
    let arr = col
        .as_any()
        .downcast_ref::<StringArray>()
        .with_context(|| format!("column '{name}' is not Utf8"))?;
    Ok((0..arr.len())
        .map(|i| (!arr.is_null(i)).then(|| arr.value(i).to_string()))
        .collect())
}

fn float_column(col: &dyn Array, name: &str) -> Result<Vec<Option<f64>>> {
    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok((0..arr.len())
            .map(|i| (!arr.is_null(i)).then(|| arr.value(i)))
            .collect())
    } else if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
        Ok((0..arr.len())
            .map(|i| (!arr.is_null(i)).then(|| arr.value(i) as f64))
            .collect())
    } else {
        bail!(
            "column '{name}' is {:?}, expected Float64 or Float32",
            col.data_type()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_CSV: &str = "\
product_name,primary_category,sugars_100g,proteins_100g
Choco Bomb,Candy & Confectionery,62.5,3.1
Trail Mix,Nuts & Seeds,18.0,16.4
Whey Bar,Protein & Fitness Bars,9.0,31.0
";

    #[test]
    fn csv_rows_deserialize_and_validate() {
        let products = read_csv(GOOD_CSV.as_bytes()).unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[1].category, Category::NutsSeeds);
        assert_eq!(products[1].sugars_100g, 18.0);
        assert_eq!(products[2].name, "Whey Bar");
    }

    #[test]
    fn unknown_category_is_rejected() {
        let csv = "\
product_name,primary_category,sugars_100g,proteins_100g
Mystery,Frozen Pizza,10.0,10.0
";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 0"));
    }

    #[test]
    fn negative_nutrient_is_rejected() {
        let csv = "\
product_name,primary_category,sugars_100g,proteins_100g
Bad Row,General Snacks,-1.0,5.0
";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("sugars_100g"));
    }

    #[test]
    fn missing_numeric_field_is_rejected() {
        let csv = "\
product_name,primary_category,sugars_100g,proteins_100g
Gap Row,General Snacks,,5.0
";
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn json_records_load() {
        let json = r#"[
            {"product_name": "Fig Roll", "primary_category": "Cookies & Biscuits",
             "sugars_100g": 35.2, "proteins_100g": 4.0}
        ]"#;
        let products = read_json(json.as_bytes()).unwrap();
        assert_eq!(products[0].category, Category::CookiesBiscuits);
    }

    #[test]
    fn nan_nutrient_is_rejected_in_csv() {
        let csv = "\
product_name,primary_category,sugars_100g,proteins_100g
NaN Row,General Snacks,NaN,5.0
";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("finite"));
    }
}
