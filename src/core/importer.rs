//! CSV import into the product store
//!
//! Rows are read with the header `product_name,product_price,product_quantity,date_updated`
//! and upserted one at a time. The first bad row stops the import; rows before it
//! stay saved.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use miette::Diagnostic;
use thiserror::Error;

use crate::core::product::{parse_csv_price, parse_date, parse_quantity};
use crate::core::store::{Inventory, UpsertOutcome};

/// Default import file, relative to the working directory
pub const DEFAULT_IMPORT_CSV: &str = "inventory.csv";

/// Column names shared by the import and backup files
pub const CSV_HEADERS: [&str; 4] = [
    "product_name",
    "product_price",
    "product_quantity",
    "date_updated",
];

#[derive(Debug, Error, Diagnostic)]
pub enum ImportError {
    #[error("could not open {}", .path.display())]
    #[diagnostic(
        code(inventory::import::open),
        help("put an inventory CSV in the working directory, point --csv at one, or pass --no-import")
    )]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV at line {line}")]
    #[diagnostic(code(inventory::import::csv))]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("CSV header has no '{column}' column")]
    #[diagnostic(
        code(inventory::import::missing_column),
        help("expected header: product_name,product_price,product_quantity,date_updated")
    )]
    MissingColumn { column: &'static str },

    #[error("line {line}: invalid {column} '{value}' (expected {expected})")]
    #[diagnostic(code(inventory::import::invalid_field))]
    InvalidField {
        line: u64,
        column: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("line {line}: could not save '{name}': {message}")]
    #[diagnostic(code(inventory::import::store))]
    Store {
        line: u64,
        name: String,
        message: String,
    },
}

/// Import statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub rows_processed: usize,
    pub created: usize,
    pub updated: usize,
}

/// Import the CSV file at `path`
pub fn import_csv(store: &mut Inventory, path: &Path) -> Result<ImportStats, ImportError> {
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let stats = import_reader(store, BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        rows = stats.rows_processed,
        created = stats.created,
        updated = stats.updated,
        "inventory imported"
    );

    Ok(stats)
}

/// Import CSV data from any reader
pub fn import_reader<R: Read>(store: &mut Inventory, reader: R) -> Result<ImportStats, ImportError> {
    // Names are upsert keys and stay exactly as written
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|source| ImportError::Csv { line: 1, source })?
        .clone();
    let columns = Columns::resolve(&headers)?;

    let mut stats = ImportStats::default();
    let mut last_line = 1; // header

    for result in rdr.records() {
        let record = result.map_err(|source| ImportError::Csv {
            line: source.position().map_or(last_line + 1, |p| p.line()),
            source,
        })?;
        let line = record.position().map_or(last_line + 1, |p| p.line());
        last_line = line;

        let name = field(&record, columns.name);
        let raw_price = field(&record, columns.price).trim();
        let price = parse_csv_price(raw_price).ok_or_else(|| ImportError::InvalidField {
            line,
            column: "product_price",
            value: raw_price.to_string(),
            expected: "a price like $12.50",
        })?;

        let raw_quantity = field(&record, columns.quantity).trim();
        let quantity = parse_quantity(raw_quantity).ok_or_else(|| ImportError::InvalidField {
            line,
            column: "product_quantity",
            value: raw_quantity.to_string(),
            expected: "a whole number",
        })?;

        let raw_date = field(&record, columns.date).trim();
        let date = parse_date(raw_date).ok_or_else(|| ImportError::InvalidField {
            line,
            column: "date_updated",
            value: raw_date.to_string(),
            expected: "a date as MM/DD/YYYY",
        })?;

        let (_, outcome) = store
            .upsert(name, price, quantity, date)
            .map_err(|e| ImportError::Store {
                line,
                name: name.to_string(),
                message: e.to_string(),
            })?;

        stats.rows_processed += 1;
        match outcome {
            UpsertOutcome::Created => stats.created += 1,
            UpsertOutcome::Updated => stats.updated += 1,
        }
    }

    Ok(stats)
}

/// Column positions of the four required fields
struct Columns {
    name: usize,
    price: usize,
    quantity: usize,
    date: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, ImportError> {
        let header_map: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_lowercase(), i))
            .collect();

        let lookup = |column: &'static str| {
            header_map
                .get(column)
                .copied()
                .ok_or(ImportError::MissingColumn { column })
        };

        Ok(Self {
            name: lookup(CSV_HEADERS[0])?,
            price: lookup(CSV_HEADERS[1])?,
            quantity: lookup(CSV_HEADERS[2])?,
            date: lookup(CSV_HEADERS[3])?,
        })
    }
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "product_name,product_price,product_quantity,date_updated\n";

    fn import_str(store: &mut Inventory, body: &str) -> Result<ImportStats, ImportError> {
        import_reader(store, format!("{}{}", HEADER, body).as_bytes())
    }

    #[test]
    fn test_import_single_row() {
        let mut store = Inventory::open_in_memory().unwrap();
        let stats = import_str(&mut store, "Widget,$12.50,5,01/02/2020\n").unwrap();

        assert_eq!(
            stats,
            ImportStats {
                rows_processed: 1,
                created: 1,
                updated: 0
            }
        );

        let widget = store.get_by_name("Widget").unwrap().unwrap();
        assert_eq!(widget.price, 1250);
        assert_eq!(widget.quantity, 5);
        assert_eq!(widget.last_updated, NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());
    }

    #[test]
    fn test_reimport_updates_in_place() {
        let mut store = Inventory::open_in_memory().unwrap();
        import_str(&mut store, "Widget,$12.50,5,01/02/2020\nBolt,$0.25,100,03/04/2019\n").unwrap();
        let before = store.get_by_name("Widget").unwrap().unwrap();

        let stats = import_str(&mut store, "Widget,$15.00,2,06/07/2021\n").unwrap();
        assert_eq!(stats.updated, 1);
        assert_eq!(stats.created, 0);

        let after = store.get_by_name("Widget").unwrap().unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.price, 1500);
        assert_eq!(after.quantity, 2);
        assert_eq!(after.last_updated, NaiveDate::from_ymd_opt(2021, 6, 7).unwrap());
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_duplicate_names_within_one_file() {
        let mut store = Inventory::open_in_memory().unwrap();
        let stats = import_str(
            &mut store,
            "Widget,$1.00,1,01/01/2020\nWidget,$2.00,2,01/02/2020\n",
        )
        .unwrap();

        assert_eq!(stats.created, 1);
        assert_eq!(stats.updated, 1);
        assert_eq!(store.get_by_name("Widget").unwrap().unwrap().price, 200);
    }

    #[test]
    fn test_quoted_names_and_column_order() {
        let mut store = Inventory::open_in_memory().unwrap();
        let csv = "date_updated,product_quantity,product_price,product_name\n\
                   11/30/2018,7,$3.19,\"Soup - Cream, Chicken\"\n";
        import_reader(&mut store, csv.as_bytes()).unwrap();

        let soup = store.get_by_name("Soup - Cream, Chicken").unwrap().unwrap();
        assert_eq!(soup.price, 319);
        assert_eq!(soup.quantity, 7);
    }

    #[test]
    fn test_bad_price_stops_import() {
        let mut store = Inventory::open_in_memory().unwrap();
        let err = import_str(
            &mut store,
            "Good,$1.00,1,01/01/2020\nBad,$1,234.50,1,01/01/2020\nLater,$2.00,1,01/01/2020\n",
        )
        .unwrap_err();

        // The unquoted comma shifts the columns, so quantity is what fails
        assert!(matches!(err, ImportError::InvalidField { line: 3, .. }));
        assert!(store.get_by_name("Good").unwrap().is_some());
        assert!(store.get_by_name("Later").unwrap().is_none());
    }

    #[test]
    fn test_bad_date_reports_line_and_column() {
        let mut store = Inventory::open_in_memory().unwrap();
        let err = import_str(&mut store, "Widget,$12.50,5,2020-01-02\n").unwrap_err();

        match err {
            ImportError::InvalidField {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, "date_updated");
                assert_eq!(value, "2020-01-02");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_bad_quantity() {
        let mut store = Inventory::open_in_memory().unwrap();
        let err = import_str(&mut store, "Widget,$12.50,five,01/02/2020\n").unwrap_err();
        assert!(matches!(
            err,
            ImportError::InvalidField {
                column: "product_quantity",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_column() {
        let mut store = Inventory::open_in_memory().unwrap();
        let err = import_reader(
            &mut store,
            "product_name,product_price,date_updated\nWidget,$1.00,01/01/2020\n".as_bytes(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ImportError::MissingColumn {
                column: "product_quantity"
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        let tmp = tempdir().unwrap();
        let mut store = Inventory::open_in_memory().unwrap();
        let err = import_csv(&mut store, &tmp.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, ImportError::Open { .. }));
    }

    #[test]
    fn test_import_csv_from_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("inventory.csv");
        fs::write(
            &path,
            format!("{}Widget,$12.50,5,01/02/2020\nGadget,$9.99,3,1/2/2021\n", HEADER),
        )
        .unwrap();

        let mut store = Inventory::open_in_memory().unwrap();
        let stats = import_csv(&mut store, &path).unwrap();
        assert_eq!(stats.rows_processed, 2);

        let names: Vec<String> = store.list_all().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Gadget", "Widget"]);
    }

    #[test]
    fn test_header_only_file() {
        let mut store = Inventory::open_in_memory().unwrap();
        let stats = import_str(&mut store, "").unwrap();
        assert_eq!(stats, ImportStats::default());
    }

    #[test]
    fn test_line_numbers_follow_multiline_fields() {
        let mut store = Inventory::open_in_memory().unwrap();
        let err = import_str(
            &mut store,
            "\"Soup\nTomato\",$1.00,1,01/01/2020\nWidget,$12.50,5,2020-01-02\n",
        )
        .unwrap_err();

        assert!(matches!(err, ImportError::InvalidField { line: 4, .. }));
        assert!(store.get_by_name("Soup\nTomato").unwrap().is_some());
    }

    #[test]
    fn test_names_keep_surrounding_whitespace() {
        let mut store = Inventory::open_in_memory().unwrap();
        let stats = import_str(
            &mut store,
            "Widget, $12.50 , 5 , 01/02/2020 \n Widget,$1.00,1,01/01/2020\n",
        )
        .unwrap();

        assert_eq!(stats.created, 2);
        assert_eq!(store.get_by_name("Widget").unwrap().unwrap().price, 1250);
        assert_eq!(store.get_by_name(" Widget").unwrap().unwrap().price, 100);
    }
}
