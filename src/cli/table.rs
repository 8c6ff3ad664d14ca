//! Product list rendering for the `list` command
//!
//! Three output shapes:
//! - `table`: boxed table with display prices and `MM/DD/YYYY` dates
//! - `csv`: machine-readable rows, price in cents, ISO dates
//! - `json`: the product records as an array

use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::OutputFormat;
use crate::core::importer::CSV_HEADERS;
use crate::core::product::Product;

/// Render `products` in the requested format
pub fn render_products(products: &[Product], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(products)),
        OutputFormat::Csv => render_csv(products),
        OutputFormat::Json => serde_json::to_string_pretty(products).into_diagnostic(),
    }
}

fn render_table(products: &[Product]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Price", "Quantity", "Updated"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.display_price(),
            product.quantity.to_string(),
            product.display_date(),
        ]);
    }

    builder.build().with(Style::rounded()).to_string()
}

fn render_csv(products: &[Product]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["product_id"];
    header.extend(CSV_HEADERS);
    wtr.write_record(&header).into_diagnostic()?;

    for product in products {
        wtr.write_record([
            product.id.to_string(),
            product.name.clone(),
            product.price.to_string(),
            product.quantity.to_string(),
            product.last_updated.to_string(),
        ])
        .into_diagnostic()?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| miette::miette!("Failed to finish CSV output: {}", e.error()))?;
    String::from_utf8(bytes).into_diagnostic()
}
