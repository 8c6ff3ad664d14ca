//! Reads and writes against the product table

use chrono::NaiveDate;
use miette::{IntoDiagnostic, Result};
use rusqlite::{params, OptionalExtension, Row};

use super::Inventory;
use crate::core::product::Product;

const PRODUCT_COLUMNS: &str =
    "product_id, product_name, product_price, product_quantity, date_updated";

/// What an upsert did to the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        quantity: row.get(3)?,
        last_updated: row.get(4)?,
    })
}

impl Inventory {
    /// Insert a product, or overwrite price, quantity and date of the
    /// product that already has this name. The id of an existing row is kept.
    pub fn upsert(
        &mut self,
        name: &str,
        price: i64,
        quantity: i64,
        date: NaiveDate,
    ) -> Result<(Product, UpsertOutcome)> {
        let tx = self.conn.transaction().into_diagnostic()?;

        let existing: Option<i64> = tx
            .query_row(
                "SELECT product_id FROM product WHERE product_name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .into_diagnostic()?;

        let (id, outcome) = match existing {
            Some(id) => {
                tx.execute(
                    "UPDATE product SET product_price = ?1, product_quantity = ?2, date_updated = ?3 WHERE product_id = ?4",
                    params![price, quantity, date, id],
                )
                .into_diagnostic()?;
                (id, UpsertOutcome::Updated)
            }
            None => {
                tx.execute(
                    "INSERT INTO product (product_name, product_price, product_quantity, date_updated) VALUES (?1, ?2, ?3, ?4)",
                    params![name, price, quantity, date],
                )
                .into_diagnostic()?;
                (tx.last_insert_rowid(), UpsertOutcome::Created)
            }
        };

        tx.commit().into_diagnostic()?;
        tracing::debug!(id, name, price, quantity, ?outcome, "product saved");

        Ok((
            Product {
                id,
                name: name.to_string(),
                price,
                quantity,
                last_updated: date,
            },
            outcome,
        ))
    }

    /// Get a product by its generated id
    pub fn get_by_id(&self, id: i64) -> Result<Option<Product>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM product WHERE product_id = ?1", PRODUCT_COLUMNS),
                params![id],
                product_from_row,
            )
            .optional()
            .into_diagnostic()
    }

    /// Get a product by its unique name
    pub fn get_by_name(&self, name: &str) -> Result<Option<Product>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM product WHERE product_name = ?1", PRODUCT_COLUMNS),
                params![name],
                product_from_row,
            )
            .optional()
            .into_diagnostic()
    }

    /// All products, most recently created first
    pub fn list_all(&self) -> Result<Vec<Product>> {
        self.query_products(&format!(
            "SELECT {} FROM product ORDER BY product_id DESC",
            PRODUCT_COLUMNS
        ))
    }

    /// All products in creation order (used for backups)
    pub fn list_by_id_ascending(&self) -> Result<Vec<Product>> {
        self.query_products(&format!(
            "SELECT {} FROM product ORDER BY product_id ASC",
            PRODUCT_COLUMNS
        ))
    }

    /// Number of stored products
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM product", [], |row| row.get(0))
            .into_diagnostic()?;
        Ok(count as usize)
    }

    fn query_products(&self, sql: &str) -> Result<Vec<Product>> {
        let mut stmt = self.conn.prepare(sql).into_diagnostic()?;
        let rows = stmt.query_map([], product_from_row).into_diagnostic()?;
        rows.collect::<rusqlite::Result<Vec<_>>>().into_diagnostic()
    }
}
