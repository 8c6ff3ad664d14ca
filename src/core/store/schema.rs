//! Database schema initialization

use miette::{IntoDiagnostic, Result};

use super::Inventory;

impl Inventory {
    /// Create the product table if it does not exist yet
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                r#"
            CREATE TABLE IF NOT EXISTS product (
                product_id INTEGER PRIMARY KEY AUTOINCREMENT,
                product_name TEXT NOT NULL UNIQUE,
                product_price INTEGER NOT NULL,
                product_quantity INTEGER NOT NULL,
                date_updated TEXT NOT NULL
            );
            "#,
            )
            .into_diagnostic()?;

        tracing::debug!(path = ?self.path, "product schema ensured");
        Ok(())
    }
}
