//! Human-readable ASCII rendering of a table.

use crate::table::HashTable;
use core::fmt;

const RULE: &str = "+----------+--------------------+------------------------------------+";

/// `Display` adapter returned by [`HashTable::dump`]. One row per entry,
/// in bucket order, followed by the record count and capacity (and the
/// collision counters when built with the `diagnostics` feature).
pub struct Dump<'a> {
    table: &'a HashTable,
}

impl<'a> Dump<'a> {
    pub(crate) fn new(table: &'a HashTable) -> Self {
        Self { table }
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "+   hash   +        key         +                  value             +"
        )?;
        writeln!(f, "{RULE}")?;

        for (bucket, key, value) in self.table.iter() {
            writeln!(f, "|{:>9} |{:>19} |{:>36}|", bucket, key, value)?;
            writeln!(f, "{RULE}")?;
        }

        writeln!(
            f,
            "| n_keys: {:>21} | table_size: {:>22} |",
            self.table.len(),
            self.table.capacity()
        )?;
        writeln!(f, "{RULE}")?;

        #[cfg(feature = "diagnostics")]
        {
            writeln!(
                f,
                "| Collisions: {:>17} | Collision / n_keys = {:.11} |",
                self.table.collisions(),
                self.table.collisions_per_key()
            )?;
            writeln!(f, "{RULE}")?;
        }
        Ok(())
    }
}
