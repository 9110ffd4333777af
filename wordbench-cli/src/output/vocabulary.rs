//! Vocabulary file: sorted unique tokens, one per line

use anyhow::Result;
use std::io::Write;
use wordbench_core::FrequencyTable;

/// Write the alphabetical vocabulary listing.
pub fn write(out: &mut dyn Write, table: &FrequencyTable) -> Result<()> {
    for token in table.sorted_tokens() {
        writeln!(out, "{token}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_come_out_sorted() {
        let mut table = FrequencyTable::new();
        table.extend(["cherry", "apple", "banana", "apple"].map(String::from));

        let mut buf = Vec::new();
        write(&mut buf, &table).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "apple\nbanana\ncherry\n");
    }

    #[test]
    fn empty_table_writes_nothing() {
        let mut buf = Vec::new();
        write(&mut buf, &FrequencyTable::new()).unwrap();
        assert!(buf.is_empty());
    }
}
