use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a script with the standard header followed by `rows`.
pub fn write_script(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type, value, quantity").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

/// Generates a script that stocks the standard machine and then withdraws
/// 20 at a time `withdrawals` times.
pub fn generate_withdrawal_script(path: &Path, withdrawals: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "value", "quantity"])?;
    wtr.write_record(["restock", "100", "0"])?;
    wtr.write_record(["restock", "50", "0"])?;
    wtr.write_record(["restock", "20", &withdrawals.to_string()])?;

    for _ in 0..withdrawals {
        wtr.write_record(["withdraw", "20", ""])?;
    }

    wtr.flush()?;
    Ok(())
}
