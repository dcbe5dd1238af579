//! CSV output

use super::record::Record;
use super::ExportError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write `header` and then one line per record; returns the record count
pub fn write_records<'r, W: Write>(
    writer: W,
    header: &[String],
    records: impl IntoIterator<Item = &'r Record>,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(header)?;
    let mut count = 0;
    for record in records {
        csv_writer.write_record(record.row(header))?;
        count += 1;
    }
    csv_writer.flush()?;
    Ok(count)
}

/// Write records to `path`, creating its parent directory
pub fn write_csv<'r>(
    path: impl AsRef<Path>,
    header: &[String],
    records: impl IntoIterator<Item = &'r Record>,
) -> Result<usize, ExportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let count = write_records(File::create(path)?, header, records)?;
    info!(rows = count, path = %path.display(), "wrote CSV export");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_quoted_cells() {
        let header = vec!["id".to_string(), "name".to_string()];
        let mut record = Record::new();
        record.set("id", "1");
        record.set("name", "Smith, Jones & Co");

        let mut out = Vec::new();
        let count = write_records(&mut out, &header, [&record]).unwrap();
        assert_eq!(count, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "id,name\n1,\"Smith, Jones & Co\"\n");
    }

    #[test]
    fn creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("rows.csv");
        let header = vec!["id".to_string()];
        write_csv(&path, &header, std::iter::empty()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "id\n");
    }
}
