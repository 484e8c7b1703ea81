//! Reads and writes the inventory data file.
//!
//! The file holds one JSON encoded [`Cd`] per line, in inventory order.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};

use crate::{domain::cd::Cd, storage::error::StorageError};

/// Result of reading the data file
#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<Cd>),
    /// the data file does not exist yet
    Missing,
}

pub fn load(path: &Path) -> Result<LoadOutcome, StorageError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("Data file {} not found", path.to_string_lossy());
            return Ok(LoadOutcome::Missing);
        }
        Err(e) => return Err(e.into()),
    };

    let records = read_records(BufReader::new(file))?;
    log::debug!(
        "Loaded {} records from {}",
        records.len(),
        path.to_string_lossy()
    );
    Ok(LoadOutcome::Loaded(records))
}

fn read_records(reader: impl BufRead) -> Result<Vec<Cd>, StorageError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let cd = serde_json::from_str(&line)
            .map_err(|source| StorageError::Corrupt { line: idx + 1, source })?;
        records.push(cd);
    }
    Ok(records)
}

/// Overwrites the data file with `records`.
///
/// The write is not atomic: a crash part way through leaves a truncated file.
pub fn save(path: &Path, records: &[Cd]) -> Result<(), StorageError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for cd in records {
        serde_json::to_writer(&mut writer, cd).map_err(StorageError::Encode)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    log::debug!("Saved {} records to {}", records.len(), path.to_string_lossy());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{LoadOutcome, load, save};
    use crate::{domain::cd::Cd, storage::error::StorageError};

    fn sample() -> Vec<Cd> {
        vec![
            Cd::new(1, "Abbey Road", "Beatles"),
            Cd::new(2, "Thriller", "Jackson"),
            Cd::new(1, "Tab\tand \"quotes\"", "Ünïcode"),
        ]
    }

    #[test]
    fn test_save_then_load_keeps_order() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("CDInventory.dat");

        save(&path, &sample())?;

        assert_eq!(load(&path)?, LoadOutcome::Loaded(sample()));
        Ok(())
    }

    #[test]
    fn test_save_overwrites_existing_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("CDInventory.dat");

        save(&path, &sample())?;
        save(&path, &[Cd::new(9, "Kind of Blue", "Davis")])?;

        assert_eq!(
            load(&path)?,
            LoadOutcome::Loaded(vec![Cd::new(9, "Kind of Blue", "Davis")])
        );
        Ok(())
    }

    #[test]
    fn test_save_empty_inventory() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("CDInventory.dat");

        save(&path, &[])?;

        assert_eq!(fs::read_to_string(&path)?, "");
        assert_eq!(load(&path)?, LoadOutcome::Loaded(vec![]));
        Ok(())
    }

    #[test]
    fn test_load_missing_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let outcome = load(&dir.path().join("nope.dat"))?;
        assert_eq!(outcome, LoadOutcome::Missing);
        Ok(())
    }

    #[test]
    fn test_load_skips_blank_lines() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("CDInventory.dat");
        fs::write(
            &path,
            "{\"id\":1,\"title\":\"A\",\"artist\":\"B\"}\n\n  \n{\"id\":2,\"title\":\"C\",\"artist\":\"D\"}\n",
        )?;

        assert_eq!(
            load(&path)?,
            LoadOutcome::Loaded(vec![Cd::new(1, "A", "B"), Cd::new(2, "C", "D")])
        );
        Ok(())
    }

    #[test]
    fn test_load_corrupt_file_reports_line() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("CDInventory.dat");
        fs::write(
            &path,
            "{\"id\":1,\"title\":\"A\",\"artist\":\"B\"}\nnot json\n",
        )?;

        match load(&path) {
            Err(StorageError::Corrupt { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected corrupt file error, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_save_into_missing_directory_fails() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("missing").join("CDInventory.dat");

        assert!(matches!(save(&path, &sample()), Err(StorageError::Fs(_))));
        Ok(())
    }
}
