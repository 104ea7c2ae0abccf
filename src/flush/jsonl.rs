use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::Tunables;
use crate::error::PersistError;
use crate::missions::MissionRegistry;
use crate::model::MissionRecord;

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> Result<(), PersistError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item).map_err(std::io::Error::from)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write every in-flight mission to `path`, one record per line, in agent order.
///
/// Creates the parent directory if it does not exist.
pub fn flush_missions_to_jsonl(registry: &MissionRegistry, path: &Path) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_jsonl(path, registry.missions())
}

/// Rebuild a registry from a file written by [`flush_missions_to_jsonl`].
///
/// Blank lines are skipped. A record whose agent already appeared earlier in
/// the file is rejected rather than silently overwritten.
pub fn load_missions_from_jsonl(
    path: &Path,
    tunables: Tunables,
) -> Result<MissionRegistry, PersistError> {
    let reader = BufReader::new(File::open(path)?);
    let mut registry = MissionRegistry::new(tunables);
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: MissionRecord = serde_json::from_str(&line).map_err(|source| {
            PersistError::Json {
                line: index + 1,
                source,
            }
        })?;
        let agent = record.agent;
        if !registry.restore(record) {
            return Err(PersistError::DuplicateAgent(agent));
        }
    }
    Ok(registry)
}
