use crate::domain::University;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct RosterRow<'a> {
    faculty: &'a str,
    field: String,
    name: &'a str,
    id: &'a str,
    email: &'a str,
    status: &'static str,
}

/// Writes every roster entry of every faculty as CSV.
pub fn write_roster_csv<W: Write>(university: &University, out: W) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(out);
    let mut rows = 0;

    for faculty in university.faculties() {
        for entry in faculty.roster() {
            writer.serialize(RosterRow {
                faculty: faculty.name(),
                field: faculty.field().to_string(),
                name: entry.student.name(),
                id: entry.student.id(),
                email: entry.student.email(),
                status: entry.status.as_str(),
            })?;
            rows += 1;
        }
    }

    writer.flush()?;
    Ok(rows)
}

pub fn export_roster_csv<P: AsRef<Path>>(university: &University, path: P) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = std::fs::File::create(path)?;
    let rows = write_roster_csv(university, file)?;
    tracing::info!("Exported {} roster rows to {}", rows, path.display());
    Ok(rows)
}

pub fn snapshot_json(university: &University) -> Result<String> {
    Ok(serde_json::to_string_pretty(university)?)
}

/// Rebuilds a university from [`snapshot_json`] output, re-checking student ids.
pub fn load_snapshot_json(json: &str) -> Result<University> {
    Ok(serde_json::from_str(json)?)
}
