use crate::core::list::LinkedList;
use crate::domain::model::{ReliefSite, Volunteer};
use crate::domain::ports::{LedgerStore, RegistrantStore, SiteStore};
use crate::utils::error::Result;
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Volunteer record file: one `name,contact,skill` row per line, no header.
/// The registrant store and the deployment ledger share this shape, so one
/// adapter serves both ports.
///
/// Malformed rows (wrong field count, empty fields) are skipped with a
/// warning; a missing file reads as empty. Neither is fatal.
#[derive(Debug, Clone)]
pub struct CsvVolunteerFile {
    path: PathBuf,
}

impl CsvVolunteerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_records(&self) -> Result<Vec<Volunteer>> {
        if !self.path.exists() {
            tracing::debug!("Volunteer file {} not found, treating as empty", self.path.display());
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(&self.path)?;

        let mut volunteers = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record?;

            if record.len() != 3 {
                tracing::warn!(
                    "Skipping line {} of {}: expected 3 fields, found {}",
                    line + 1,
                    self.path.display(),
                    record.len()
                );
                continue;
            }

            match Volunteer::new(&record[0], &record[1], &record[2]) {
                Ok(volunteer) => volunteers.push(volunteer),
                Err(e) => {
                    tracing::warn!(
                        "Skipping line {} of {}: {}",
                        line + 1,
                        self.path.display(),
                        e
                    );
                }
            }
        }

        Ok(volunteers)
    }

    fn append_record(&self, volunteer: &Volunteer) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(&self.path)?;

        // If a previous writer left the file without a trailing newline,
        // the new record would glue onto the last line.
        if file.metadata()?.len() > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1))?;
            file.read_exact(&mut last)?;
            file.seek(SeekFrom::End(0))?;
            if last[0] != b'\n' {
                file.write_all(b"\n")?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(volunteer)?;
        writer.flush()?;
        Ok(())
    }
}

impl RegistrantStore for CsvVolunteerFile {
    fn load(&self) -> Result<Vec<Volunteer>> {
        self.load_records()
    }

    fn append(&self, volunteer: &Volunteer) -> Result<()> {
        self.append_record(volunteer)
    }
}

impl LedgerStore for CsvVolunteerFile {
    fn load(&self) -> Result<Vec<Volunteer>> {
        self.load_records()
    }

    fn append(&self, volunteer: &Volunteer) -> Result<()> {
        self.append_record(volunteer)
    }
}

/// Relief site table: one `name current max` line per site, whitespace
/// separated. `save` rewrites the whole table.
#[derive(Debug, Clone)]
pub struct SiteTableFile {
    path: PathBuf,
}

impl SiteTableFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SiteStore for SiteTableFile {
    fn load(&self) -> Result<LinkedList<ReliefSite>> {
        let mut sites = LinkedList::new();

        if !self.path.exists() {
            tracing::warn!("Site table {} not found, no sites loaded", self.path.display());
            return Ok(sites);
        }

        let contents = fs::read_to_string(&self.path)?;
        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let parsed = match fields.as_slice() {
                [name, current, max] => current
                    .parse::<u32>()
                    .and_then(|c| max.parse::<u32>().map(|m| (name.to_string(), c, m)))
                    .ok(),
                _ => None,
            };

            match parsed {
                Some((name, current, max)) => {
                    sites.push_back(ReliefSite::new(name, current, max))
                }
                None => {
                    tracing::warn!(
                        "Skipping invalid line {} in site table {}: {}",
                        line_no + 1,
                        self.path.display(),
                        line
                    );
                }
            }
        }

        Ok(sites)
    }

    fn save(&self, sites: &LinkedList<ReliefSite>) -> Result<()> {
        let mut contents = String::new();
        for site in sites {
            contents.push_str(&format!(
                "{} {} {}\n",
                site.name, site.current_count, site.max_capacity
            ));
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
