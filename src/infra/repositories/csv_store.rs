use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const TUTORS_FILE: &str = "tutors.csv";
pub const COURSES_FILE: &str = "courses.csv";
pub const USERS_FILE: &str = "users.csv";
pub const AVAILABILITY_FILE: &str = "availability.csv";
pub const APPOINTMENTS_FILE: &str = "appointments.csv";

/// Flat-file table storage. Every mutation reads the whole table,
/// applies the change in memory, and rewrites the file through a temp
/// file + rename, so a failed write leaves the previous table intact.
pub struct CsvStore {
    dir: PathBuf,
    write_guard: Mutex<()>,
}

impl CsvStore {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            write_guard: Mutex::new(()),
        })
    }

    pub fn read_all<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, AppError> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }
        Ok(rows)
    }

    /// Read-modify-write under the store's write guard. The whole table
    /// is the unit of mutation.
    pub fn rewrite<T>(
        &self,
        file: &str,
        mutate: impl FnOnce(Vec<T>) -> Result<Vec<T>, AppError>,
    ) -> Result<(), AppError>
    where
        T: Serialize + DeserializeOwned,
    {
        let _guard = self
            .write_guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let rows = self.read_all(file)?;
        let rows = mutate(rows)?;
        self.write_all(file, &rows)
    }

    fn write_all<T: Serialize>(&self, file: &str, rows: &[T]) -> Result<(), AppError> {
        let path = self.dir.join(file);
        let tmp = self.dir.join(format!("{}.tmp", file));
        {
            let mut writer = csv::Writer::from_path(&tmp)?;
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
