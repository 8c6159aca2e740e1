// Cache store for the persisted daily report.
// Handles JSON serialization, mtime-based freshness, and filesystem operations.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How long a stored report is reused before a refresh: 24 hours.
pub const FRESHNESS_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// The persisted report. The on-disk schema is fixed:
/// `{"timestamp": <ISO-8601 string>, "full_report": <string>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedReport {
    /// When the report was generated.
    pub timestamp: DateTime<Utc>,
    /// The composed report body.
    pub full_report: String,
}

/// Store for the single report cache file. Single-writer by assumption;
/// there is no locking.
pub struct ReportCache {
    path: PathBuf,
}

impl ReportCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the stored report can be reused.
    ///
    /// A missing or empty file is never fresh, forcing a refresh. Otherwise
    /// freshness is measured against the file's modification time, not the
    /// embedded timestamp field: restoring the file from a backup changes
    /// its mtime and therefore this decision.
    pub fn is_fresh(&self) -> bool {
        self.is_fresh_at(SystemTime::now())
    }

    fn is_fresh_at(&self, now: SystemTime) -> bool {
        let Ok(meta) = fs::metadata(&self.path) else {
            return false;
        };
        // A zero-byte file is a half-written artifact; treat as missing.
        if meta.len() == 0 {
            return false;
        }
        let Ok(modified) = meta.modified() else {
            return false;
        };
        match now.duration_since(modified) {
            Ok(age) => age <= FRESHNESS_TTL,
            // mtime in the future counts as just written
            Err(_) => true,
        }
    }

    /// Load the stored report. Fails if the file is unreadable or its
    /// contents do not match the expected schema.
    pub fn load(&self) -> Result<CachedReport> {
        let contents = fs::read_to_string(&self.path)?;
        let report: CachedReport = serde_json::from_str(&contents)?;
        Ok(report)
    }

    /// Write the report, fully replacing any prior content.
    pub fn save(&self, report: &CachedReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;

        // Write via temp file + rename so the prior report is never left
        // partially overwritten.
        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_report(body: &str) -> CachedReport {
        CachedReport {
            timestamp: Utc::now(),
            full_report: body.to_string(),
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ReportCache::new(temp_dir.path().join("report.json"));

        let report = sample_report("Daily report\n\n--- Section ---\nbody");
        cache.save(&report).unwrap();

        let loaded = cache.load().unwrap();
        assert_eq!(loaded.full_report, report.full_report);
        assert_eq!(loaded.timestamp, report.timestamp);
    }

    #[test]
    fn test_save_replaces_prior_content() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ReportCache::new(temp_dir.path().join("report.json"));

        cache
            .save(&sample_report("a much longer first report body"))
            .unwrap();
        cache.save(&sample_report("short")).unwrap();

        let loaded = cache.load().unwrap();
        assert_eq!(loaded.full_report, "short");
    }

    #[test]
    fn test_missing_file_is_not_fresh() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ReportCache::new(temp_dir.path().join("absent.json"));

        assert!(!cache.is_fresh());
    }

    #[test]
    fn test_zero_byte_file_is_not_fresh() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        fs::File::create(&path).unwrap();

        let cache = ReportCache::new(&path);
        assert!(!cache.is_fresh());
    }

    #[test]
    fn test_freshness_boundary() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ReportCache::new(temp_dir.path().join("report.json"));
        cache.save(&sample_report("body")).unwrap();

        let modified = fs::metadata(cache.path()).unwrap().modified().unwrap();

        let just_inside = modified + (FRESHNESS_TTL - Duration::from_secs(1));
        assert!(cache.is_fresh_at(just_inside));

        let just_outside = modified + FRESHNESS_TTL + Duration::from_secs(1);
        assert!(!cache.is_fresh_at(just_outside));
    }

    #[test]
    fn test_load_rejects_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        fs::write(&path, "{not json").unwrap();

        let cache = ReportCache::new(&path);
        assert!(cache.load().is_err());
    }

    #[test]
    fn test_load_rejects_missing_field() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        fs::write(&path, r#"{"timestamp": "2025-01-01T00:00:00Z"}"#).unwrap();

        let cache = ReportCache::new(&path);
        assert!(cache.load().is_err());
    }
}
