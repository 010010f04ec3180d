//=========================================================================
// Score Book
//=========================================================================
//
// Cumulative points per drill, kept in a flat JSON object:
//
// ```json
// {"earthquake": 160, "flood": 240}
// ```
//
// Each success reads the whole file, adds to one total and writes the
// whole file back. A missing file counts as no scores yet. Only one
// process writes at a time (the drill that just succeeded).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::error::{DrillError, DrillResult};

/// Environment variable overriding the score file location.
pub const SCORE_FILE_ENV: &str = "DRILL_SCORE_FILE";

/// Score file used when the environment does not name one.
pub const DEFAULT_SCORE_FILE: &str = "scores.json";

/// Totals keyed by drill name.
pub type ScoreTotals = BTreeMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBook {
    path: PathBuf,
}

impl ScoreBook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$DRILL_SCORE_FILE`, or `scores.json` in the working directory.
    pub fn from_env() -> Self {
        let path = std::env::var_os(SCORE_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORE_FILE));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every recorded total. Empty when the file does not exist yet.
    pub fn totals(&self) -> DrillResult<ScoreTotals> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No score file at {}, starting empty", self.path.display());
                return Ok(ScoreTotals::new());
            }
            Err(e) => return Err(DrillError::io(&self.path, e)),
        };

        serde_json::from_str(&text).map_err(|e| DrillError::json(&self.path, e))
    }

    /// Total for one drill (0 if it has never been completed).
    pub fn total(&self, drill: &str) -> DrillResult<u64> {
        Ok(self.totals()?.get(drill).copied().unwrap_or(0))
    }

    /// Adds `points` to `drill`'s total and returns the new total.
    pub fn record(&self, drill: &str, points: u64) -> DrillResult<u64> {
        let mut totals = self.totals()?;
        let total = totals.entry(drill.to_string()).or_insert(0);
        *total = total.saturating_add(points);
        let total = *total;

        let text = serde_json::to_string_pretty(&totals)
            .map_err(|e| DrillError::json(&self.path, e))?;
        std::fs::write(&self.path, text).map_err(|e| DrillError::io(&self.path, e))?;

        info!("Recorded {} points for {} (total {})", points, drill, total);
        Ok(total)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
