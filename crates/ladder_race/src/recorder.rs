//! File-backed result recorder.

use derive_new::new;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use strictly_ladders::{RecordError, ResultRecorder, Standing};
use tracing::{info, instrument};

/// Writes final standings to a text file, one `Player N: pos` line per player.
///
/// The file is replaced on every call.
#[derive(Debug, Clone, new)]
pub struct FileRecorder {
    path: PathBuf,
}

impl FileRecorder {
    /// Target file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the recorded lines back.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read_back(&self) -> Result<Vec<String>, RecordError> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(content.lines().map(str::to_owned).collect())
    }
}

impl ResultRecorder for FileRecorder {
    #[instrument(
        skip(self, standings),
        fields(path = %self.path.display(), players = standings.len())
    )]
    fn record(&mut self, standings: &[Standing]) -> Result<(), RecordError> {
        let mut out = BufWriter::new(File::create(&self.path)?);
        for standing in standings {
            writeln!(out, "{}", standing)?;
        }
        out.flush()?;
        info!("Standings written");
        Ok(())
    }
}
