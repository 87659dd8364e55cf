//! Archive redistribution for lifeform sprite frames.
//!
//! Converts a flat directory of per-organism archives, each named
//! `<class>-<stage>.zip` and holding frames `0.png, 1.png, ...`, into the
//! sprite tree layout `<class>/species_<variant>/<pair_index>.png`.
//!
//! Per archive the redistributor:
//! 1. Parses the class and stage from the file name
//! 2. Lists the archive and validates every frame name and index
//! 3. Extracts into a fresh scratch directory
//! 4. Moves each frame to its variant directory
//! 5. Removes the scratch directory
//!
//! Malformed names are skipped. Any other per-archive error rejects that
//! archive and is recorded in the [`RedistributeReport`]; the remaining
//! archives are still processed.

mod error;
mod extractor;
mod placement;
mod scratch;
mod stage;

pub use error::{RedistributeError, RedistributeResult};
pub use extractor::{ArchiveExtractor, ZipExtractor};
pub use placement::{contiguity_gap, FramePlacement};
pub use scratch::ScratchDir;
pub use stage::{ArchiveName, LifeStage, VARIANTS_PER_STAGE};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

/// Default scratch directory name, created inside the output directory.
pub const DEFAULT_SCRATCH_NAME: &str = "__tmp";

/// Extension of frame archives.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Extension of frame images.
pub const FRAME_EXTENSION: &str = "png";

/// Result of redistributing one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOutcome {
    /// Path of the archive.
    pub archive: PathBuf,

    /// Parsed class and stage.
    pub name: ArchiveName,

    /// Number of frames moved into the output tree.
    pub frames_moved: usize,
}

/// An archive that was rejected.
#[derive(Debug)]
pub struct ArchiveFailure {
    /// Path of the archive.
    pub archive: PathBuf,

    /// Why it was rejected.
    pub error: RedistributeError,
}

/// Summary of a redistribution run.
#[derive(Debug, Default)]
pub struct RedistributeReport {
    /// Archives that were redistributed.
    pub processed: Vec<ArchiveOutcome>,

    /// Archives skipped because of a malformed name.
    pub skipped: Vec<PathBuf>,

    /// Archives rejected with an error.
    pub failures: Vec<ArchiveFailure>,
}

impl RedistributeReport {
    /// Total frames moved across all archives.
    pub fn frames_moved(&self) -> usize {
        self.processed.iter().map(|o| o.frames_moved).sum()
    }

    /// Whether any archive was rejected.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// A frame scheduled to be moved.
#[derive(Debug)]
struct PlannedFrame {
    entry: String,
    index: u32,
}

/// Redistributes frame archives into the sprite tree.
#[derive(Debug)]
pub struct Redistributor<X = ZipExtractor> {
    archive_dir: PathBuf,
    output_dir: PathBuf,
    scratch_name: String,
    extractor: X,
}

impl Redistributor<ZipExtractor> {
    /// Create a redistributor reading zip archives from `archive_dir`.
    pub fn new(archive_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            archive_dir: archive_dir.into(),
            output_dir: output_dir.into(),
            scratch_name: DEFAULT_SCRATCH_NAME.to_string(),
            extractor: ZipExtractor::new(),
        }
    }
}

impl<X: ArchiveExtractor> Redistributor<X> {
    /// Use a different scratch directory name inside the output directory.
    pub fn with_scratch_name(mut self, name: impl Into<String>) -> Self {
        self.scratch_name = name.into();
        self
    }

    /// Use a different archive extractor.
    pub fn with_extractor<Y: ArchiveExtractor>(self, extractor: Y) -> Redistributor<Y> {
        Redistributor {
            archive_dir: self.archive_dir,
            output_dir: self.output_dir,
            scratch_name: self.scratch_name,
            extractor,
        }
    }

    /// Path of the scratch directory.
    pub fn scratch_path(&self) -> PathBuf {
        self.output_dir.join(&self.scratch_name)
    }

    /// Redistribute every archive in the archive directory.
    ///
    /// # Errors
    ///
    /// Only failures that affect the whole run are returned: the output
    /// directory cannot be created or the archive directory cannot be read.
    /// Per-archive problems are recorded in the report.
    pub fn run(&self) -> RedistributeResult<RedistributeReport> {
        fs::create_dir_all(&self.output_dir).map_err(|e| RedistributeError::CreateDirFailed {
            path: self.output_dir.clone(),
            source: e,
        })?;

        let mut report = RedistributeReport::default();

        for archive in self.archives()? {
            match self.process_archive(&archive) {
                Ok(outcome) => {
                    info!(
                        archive = %archive.display(),
                        class = %outcome.name.class,
                        stage = %outcome.name.stage,
                        frames = outcome.frames_moved,
                        "Archive redistributed"
                    );
                    report.processed.push(outcome);
                }
                Err(RedistributeError::MalformedName(name)) => {
                    warn!(archive = %archive.display(), "Skipping malformed filename: {}", name);
                    report.skipped.push(archive);
                }
                Err(error) => {
                    warn!(archive = %archive.display(), error = %error, "Archive rejected");
                    report.failures.push(ArchiveFailure { archive, error });
                }
            }
        }

        Ok(report)
    }

    /// Archives in the archive directory, sorted by path.
    fn archives(&self) -> RedistributeResult<Vec<PathBuf>> {
        let read_failed = |e| RedistributeError::ReadFailed {
            path: self.archive_dir.clone(),
            source: e,
        };

        let mut archives = Vec::new();
        for entry in fs::read_dir(&self.archive_dir).map_err(read_failed)? {
            let path = entry.map_err(read_failed)?.path();
            let is_archive = path
                .extension()
                .is_some_and(|ext| ext == ARCHIVE_EXTENSION);
            if is_archive && path.is_file() {
                archives.push(path);
            }
        }
        archives.sort();
        Ok(archives)
    }

    /// Redistribute a single archive.
    pub fn process_archive(&self, archive: &Path) -> RedistributeResult<ArchiveOutcome> {
        let stem = archive
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| RedistributeError::MalformedName(archive.display().to_string()))?;
        let name = ArchiveName::parse(stem)?;

        let frames = self.plan_frames(archive, name.stage)?;

        let scratch = ScratchDir::create(self.scratch_path())?;
        let extracted = self.extractor.extract(archive, scratch.path())?;
        debug!(archive = %archive.display(), files = extracted, "Extracted archive");

        for frame in &frames {
            let placement = FramePlacement::for_frame(frame.index, name.stage);
            let source = scratch.path().join(&frame.entry);
            let dest = self.output_dir.join(placement.relative_path(&name.class));
            move_frame(&source, &dest)?;
            debug!(
                frame = frame.index,
                variant = placement.variant,
                pair = placement.pair_index,
                "Moved frame"
            );
        }

        Ok(ArchiveOutcome {
            archive: archive.to_path_buf(),
            name,
            frames_moved: frames.len(),
        })
    }

    /// Validate the archive's frames before anything is extracted.
    fn plan_frames(&self, archive: &Path, stage: LifeStage) -> RedistributeResult<Vec<PlannedFrame>> {
        let mut frames = Vec::new();

        for entry in self.extractor.list_contents(archive)? {
            if entry.contains('/') {
                continue;
            }
            let Some(stem) = entry
                .strip_suffix(FRAME_EXTENSION)
                .and_then(|rest| rest.strip_suffix('.'))
            else {
                continue;
            };

            let index = parse_frame_index(stem).ok_or_else(|| {
                RedistributeError::InvalidFrameName {
                    archive: archive.to_path_buf(),
                    name: entry.clone(),
                }
            })?;
            frames.push(PlannedFrame { entry, index });
        }

        frames.sort_by_key(|frame| frame.index);

        if let Some(pair) = frames.windows(2).find(|pair| pair[0].index == pair[1].index) {
            return Err(RedistributeError::DuplicateFrame {
                archive: archive.to_path_buf(),
                index: pair[0].index,
            });
        }

        let indices: Vec<u32> = frames.iter().map(|f| f.index).collect();
        if let Some(gap) = contiguity_gap(&indices) {
            warn!(archive = %archive.display(), "Frames are not contiguous: {}", gap);
        }
        for &index in &indices {
            if !FramePlacement::for_frame(index, stage).within_stage(stage) {
                warn!(
                    archive = %archive.display(),
                    frame = index,
                    "Frame falls outside the {} variant block",
                    stage
                );
            }
        }

        Ok(frames)
    }
}

/// Parse a frame stem of ASCII digits.
fn parse_frame_index(stem: &str) -> Option<u32> {
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

/// Move a frame into place, creating directories as needed.
///
/// Falls back to copy and remove when a rename is not possible.
fn move_frame(source: &Path, dest: &Path) -> RedistributeResult<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| RedistributeError::CreateDirFailed {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    if fs::rename(source, dest).is_ok() {
        return Ok(());
    }

    let move_failed = |e| RedistributeError::MoveFailed {
        from: source.to_path_buf(),
        to: dest.to_path_buf(),
        source: e,
    };
    fs::copy(source, dest).map_err(move_failed)?;
    fs::remove_file(source).map_err(move_failed)?;
    Ok(())
}
