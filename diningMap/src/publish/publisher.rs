use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::config::constants::TIMESTAMP_FORMAT;
use crate::config::map_config::MapConfig;
use crate::publish::viewer::{SystemViewer, Viewer};
use crate::render::artifact::MapArtifact;
use crate::utils::logging::{self, OperationCategory, PublishType};

/// What happened when the file was handed to the viewer.
#[derive(Debug)]
pub enum ViewerOutcome {
    Opened,
    Skipped,
    Failed(anyhow::Error),
}

#[derive(Debug)]
pub struct PublishResult {
    pub path: PathBuf,
    pub viewer: ViewerOutcome,
}

/// Writes map pages to a timestamped file and opens them.
pub struct Publisher {
    output_dir: PathBuf,
    file_prefix: String,
    viewer: Option<Box<dyn Viewer>>,
}

impl Publisher {
    pub fn new(output_dir: impl AsRef<Path>, file_prefix: &str, viewer: Option<Box<dyn Viewer>>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            file_prefix: file_prefix.to_string(),
            viewer,
        }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        let viewer: Option<Box<dyn Viewer>> = if config.open_viewer {
            Some(Box::new(SystemViewer))
        } else {
            None
        };
        Self::new(&config.output_dir, &config.file_prefix, viewer)
    }

    pub fn publish(&self, artifact: &MapArtifact) -> Result<PublishResult> {
        self.publish_at(artifact, Local::now())
    }

    /// Write the artifact, then try to open it. Only the write can fail; a
    /// viewer failure is logged and reported in the result.
    #[tracing::instrument(skip(self, artifact), fields(dir = %self.output_dir.display()))]
    pub fn publish_at(&self, artifact: &MapArtifact, now: DateTime<Local>) -> Result<PublishResult> {
        {
            let _timing = logging::start_timing(
                "create_output_dir",
                OperationCategory::Publish { subcategory: PublishType::DirectoryCreate },
            );
            fs::create_dir_all(&self.output_dir).with_context(|| {
                format!("failed to create output directory {}", self.output_dir.display())
            })?;
        }

        let dir = std::path::absolute(&self.output_dir).with_context(|| {
            format!("failed to resolve output directory {}", self.output_dir.display())
        })?;
        let path = dir.join(artifact_filename(&self.file_prefix, now));

        {
            let _timing = logging::start_timing(
                "write_artifact",
                OperationCategory::Publish { subcategory: PublishType::FileWrite },
            );
            fs::write(&path, artifact.to_html())
                .with_context(|| format!("failed to write map to {}", path.display()))?;
        }
        info!(path = %path.display(), "map saved");

        let viewer = match &self.viewer {
            None => ViewerOutcome::Skipped,
            Some(viewer) => {
                let _timing = logging::start_timing(
                    "launch_viewer",
                    OperationCategory::Publish { subcategory: PublishType::ViewerLaunch },
                );
                match viewer.open(&path) {
                    Ok(()) => ViewerOutcome::Opened,
                    Err(err) => {
                        warn!(path = %path.display(), "could not open viewer: {:#}", err);
                        ViewerOutcome::Failed(err)
                    }
                }
            }
        };

        Ok(PublishResult { path, viewer })
    }
}

/// `<prefix>_<YYYYMMDD_HHMMSS>.html`. Second granularity: two publishes within
/// the same second resolve to the same file and the later one overwrites the
/// earlier.
pub fn artifact_filename(prefix: &str, now: DateTime<Local>) -> String {
    format!("{}_{}.html", prefix, now.format(TIMESTAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::registry::LocationRegistry;
    use crate::publish::viewer::file_url;
    use crate::render::builder::build;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FailingViewer;

    impl Viewer for FailingViewer {
        fn open(&self, _path: &Path) -> Result<()> {
            anyhow::bail!("no display")
        }
    }

    struct RecordingViewer(Rc<RefCell<Vec<PathBuf>>>);

    impl Viewer for RecordingViewer {
        fn open(&self, path: &Path) -> Result<()> {
            self.0.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    fn artifact() -> MapArtifact {
        let registry = LocationRegistry::vt_dining_halls().unwrap();
        build(&registry, &MapConfig::default())
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 9, 14, 8, 5, 3).unwrap()
    }

    #[test]
    fn test_filename_pattern() {
        assert_eq!(
            artifact_filename("VT_Dining_Halls", fixed_time()),
            "VT_Dining_Halls_20250914_080503.html"
        );
    }

    #[test]
    fn test_publish_creates_missing_directory_and_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("nested").join("maps");
        let publisher = Publisher::new(&out, "VT_Dining_Halls", None);

        let result = publisher.publish_at(&artifact(), fixed_time()).unwrap();

        assert!(result.path.is_absolute());
        assert!(!result.path.to_string_lossy().starts_with(r"\\?\"));
        assert!(!file_url(&result.path).starts_with("file:////"));
        assert!(result.path.ends_with("VT_Dining_Halls_20250914_080503.html"));
        assert!(matches!(result.viewer, ViewerOutcome::Skipped));
        let written = fs::read_to_string(&result.path).unwrap();
        assert!(written.contains("Dietrick Hall (D2)"));
    }

    #[test]
    fn test_directory_creation_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let publisher = Publisher::new(tmp.path(), "map", None);
        let later = fixed_time() + chrono::Duration::seconds(1);

        let first = publisher.publish_at(&artifact(), fixed_time()).unwrap();
        let second = publisher.publish_at(&artifact(), later).unwrap();

        assert_ne!(first.path, second.path);
        assert!(first.path.exists() && second.path.exists());
    }

    #[test]
    fn test_same_second_publishes_collide() {
        let tmp = tempfile::tempdir().unwrap();
        let publisher = Publisher::new(tmp.path(), "map", None);

        let first = publisher.publish_at(&artifact(), fixed_time()).unwrap();
        let second = publisher.publish_at(&artifact(), fixed_time()).unwrap();

        assert_eq!(first.path, second.path);
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_viewer_failure_is_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let publisher = Publisher::new(tmp.path(), "map", Some(Box::new(FailingViewer)));

        let result = publisher.publish_at(&artifact(), fixed_time()).unwrap();

        assert!(result.path.exists());
        match result.viewer {
            ViewerOutcome::Failed(err) => assert!(err.to_string().contains("no display")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_viewer_receives_written_path() {
        let tmp = tempfile::tempdir().unwrap();
        let opened = Rc::new(RefCell::new(Vec::new()));
        let publisher = Publisher::new(
            tmp.path(),
            "map",
            Some(Box::new(RecordingViewer(Rc::clone(&opened)))),
        );

        let result = publisher.publish_at(&artifact(), fixed_time()).unwrap();

        assert!(matches!(result.viewer, ViewerOutcome::Opened));
        assert_eq!(opened.borrow().as_slice(), &[result.path.clone()]);
    }

    #[test]
    fn test_write_failure_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();
        let publisher = Publisher::new(&blocker, "map", None);

        assert!(publisher.publish_at(&artifact(), fixed_time()).is_err());
    }
}
