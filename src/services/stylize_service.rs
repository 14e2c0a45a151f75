use crate::error::{ExportError, ServiceError};
use crate::models::{ExportFormat, RenderConfig};
use crate::rendering::{export, load_bitmap};
use neon_stylize::{transform, Bitmap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One input image and where its stylized result goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylizeJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Result of one job in a batch
#[derive(Debug)]
pub struct JobOutcome {
    pub job: StylizeJob,
    /// Bytes written on success
    pub result: Result<usize, ServiceError>,
}

/// Decode, stylize and export images with one fixed configuration
///
/// Cheap to clone; clones share the configuration.
#[derive(Debug, Clone)]
pub struct StylizeService {
    config: Arc<RenderConfig>,
}

impl StylizeService {
    /// Fails early if the settings are out of range
    pub fn new(config: RenderConfig) -> Result<Self, ServiceError> {
        config.settings.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn format(&self) -> ExportFormat {
        self.config.format()
    }

    /// `<out_dir>/<stem>-<style>.<ext>`
    pub fn output_path(&self, input: &Path, out_dir: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        out_dir.join(format!(
            "{stem}-{}.{}",
            self.config.settings.style,
            self.format().extension()
        ))
    }

    /// Build one job per input, all writing into `out_dir`
    pub fn jobs_for(&self, inputs: &[PathBuf], out_dir: &Path) -> Vec<StylizeJob> {
        inputs
            .iter()
            .map(|input| StylizeJob {
                input: input.clone(),
                output: self.output_path(input, out_dir),
            })
            .collect()
    }

    /// Stylize a bitmap and encode it in the configured format
    pub fn render_bytes(&self, bitmap: &Bitmap) -> Result<Vec<u8>, ServiceError> {
        let config = &self.config;
        let rendered = transform(bitmap, &config.settings)?;
        Ok(export(
            &rendered,
            &config.settings,
            config.format(),
            &config.export,
        )?)
    }

    /// Render `input` into `output`
    ///
    /// The result goes to a sibling temp file that is renamed over `output`
    /// once complete, so any failure leaves a previous result in place.
    pub fn render_file(&self, input: &Path, output: &Path) -> Result<usize, ServiceError> {
        let bitmap = load_bitmap(input)?;
        let bytes = self.render_bytes(&bitmap)?;
        replace_file(output, &bytes).map_err(ExportError::from)?;
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            bytes = bytes.len(),
            "Rendered"
        );
        Ok(bytes.len())
    }

    /// Render one job on the blocking thread pool
    pub async fn render_job(&self, job: StylizeJob) -> JobOutcome {
        let service = self.clone();
        let task_job = job.clone();
        let result =
            tokio::task::spawn_blocking(move || service.render_file(&task_job.input, &task_job.output))
                .await
                .unwrap_or_else(|e| Err(ServiceError::Task(e.to_string())));
        if let Err(e) = &result {
            tracing::warn!(input = %job.input.display(), %e, "Render failed");
        }
        JobOutcome { job, result }
    }

    /// Render all jobs concurrently, one blocking task each
    ///
    /// Outcomes are returned in job order; a failing job does not stop
    /// the others.
    pub async fn render_batch(&self, jobs: Vec<StylizeJob>) -> Vec<JobOutcome> {
        let handles: Vec<_> = jobs
            .into_iter()
            .map(|job| {
                let service = self.clone();
                let task_job = job.clone();
                (job, tokio::spawn(async move { service.render_job(task_job).await }))
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for (job, handle) in handles {
            outcomes.push(joined_outcome(job, handle.await));
        }
        outcomes
    }
}

/// Outcome of a joined batch task; a task that died still yields one
fn joined_outcome(
    job: StylizeJob,
    joined: Result<JobOutcome, tokio::task::JoinError>,
) -> JobOutcome {
    joined.unwrap_or_else(|e| {
        tracing::error!(input = %job.input.display(), %e, "Render task panicked");
        JobOutcome {
            job,
            result: Err(ServiceError::Task(e.to_string())),
        }
    })
}

/// Write `bytes` next to `path`, then rename over it
fn replace_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{name}.tmp"));
    let written = std::fs::write(&tmp, bytes).and_then(|()| std::fs::rename(&tmp, path));
    if written.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use neon_stylize::Style;

    #[test]
    fn test_invalid_settings_rejected_at_construction() {
        let mut config = RenderConfig::default();
        config.settings.blur = 42.0;
        assert!(matches!(
            StylizeService::new(config),
            Err(ServiceError::Stylize(_))
        ));
    }

    #[test]
    fn test_output_path() {
        let mut config = RenderConfig::default();
        config.set_style(Style::Ascii);
        let service = StylizeService::new(config).unwrap();
        assert_eq!(
            service.output_path(Path::new("/in/cat.photo.png"), Path::new("/out")),
            PathBuf::from("/out/cat.photo-ascii.txt")
        );
    }

    #[tokio::test]
    async fn test_panicked_task_keeps_its_slot() {
        let job = StylizeJob {
            input: PathBuf::from("a.png"),
            output: PathBuf::from("a-out.png"),
        };
        let joined: Result<JobOutcome, _> = tokio::spawn(async { panic!("renderer died") }).await;
        let outcome = joined_outcome(job.clone(), joined);
        assert_eq!(outcome.job, job);
        assert!(matches!(outcome.result, Err(ServiceError::Task(_))));
    }

    #[test]
    fn test_replace_file_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"old").unwrap();
        replace_file(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_write_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in the temp file's place makes the write fail
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"old").unwrap();
        std::fs::create_dir(dir.path().join(".out.png.tmp")).unwrap();
        assert!(replace_file(&path, b"new").is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"old");
    }

    #[test]
    fn test_render_bytes_png() {
        let service = StylizeService::new(RenderConfig::default()).unwrap();
        let bytes = service
            .render_bytes(&Bitmap::filled(4, 4, [255, 255, 255, 255]))
            .unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
