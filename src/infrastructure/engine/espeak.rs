use super::{EngineError, SpeechSynthesizer};
use crate::domain::tts::InvocationPlan;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use uuid::Uuid;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Speech synthesizer backed by the espeak-ng command-line program.
///
/// Each synthesis writes to a unique artifact path inside `work_dir` and the
/// artifact never outlives the call.
pub struct EspeakSynthesizer {
    binary: String,
    work_dir: PathBuf,
    synthesis_timeout: Duration,
}

impl EspeakSynthesizer {
    pub fn new(binary: String, work_dir: PathBuf, synthesis_timeout: Duration) -> Self {
        Self {
            binary,
            work_dir,
            synthesis_timeout,
        }
    }

    fn artifact_path(&self) -> PathBuf {
        self.work_dir.join(format!("speech-{}.wav", Uuid::new_v4()))
    }

    fn build_command(&self, plan: &InvocationPlan, artifact: &Path) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .arg("-w")
            .arg(artifact)
            .arg("-v")
            .arg(plan.voice)
            .arg("-p")
            .arg(plan.pitch.to_string())
            .arg("-s")
            .arg(plan.speed.to_string())
            .arg("-a")
            .arg(plan.volume.to_string())
            .arg("-g")
            .arg(plan.gap.to_string())
            .arg("--punct=none")
            .arg(&plan.text);
        // If the synthesize future is dropped mid-flight, don't leave the
        // child running against an artifact we are about to delete.
        command.kill_on_drop(true);
        command
    }
}

#[async_trait]
impl SpeechSynthesizer for EspeakSynthesizer {
    async fn synthesize(&self, plan: &InvocationPlan) -> Result<Vec<u8>, EngineError> {
        // Guard owns the artifact; removal fires on every exit path below
        let artifact = ArtifactGuard::new(self.artifact_path());

        let mut command = self.build_command(plan, artifact.path());

        let output = match timeout(self.synthesis_timeout, command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(err)) if err.kind() == io::ErrorKind::NotFound => {
                return Err(EngineError::NotFound(self.binary.clone()));
            }
            Ok(Err(err)) => return Err(EngineError::Io(err)),
            Err(_) => {
                tracing::warn!(
                    binary = %self.binary,
                    timeout_secs = self.synthesis_timeout.as_secs(),
                    "synthesizer timed out, killing child"
                );
                return Err(EngineError::TimedOut(self.synthesis_timeout));
            }
        };

        if !output.status.success() {
            return Err(EngineError::Failed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        match tokio::fs::read(artifact.path()).await {
            Ok(audio) => Ok(audio),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(EngineError::MissingOutput(artifact.path().to_path_buf()))
            }
            Err(err) => Err(EngineError::Io(err)),
        }
    }

    async fn probe(&self) -> bool {
        let version = timeout(
            PROBE_TIMEOUT,
            Command::new(&self.binary).arg("--version").output(),
        )
        .await;

        matches!(version, Ok(Ok(output)) if output.status.success())
    }
}

/// Scoped ownership of one audio artifact: the file is removed when the
/// guard is dropped, regardless of which branch produced the drop.
struct ArtifactGuard {
    path: PathBuf,
}

impl ArtifactGuard {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ArtifactGuard {
    fn drop(&mut self) {
        // Best-effort: a missing file is the common case on failure paths
        let _ = std::fs::remove_file(&self.path);
    }
}
