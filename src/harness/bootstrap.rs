use crate::infrastructure::environment::{APP_ENV_VAR, ApiMode, resolve_api_base_url};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, instrument};

pub const ARTIFACT_FILE: &str = "global-state.json";
pub const DEFAULT_ARTIFACT_DIR: &str = "target/e2e/artifacts";
pub const ARTIFACT_DIR_VAR: &str = "E2E_ARTIFACT_DIR";

const PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// Written once per e2e run so later test steps can consult the environment
/// the suite was set up against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupArtifact {
    #[serde(rename = "setupTime")]
    pub setup_time: String,
    #[serde(rename = "baseURL")]
    pub base_url: String,
    #[serde(rename = "testEnvironment")]
    pub test_environment: String,
}

/// One-shot setup run before an e2e suite: prepare the artifact directory,
/// probe the application under test, record the setup artifact. Any failure
/// aborts the whole run; there is no retry.
pub struct GlobalSetup {
    base_url: String,
    artifact_dir: PathBuf,
    environment: String,
}

impl GlobalSetup {
    pub fn new(
        base_url: impl Into<String>,
        artifact_dir: impl Into<PathBuf>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            artifact_dir: artifact_dir.into(),
            environment: environment.into(),
        }
    }

    pub fn from_env() -> Self {
        let mode = ApiMode::from_env();
        let base_url = resolve_api_base_url(mode);
        let artifact_dir = env::var(ARTIFACT_DIR_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ARTIFACT_DIR.to_string());
        let environment = env::var(APP_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "test".to_string());
        Self::new(base_url, artifact_dir, environment)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url, environment = %self.environment))]
    pub async fn run(&self) -> Result<SetupArtifact> {
        info!("Starting e2e setup");

        std::fs::create_dir_all(&self.artifact_dir).with_context(|| {
            format!(
                "creating artifact directory {}",
                self.artifact_dir.display()
            )
        })?;
        info!(dir = %self.artifact_dir.display(), "Artifact directory ready");

        self.probe_target().await?;

        let artifact = self.write_artifact()?;
        info!(path = %self.artifact_path().display(), "Setup artifact written");
        info!("E2E setup completed");
        Ok(artifact)
    }

    /// Confirms the application under test answers its health endpoint.
    /// Transport errors and non-success statuses are both fatal.
    pub async fn probe_target(&self) -> Result<()> {
        let url = format!("{}/api/health", self.base_url.trim_end_matches('/'));
        info!(url = %url, "Probing application under test");

        let client = reqwest::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .context("building probe client")?;

        let response = client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("application unreachable at {url}"))?;

        if !response.status().is_success() {
            bail!("health probe at {url} returned status {}", response.status());
        }

        info!("Application is running and reachable");
        Ok(())
    }

    pub fn write_artifact(&self) -> Result<SetupArtifact> {
        let artifact = SetupArtifact {
            setup_time: Utc::now().to_rfc3339(),
            base_url: self.base_url.clone(),
            test_environment: self.environment.clone(),
        };

        let path = self.artifact_path();
        let json = serde_json::to_string_pretty(&artifact).context("serializing setup artifact")?;
        std::fs::write(&path, json)
            .with_context(|| format!("writing setup artifact to {}", path.display()))?;

        Ok(artifact)
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.artifact_dir.join(ARTIFACT_FILE)
    }

    pub fn artifact_dir(&self) -> &Path {
        &self.artifact_dir
    }
}
