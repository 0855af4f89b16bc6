use clinic_mock_api::harness::bootstrap::GlobalSetup;
use clinic_mock_api::infrastructure::logging::init_logging;
use std::process::ExitCode;
use tracing::{error, info};

/// One-shot bootstrap run before an e2e suite. A non-zero exit aborts the
/// whole test run.
#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    init_logging();

    let setup = GlobalSetup::from_env();
    match setup.run().await {
        Ok(artifact) => {
            info!(
                base_url = %artifact.base_url,
                environment = %artifact.test_environment,
                "E2E setup succeeded"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "E2E setup failed, aborting test run");
            ExitCode::FAILURE
        }
    }
}
