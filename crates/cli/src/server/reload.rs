use answer_dns_application::use_cases::ReloadAnswersUseCase;
use std::sync::Arc;
use tracing::{info, warn};

/// Reloads the answers file every time the process receives SIGHUP. A failed
/// reload is logged by the use case and the current generation keeps serving.
#[cfg(unix)]
pub fn spawn_reload_on_sighup(reload: Arc<ReloadAnswersUseCase>) -> anyhow::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangups = signal(SignalKind::hangup())?;

    tokio::spawn(async move {
        while hangups.recv().await.is_some() {
            info!("SIGHUP received, reloading answers");
            if let Err(e) = reload.execute().await {
                warn!(error = %e, "Answers reload failed");
            }
        }
    });

    Ok(())
}

#[cfg(not(unix))]
pub fn spawn_reload_on_sighup(_reload: Arc<ReloadAnswersUseCase>) -> anyhow::Result<()> {
    warn!("SIGHUP reload is only available on unix");
    Ok(())
}
