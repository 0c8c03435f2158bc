use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use quake_core::CycleId;
use quake_logging::{quake_trace, quake_warn};

use crate::fetch::Fetcher;
use crate::parse::parse_feed;
use crate::sources::ConnectivityProbe;
use crate::{EngineEvent, FailureKind, FetchError};

enum EngineCommand {
    CheckConnectivity { cycle: CycleId },
    Fetch { cycle: CycleId, url: String },
    Parse { cycle: CycleId, body: String },
}

/// Handle to the background thread that runs blocking and network work.
///
/// Commands go in over one channel and results come back as [`EngineEvent`]s
/// on another; nothing here touches load state.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(fetcher: Arc<dyn Fetcher>, probe: Arc<dyn ConnectivityProbe>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("quake-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let probe = probe.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher, probe, command, event_tx).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    /// Returns false if the engine thread is gone.
    pub fn check_connectivity(&self, cycle: CycleId) -> bool {
        self.send(EngineCommand::CheckConnectivity { cycle })
    }

    pub fn fetch(&self, cycle: CycleId, url: impl Into<String>) -> bool {
        self.send(EngineCommand::Fetch {
            cycle,
            url: url.into(),
        })
    }

    pub fn parse(&self, cycle: CycleId, body: impl Into<String>) -> bool {
        self.send(EngineCommand::Parse {
            cycle,
            body: body.into(),
        })
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks for the next event; `None` on timeout or if the engine is gone.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) -> bool {
        self.cmd_tx.send(command).is_ok()
    }
}

async fn handle_command(
    fetcher: Arc<dyn Fetcher>,
    probe: Arc<dyn ConnectivityProbe>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::CheckConnectivity { cycle } => {
            quake_trace!("Cycle {} checking connectivity", cycle);
            let available = tokio::task::spawn_blocking(move || probe.is_network_available())
                .await
                .unwrap_or_else(|err| {
                    quake_warn!("Connectivity probe for cycle {} failed: {}", cycle, err);
                    false
                });
            EngineEvent::ConnectivityChecked { cycle, available }
        }
        EngineCommand::Fetch { cycle, url } => {
            quake_trace!("Cycle {} fetching {}", cycle, url);
            // A panicking fetcher must still end the cycle.
            let result = tokio::spawn(async move { fetcher.fetch(&url).await })
                .await
                .unwrap_or_else(|err| {
                    Err(FetchError::new(FailureKind::Network, err.to_string()))
                });
            if let Err(err) = &result {
                quake_warn!("Cycle {} fetch failed: {}", cycle, err);
            }
            EngineEvent::FetchCompleted { cycle, result }
        }
        EngineCommand::Parse { cycle, body } => {
            quake_trace!("Cycle {} parsing {} bytes", cycle, body.len());
            EngineEvent::ParseCompleted {
                cycle,
                result: parse_feed(&body),
            }
        }
    };
    let _ = event_tx.send(event);
}
