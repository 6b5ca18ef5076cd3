//! Interactive explorer
//!
//! Runs the point query session and the regional poller side by side and
//! renders their state whenever it changes. Input is read line by line from
//! stdin; see [`HELP`] for the accepted commands.

use std::future::Future;
use std::sync::Arc;

use application::{
    AlertPanel, PointQueryService, PointQuerySession, PopupView, RegionalAlertPoller,
    WeatherBackendPort,
};
use domain::{Coordinate, find_city};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};

use crate::render::{render_panel, render_popup};

pub const HELP: &str = "\
Commands:
  <lat> <lon>   query a point (comma or space separated)
  <city>        query a major city by name
  r             refresh regional alerts now
  t             expand/collapse the alert panel
  p             show the alert panel
  h             show this help
  q             quit";

/// One line of explorer input
#[derive(Debug, Clone, PartialEq)]
pub enum ExploreCommand {
    /// Click at a coordinate
    Click(Coordinate),
    /// Manual regional refresh
    Refresh,
    /// Expand/collapse the panel
    Toggle,
    /// Print the panel
    Panel,
    /// Print help
    Help,
    /// Leave the explorer
    Quit,
    /// Blank line
    Empty,
    /// Anything unrecognized
    Unknown(String),
}

/// Parse one line of input
pub fn parse_command(line: &str) -> ExploreCommand {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return ExploreCommand::Empty,
        "r" | "refresh" => return ExploreCommand::Refresh,
        "t" | "toggle" => return ExploreCommand::Toggle,
        "p" | "panel" => return ExploreCommand::Panel,
        "h" | "help" | "?" => return ExploreCommand::Help,
        "q" | "quit" | "exit" => return ExploreCommand::Quit,
        _ => {},
    }

    if let Some(coordinate) = parse_coordinate(line) {
        return ExploreCommand::Click(coordinate);
    }

    find_city(line).map_or_else(
        |_| ExploreCommand::Unknown(line.to_string()),
        |city| ExploreCommand::Click(city.coordinate),
    )
}

fn parse_coordinate(line: &str) -> Option<Coordinate> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let latitude = parts.next()?.parse::<f64>().ok()?;
    let longitude = parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coordinate::new(latitude, longitude))
}

/// Run the explorer on stdin until `q`, end of input or Ctrl+C
pub async fn run(
    backend: Arc<dyn WeatherBackendPort>,
    poller: RegionalAlertPoller,
) -> anyhow::Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    run_with(backend, poller, input, interrupted()).await
}

/// Resolves on Ctrl+C; never resolves if the handler cannot be installed
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}

/// Explorer loop over an arbitrary line source
///
/// `shutdown` is polled across every iteration, so a signal that arrives
/// while another branch is being handled is still observed.
async fn run_with<R, S>(
    backend: Arc<dyn WeatherBackendPort>,
    poller: RegionalAlertPoller,
    input: R,
    shutdown: S,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    S: Future<Output = ()>,
{
    let session = PointQuerySession::new(PointQueryService::new(backend));
    let mut point_updates = session.subscribe();

    let polling = poller.start();
    let mut regional_updates = polling.subscribe();
    let mut panel = AlertPanel::new();

    let mut lines = input.lines();
    tokio::pin!(shutdown);

    println!("{HELP}\n");
    info!("Explorer started");

    let outcome = loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break Ok(()),
                    Err(e) => break Err(anyhow::Error::from(e)),
                };

                match parse_command(&line) {
                    ExploreCommand::Click(coordinate) => {
                        if !coordinate.is_valid() {
                            warn!(coordinate = %coordinate, "Coordinate out of range, querying anyway");
                        }
                        let generation = session.click(coordinate);
                        debug!(generation, "Click registered");
                    },
                    ExploreCommand::Refresh => polling.refresh_now(),
                    ExploreCommand::Toggle => {
                        panel.toggle();
                        println!("{}", render_panel(&panel.view(&polling.state())));
                    },
                    ExploreCommand::Panel => {
                        println!("{}", render_panel(&panel.view(&polling.state())));
                    },
                    ExploreCommand::Help => println!("{HELP}"),
                    ExploreCommand::Quit => break Ok(()),
                    ExploreCommand::Empty => {},
                    ExploreCommand::Unknown(input) => {
                        println!("Unrecognized input '{input}', type h for help");
                    },
                }
            },
            changed = point_updates.changed() => {
                if changed.is_err() {
                    break Ok(());
                }
                let state = point_updates.borrow_and_update().clone();
                if let Some(popup) = PopupView::from_state(&state) {
                    println!("{}", render_popup(&popup));
                }
            },
            changed = regional_updates.changed() => {
                if changed.is_err() {
                    warn!("Regional polling ended unexpectedly");
                    break Ok(());
                }
                let state = regional_updates.borrow_and_update().clone();
                println!("{}", render_panel(&panel.view(&state)));
            },
            () = &mut shutdown => {
                info!("Interrupted");
                break Ok(());
            },
        }
    };

    polling.stop().await;
    info!("Explorer stopped");
    outcome
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use application::ApplicationError;
    use async_trait::async_trait;
    use domain::{Alert, ConditionsSnapshot};
    use tokio::io::AsyncWriteExt;
    use tokio::sync::oneshot;

    use super::*;

    struct QuietBackend;

    #[async_trait]
    impl WeatherBackendPort for QuietBackend {
        async fn get_conditions(
            &self,
            _coordinate: &Coordinate,
        ) -> Result<ConditionsSnapshot, ApplicationError> {
            Ok(ConditionsSnapshot::new(-5.0, "Snow"))
        }

        async fn get_point_alerts(
            &self,
            _coordinate: &Coordinate,
        ) -> Result<Vec<Alert>, ApplicationError> {
            Ok(Vec::new())
        }

        async fn get_regional_alerts(&self) -> Result<Vec<Alert>, ApplicationError> {
            Ok(Vec::new())
        }

        async fn is_available(&self) -> bool {
            true
        }
    }

    fn explorer_parts() -> (Arc<dyn WeatherBackendPort>, RegionalAlertPoller) {
        let backend: Arc<dyn WeatherBackendPort> = Arc::new(QuietBackend);
        let poller = RegionalAlertPoller::new(Arc::clone(&backend));
        (backend, poller)
    }

    // ============================================================================
    // Loop termination
    // ============================================================================

    #[tokio::test]
    async fn quit_command_ends_loop() {
        let (backend, poller) = explorer_parts();
        let input = BufReader::new(&b"h\np\nq\n"[..]);

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            run_with(backend, poller, input, std::future::pending()),
        )
        .await
        .expect("explorer should stop on q");

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn end_of_input_ends_loop() {
        let (backend, poller) = explorer_parts();
        let input = BufReader::new(&b"45.5017 -73.5673\n"[..]);

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            run_with(backend, poller, input, std::future::pending()),
        )
        .await
        .expect("explorer should stop at end of input");

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn shutdown_during_busy_input_is_not_lost() {
        let (backend, poller) = explorer_parts();
        let (mut writer, reader) = tokio::io::duplex(1024);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let shutdown = async {
            let _ = shutdown_rx.await;
        };

        let explorer = tokio::spawn(run_with(backend, poller, BufReader::new(reader), shutdown));

        writer.write_all(b"p\nr\nt\nWinnipeg\n").await.unwrap();
        shutdown_tx.send(()).unwrap();

        let result = tokio::time::timeout(Duration::from_secs(5), explorer)
            .await
            .expect("explorer should observe the shutdown signal")
            .unwrap();

        assert!(result.is_ok());
        // Input stays open, so only the shutdown future could have ended the loop
        drop(writer);
    }

    // ============================================================================
    // Command parsing
    // ============================================================================

    #[test]
    fn parses_space_and_comma_separated_coordinates() {
        assert_eq!(
            parse_command("45.5017 -73.5673"),
            ExploreCommand::Click(Coordinate::new(45.5017, -73.5673))
        );
        assert_eq!(
            parse_command(" 49.2827, -123.1207 "),
            ExploreCommand::Click(Coordinate::new(49.2827, -123.1207))
        );
    }

    #[test]
    fn out_of_range_coordinates_pass_through() {
        assert_eq!(
            parse_command("95 200"),
            ExploreCommand::Click(Coordinate::new(95.0, 200.0))
        );
    }

    #[test]
    fn parses_city_names() {
        assert_eq!(
            parse_command("quebec city"),
            ExploreCommand::Click(Coordinate::new(46.8139, -71.2080))
        );
    }

    #[test]
    fn parses_single_letter_commands() {
        assert_eq!(parse_command("r"), ExploreCommand::Refresh);
        assert_eq!(parse_command("T"), ExploreCommand::Toggle);
        assert_eq!(parse_command("p"), ExploreCommand::Panel);
        assert_eq!(parse_command("q"), ExploreCommand::Quit);
        assert_eq!(parse_command("   "), ExploreCommand::Empty);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_command("1 2 3"),
            ExploreCommand::Unknown("1 2 3".to_string())
        );
        assert_eq!(
            parse_command("Atlantis"),
            ExploreCommand::Unknown("Atlantis".to_string())
        );
    }
}
