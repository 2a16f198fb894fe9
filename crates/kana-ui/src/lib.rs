use std::io::Write;

use kana_core::{AppEvent, Catalog};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

pub mod command;
pub mod events;
pub mod render;
pub mod state;

use command::{Command, HELP};
use events::{Flow, handle_event};
use state::UiState;

/// Console front end: reads commands from stdin, prints every render to stdout
pub async fn ui_loop(
    catalog: Catalog,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    run(catalog, input, &mut output, app_to_ui_rx, ui_to_app_tx).await
}

/// Drives the console until the backend echoes `Quit` or its channel closes.
///
/// Actions go through an unbounded outbox drained by a forwarder task, so a
/// full `ui_to_app` channel never stops this loop from draining renders.
pub async fn run<R, W>(
    catalog: Catalog,
    input: R,
    output: &mut W,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (outbox_tx, outbox_rx) = kanal::unbounded_async::<AppEvent>();
    let forwarder = tokio::spawn(forward(outbox_rx, ui_to_app_tx));

    let result = console(catalog, input, output, app_to_ui_rx, outbox_tx).await;
    forwarder.abort();
    result
}

async fn console<R, W>(
    catalog: Catalog,
    input: R,
    output: &mut W,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    outbox: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut state = UiState::new(catalog);
    let mut lines = input.lines();
    let mut reading = true;

    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::debug!("[UI] Backend channel closed");
                    break;
                };
                if handle_event(event, &mut state, output)? == Flow::Stop {
                    break;
                }
            }
            line = lines.next_line(), if reading => {
                let Some(line) = line? else {
                    tracing::debug!("[UI] Input closed");
                    outbox.send(AppEvent::Quit).await?;
                    reading = false;
                    continue;
                };

                match command::parse(&line, &state) {
                    Ok(None) => {}
                    Ok(Some(Command::Help)) => writeln!(output, "{HELP}")?,
                    Ok(Some(Command::Quit)) => {
                        outbox.send(AppEvent::Quit).await?;
                        reading = false;
                    }
                    Ok(Some(Command::Action(action))) => {
                        tracing::debug!("[UI] {:?}", action);
                        outbox.send(action.into()).await?;
                    }
                    Err(message) => writeln!(output, "{message}")?,
                }
                output.flush()?;
            }
        }
    }

    Ok(())
}

/// Moves queued input into the backend channel, in order
async fn forward(outbox: AsyncReceiver<AppEvent>, ui_to_app_tx: AsyncSender<AppEvent>) {
    while let Ok(event) = outbox.recv().await {
        if ui_to_app_tx.send(event).await.is_err() {
            tracing::debug!("[UI] Backend stopped listening");
            break;
        }
    }
}
