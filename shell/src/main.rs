//! Terminal host for the todo list.
//!
//! Mounts the root view against the configured backend, draws the screen,
//! then reads one command per line from stdin until `quit` or EOF. Failed
//! actions are logged and the loop carries on.

use std::io::{self, BufRead, Write};

use clap::Parser;
use todo_core::{RootView, TodoClient, TodoStore};
use tracing_subscriber::EnvFilter;

use todo_shell::app::{Flow, Shell};
use todo_shell::command::Command;
use todo_shell::config::Args;
use todo_shell::render;
use todo_shell::transport::UreqTransport;

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    tracing::info!(api_url = %args.api_url, "starting todo shell");
    let store = TodoStore::new(TodoClient::new(&args.api_url), UreqTransport::new());
    let mut shell = Shell::new(RootView::new(store));
    if let Err(e) = shell.root().mount().await {
        tracing::warn!("initial load failed: {e}");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "{}", render::render(&shell.root().render()))?;
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "{e}")?;
                continue;
            }
        };
        match shell.execute(command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Print(text)) => writeln!(stdout, "{text}")?,
            Ok(Flow::Redraw) => {}
            Err(e) => tracing::warn!("action failed: {e}"),
        }
        write!(stdout, "{}", render::render(&shell.root().render()))?;
        stdout.flush()?;
    }
    Ok(())
}
