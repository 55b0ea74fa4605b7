mod cli;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_core::{ClientConfig, ItemView, RemoteClient, ReqwestTransport, ViewController};

use crate::cli::{Cli, Command};
use crate::error::{check, CliError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    // failures are reported through the log only; the exit code tells them apart
    if let Err(err) = run(cli).await {
        tracing::error!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::resolve(cli.global.api_url.as_deref())?;
    let mut controller = ViewController::new(RemoteClient::new(&config, ReqwestTransport::new()));
    tracing::debug!(
        base_url = controller.remote().base_url(),
        command = ?cli.command,
        "dispatching command"
    );

    if let Command::Show { id } = cli.command {
        let item = controller.remote().get_item(id).await?;
        println!("{}", output::render_row(&ItemView::from(item)));
        return Ok(());
    }

    check(controller.load().await)?;

    match cli.command {
        Command::List | Command::Show { .. } => {}
        Command::Add { text } => {
            check(controller.set_new_text(text))?;
            check(controller.add().await)?;
        }
        Command::Toggle { id } => check(controller.toggle(id).await)?,
        Command::Edit { id, text } => {
            check(controller.start_edit(id))?;
            check(controller.set_draft(text))?;
            check(controller.save_edit().await)?;
        }
        Command::Delete { id } => check(controller.delete(id).await)?,
    }

    print!("{}", output::render(&controller.view()));
    Ok(())
}
