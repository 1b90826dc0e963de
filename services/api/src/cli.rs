use crate::demo::{run_demo, run_diagnose, DemoArgs, DiagnoseArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mind_os::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "MindOS Diagnosis Service",
    about = "Run and demonstrate the MindOS diagnosis scoring service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a wizard CSV export offline and render the result
    Diagnose(DiagnoseArgs),
    /// Run an end-to-end CLI demo over a synthetic answer sheet
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Diagnose(args) => run_diagnose(args),
        Command::Demo(args) => run_demo(args),
    }
}
