use crate::commands::{run_add, run_classify, run_report, AddArgs, ClassifyArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use deadline_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "deadline-desk-api",
    about = "Track regulatory submission deadlines from the browser or the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP dashboard (default command)
    Serve(ServeArgs),
    /// Classify a single deadline without touching the database
    Classify(ClassifyArgs),
    /// Print the dashboard summary and every tracked submission
    Report(ReportArgs),
    /// Record a new submission in the configured database
    Add(AddArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Keep submissions in memory instead of the configured database
    #[arg(long)]
    pub(crate) ephemeral: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Classify(args) => run_classify(args),
        Command::Report(args) => run_report(args).await,
        Command::Add(args) => run_add(args).await,
    }
}
