use crate::demo::{run_demo, run_options, run_replay, DemoArgs, ReplayArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use stuttz_onboarding::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Stuttz Onboarding",
    about = "Serve and exercise the Stuttz registration and academic onboarding flow",
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
    /// Walk a sample learner through registration, questionnaire, and roadmap
    Demo(DemoArgs),
    /// Feed a JSON file of presentation events through a fresh session
    Replay(ReplayArgs),
    /// Print the choices offered by the academic questionnaire
    Options,
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
        Command::Demo(args) => run_demo(args),
        Command::Replay(args) => run_replay(args),
        Command::Options => run_options(),
    }
}
