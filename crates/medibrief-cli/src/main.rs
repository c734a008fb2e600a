use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use medibrief_cli::commands::{self, InitOptions, OutputTarget};
use medibrief_cli::config;
use medibrief_core::models::template::ReportTemplate;
use medibrief_export::ExportFormat;

#[derive(Parser)]
#[command(name = "medibrief", version)]
#[command(about = "Generate and render structured AI medical reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report for a patient record
    Generate {
        /// Patient record as JSON
        #[arg(long)]
        patient: PathBuf,
        /// Image of a lab report or symptom (jpeg, png, webp); repeatable
        #[arg(long = "image")]
        images: Vec<PathBuf>,
        /// Section layout, overriding the config
        #[arg(long)]
        template: Option<ReportTemplate>,
        /// Output format: text, html or docx
        #[arg(long, default_value = "text")]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Parse and export an existing raw report
    Render {
        /// Raw report text
        input: PathBuf,
        /// Recognize only this template's heading glyphs
        #[arg(long)]
        template: Option<ReportTemplate>,
        /// Output format: text, html or docx
        #[arg(long, default_value = "text")]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a new config file
    Init {
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        model_id: Option<String>,
        #[arg(long)]
        template: Option<ReportTemplate>,
        /// Named AWS profile (default credential chain when omitted)
        #[arg(long)]
        profile: Option<String>,
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
    /// Print the config with credentials redacted
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            patient,
            images,
            template,
            format,
            out,
        } => {
            let config = config::load_or_default()?;
            let target = OutputTarget { format, out };
            commands::generate(&config, &patient, &images, template, &target).await
        }
        Commands::Render {
            input,
            template,
            format,
            out,
        } => {
            let config = config::load_or_default()?;
            let target = OutputTarget { format, out };
            commands::render_file(&config, &input, template, &target)
        }
        Commands::Config { action } => match action {
            ConfigCommand::Init {
                region,
                model_id,
                template,
                profile,
                force,
            } => commands::config_init(InitOptions {
                region,
                model_id,
                template,
                profile,
                force,
            }),
            ConfigCommand::Show => commands::config_show(),
        },
    }
}
