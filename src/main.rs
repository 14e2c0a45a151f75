use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use neon_stylize::{defaults_for, Style};
use neondither::models::{ExportFormat, RenderConfig};
use neondither::services::StylizeService;

#[derive(Parser)]
#[command(name = "neondither")]
#[command(about = "Neon image stylization: dithering, line art, stippling, gradient bands and ASCII art")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Stylize one or more images
    Render {
        /// Input image files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// YAML render configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Style (resets numeric settings to the style's defaults)
        #[arg(short, long)]
        style: Option<Style>,

        /// Output format: png, jpeg, text or html
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Setting override as key=value (e.g. scale=0.5, neonColor=180,100,100,0.8)
        #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },
    /// Print the default settings of a style as YAML
    Defaults {
        /// Style name
        #[arg(short, long, default_value = "floyd-steinberg")]
        style: Style,
    },
    /// List available styles
    Styles,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            inputs,
            out_dir,
            config,
            style,
            format,
            overrides,
        }) => run_render_command(inputs, out_dir, config, style, format, overrides).await,
        Some(Commands::Defaults { style }) => run_defaults_command(style),
        Some(Commands::Styles) | None => {
            run_styles_command();
            Ok(())
        }
    }
}

/// Build the configuration and render every input
async fn run_render_command(
    inputs: Vec<PathBuf>,
    out_dir: PathBuf,
    config_path: Option<PathBuf>,
    style: Option<Style>,
    format: Option<ExportFormat>,
    overrides: Vec<String>,
) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neondither=info,neon_stylize=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mut config = match config_path {
        Some(path) => RenderConfig::load(&path)?,
        None => RenderConfig::default(),
    };
    // Style first so later overrides are not reset by the switch
    if let Some(style) = style {
        config.set_style(style);
    }
    for pair in &overrides {
        config.apply_override(pair)?;
    }
    if let Some(format) = format {
        config.export.format = Some(format);
    }

    let service = StylizeService::new(config)?;
    std::fs::create_dir_all(&out_dir)?;

    tracing::info!(
        style = %service.config().settings.style,
        format = %service.format(),
        inputs = inputs.len(),
        "Rendering"
    );

    let jobs = service.jobs_for(&inputs, &out_dir);
    let outcomes = service.render_batch(jobs).await;

    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(bytes) => println!("Rendered {} ({bytes} bytes)", outcome.job.output.display()),
            Err(e) => {
                failed += 1;
                eprintln!("Failed {}: {e}", outcome.job.input.display());
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} images failed", outcomes.len());
    }
    Ok(())
}

fn run_defaults_command(style: Style) -> anyhow::Result<()> {
    let config = RenderConfig {
        settings: defaults_for(style),
        ..Default::default()
    };
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}

fn run_styles_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Neondither v{VERSION}\n");
    println!("Styles:");
    for style in Style::ALL {
        println!("  {:<16} {}", style.name(), style.label());
    }
    println!("\nCommands:");
    println!("  neondither render    Stylize images");
    println!("  neondither defaults  Print a style's default settings");
    println!("\nRun 'neondither --help' for more details.");
}
