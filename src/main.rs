use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use darkroom::api;
use darkroom::models::AppConfig;
use darkroom::server::{build_router, create_app_state};
use darkroom::services::{codec, FilterRunner, ResultEncoder};
use filter_kit::FilterOptions;

#[derive(Parser)]
#[command(name = "darkroom")]
#[command(about = "Darkroom - upload one image, receive a battery of filtered renditions")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Run the full filter battery against a file and write JPEGs to a directory
    Process {
        /// Input image (PNG, JPEG or GIF)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the thirteen JPEG files
        #[arg(short, long)]
        output: PathBuf,

        /// Sharpen kernel scale
        #[arg(long)]
        sharpen_intensity: Option<f32>,

        /// Emboss gradient scale
        #[arg(long)]
        emboss_strength: Option<f32>,

        /// Saturation multiplier
        #[arg(long)]
        saturation_factor: Option<f32>,

        /// Weak-edge gradient threshold
        #[arg(long)]
        edge_threshold1: Option<f32>,

        /// Strong-edge gradient threshold
        #[arg(long)]
        edge_threshold2: Option<f32>,

        /// Hue rotation as a fraction of the hue wheel
        #[arg(long)]
        hue_shift: Option<f32>,

        /// Sepia matrix blend (0 = identity, 1 = full sepia)
        #[arg(long)]
        sepia_intensity: Option<f32>,

        /// Saturation multiplier above the image mean
        #[arg(long)]
        vibrance_factor: Option<f32>,

        /// Vignette mask exponent
        #[arg(long)]
        vignette_intensity: Option<f32>,

        /// Noise reduction template window
        #[arg(long)]
        noise_reduction_strength: Option<f32>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Darkroom API",
        description = "Upload one image, receive a battery of filtered renditions",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_upload, api::handle_download),
    components(schemas(
        api::UploadForm,
        api::UploadResponse,
        api::DownloadRequest,
        darkroom::models::ImageMetadata,
    )),
    tags(
        (name = "Filters", description = "Image filter battery and downloads")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Process {
            input,
            output,
            sharpen_intensity,
            emboss_strength,
            saturation_factor,
            edge_threshold1,
            edge_threshold2,
            hue_shift,
            sepia_intensity,
            vibrance_factor,
            vignette_intensity,
            noise_reduction_strength,
        }) => {
            let mut options = FilterOptions::default();
            if let Some(v) = sharpen_intensity {
                options.sharpen_intensity = v;
            }
            if let Some(v) = emboss_strength {
                options.emboss_strength = v;
            }
            if let Some(v) = saturation_factor {
                options.saturation_factor = v;
            }
            if let Some(v) = edge_threshold1 {
                options.edge_threshold1 = v;
            }
            if let Some(v) = edge_threshold2 {
                options.edge_threshold2 = v;
            }
            if let Some(v) = hue_shift {
                options.hue_shift = v;
            }
            if let Some(v) = sepia_intensity {
                options.sepia_intensity = v;
            }
            if let Some(v) = vibrance_factor {
                options.vibrance_factor = v;
            }
            if let Some(v) = vignette_intensity {
                options.vignette_intensity = v;
            }
            if let Some(v) = noise_reduction_strength {
                options.noise_reduction_strength = v;
            }
            run_process_command(&input, &output, options, cli.config.as_deref())
        }
        Some(Commands::Serve) | None => run_server(cli.config).await,
    }
}

async fn run_server(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "darkroom=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(config_path.as_deref());
    let bind = config.bind.clone();
    let state = create_app_state(config);

    let app = build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    tracing::info!(%bind, "Darkroom listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Run the filter battery offline (no server needed).
fn run_process_command(
    input: &PathBuf,
    output: &PathBuf,
    options: FilterOptions,
    config_path: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "darkroom=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(config_path);

    let bytes = std::fs::read(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let (buffer, metadata) = codec::decode_upload(&bytes)?;
    println!(
        "{} {}x{} {} -> {}",
        metadata.format,
        metadata.size.0,
        metadata.size.1,
        metadata.mode,
        output.display()
    );

    std::fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let encoder = ResultEncoder::new(config.jpeg_quality);
    let runner = FilterRunner::new(encoder.clone());

    std::fs::write(output.join("original.jpg"), encoder.encode_jpeg(&buffer)?)?;
    for (name, rendered) in runner.render_all(&buffer, &options) {
        let path = output.join(format!("{name}.jpg"));
        std::fs::write(&path, encoder.encode_jpeg(&rendered)?)?;
        println!("  wrote {}", path.display());
    }
    Ok(())
}
