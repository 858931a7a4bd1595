use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pigmix::api;
use pigmix::models::AppConfig;
use pigmix::rendering::render_swatches;
use pigmix::server;
use pigmix::services::MixService;

#[derive(Parser)]
#[command(name = "pigmix")]
#[command(about = "Pigment-style color mixing server and CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Mix two colors and print the result as hex
    Mix {
        /// First color (e.g. "#0021a5")
        a: String,

        /// Second color
        b: String,

        /// Mixing ratio, 0.0 gives A and 1.0 gives B
        #[arg(short, long, default_value_t = 0.5, allow_negative_numbers = true)]
        t: f64,
    },
    /// Print the seven latent components of a color
    Latent {
        /// Color to encode
        color: String,
    },
    /// Print a pigment gradient, or render it to a PNG file
    Gradient {
        /// Start color
        a: String,

        /// End color
        b: String,

        /// Number of colors, endpoints included (default from config)
        #[arg(short, long)]
        steps: Option<usize>,

        /// Write a PNG swatch strip instead of printing hex colors
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert a raw LUT file into a base64 transport string
    Pack {
        /// Raw LUT file
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pigmix API",
        description = "Pigment-style color mixing in a latent space",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_mix,
        api::handle_latent,
        api::handle_decode,
        api::handle_gradient,
        api::handle_gradient_png,
    ),
    components(schemas(
        api::MixResponse,
        api::LatentResponse,
        api::DecodeRequest,
        api::DecodeResponse,
        api::GradientResponse,
    )),
    tags(
        (name = "Mixing", description = "Pigment mixing and gradients"),
        (name = "Latent", description = "Latent space encoding and decoding")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Mix { a, b, t }) => run_mix_command(&a, &b, t),
        Some(Commands::Latent { color }) => run_latent_command(&color),
        Some(Commands::Gradient {
            a,
            b,
            steps,
            output,
        }) => run_gradient_command(&a, &b, steps, output),
        Some(Commands::Pack { input, output }) => run_pack_command(&input, output),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Load configuration from `CONFIG_FILE`, applying `LUT_FILE` and
/// `LUT_TRANSPORT_FILE` overrides.
fn load_config() -> AppConfig {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let lut_file = std::env::var("LUT_FILE").ok().map(PathBuf::from);
    let lut_transport_file = std::env::var("LUT_TRANSPORT_FILE").ok().map(PathBuf::from);

    AppConfig::load(config_file.as_deref()).with_lut_overrides(lut_file, lut_transport_file)
}

/// Minimal logging for one-shot CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pigmix=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_service() -> anyhow::Result<MixService> {
    init_cli_tracing();
    let config = load_config();
    MixService::from_config(&config).map_err(|e| anyhow::anyhow!("{e}"))
}

fn parse_color(input: &str) -> anyhow::Result<pigment_mix::Rgb> {
    input
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid color {input:?}: {e}"))
}

/// Mix two colors and print the result
fn run_mix_command(a: &str, b: &str, t: f64) -> anyhow::Result<()> {
    let a = parse_color(a)?;
    let b = parse_color(b)?;
    if !t.is_finite() {
        anyhow::bail!("Ratio must be a finite number, got {t}");
    }

    let service = load_service()?;
    println!("{}", service.mix(a, b, t)?);

    Ok(())
}

/// Print the latent components of a color, one per line
fn run_latent_command(color: &str) -> anyhow::Result<()> {
    let color = parse_color(color)?;

    let service = load_service()?;
    for component in service.latent(color)?.components() {
        println!("{component}");
    }

    Ok(())
}

/// Print a gradient, or write it as a PNG swatch strip
fn run_gradient_command(
    a: &str,
    b: &str,
    steps: Option<usize>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let a = parse_color(a)?;
    let b = parse_color(b)?;

    let service = load_service()?;
    let steps = service.resolve_steps(steps)?;
    let colors = service.gradient(a, b, steps)?;

    match output {
        Some(path) => {
            let gradient = service.gradient_config();
            let png_bytes =
                render_swatches(&colors, gradient.swatch_width, gradient.swatch_height)?;
            std::fs::write(&path, &png_bytes)?;
            println!("Rendered {} ({} bytes)", path.display(), png_bytes.len());
        }
        None => {
            for color in &colors {
                println!("{color}");
            }
        }
    }

    Ok(())
}

/// Convert a raw LUT file into its transport string
fn run_pack_command(input: &Path, output: Option<PathBuf>) -> anyhow::Result<()> {
    init_cli_tracing();

    let lut = pigmix::services::lut_loader::load_raw(input)?;
    let transport = pigment_mix::lut::encode_transport(lut.as_bytes())?;

    match output {
        Some(path) => {
            std::fs::write(&path, &transport)?;
            println!(
                "Packed {} into {} ({} bytes)",
                input.display(),
                path.display(),
                transport.len()
            );
        }
        None => println!("{transport}"),
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let lut_file = std::env::var("LUT_FILE").ok();
    let lut_transport_file = std::env::var("LUT_TRANSPORT_FILE").ok();

    // Header
    println!("Pigmix v{VERSION}");
    println!("Pigment-style color mixing server and CLI\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR          = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE        = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  LUT_FILE           = {}",
        lut_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  LUT_TRANSPORT_FILE = {}",
        lut_transport_file.as_deref().unwrap_or("(not set)")
    );

    // Sources section
    println!("\nSources:");

    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("  Config: {config_source}");

    let lut_source = match load_config().lut_source() {
        Some(source) => source.to_string(),
        None => "(not configured)".to_string(),
    };
    println!("  LUT:    {lut_source}");

    // Commands section
    println!("\nCommands:");
    println!("  pigmix serve      Start the HTTP server");
    println!("  pigmix mix        Mix two colors");
    println!("  pigmix latent     Print the latent vector of a color");
    println!("  pigmix gradient   Print or render a gradient");
    println!("  pigmix pack       Convert a raw LUT to a transport string");
    println!("\nRun 'pigmix --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pigmix=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = load_config();

    tracing::info!(
        lut = ?config.lut_source().map(|s| s.to_string()),
        default_steps = config.gradient.default_steps,
        max_steps = config.gradient.max_steps,
        "Configuration resolved"
    );

    // Create application state using shared server module
    let state = server::create_app_state(&config)?;

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Pigmix server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
