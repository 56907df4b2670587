use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use well_redesign_core::{
    config::Config,
    image_input::SourceImage,
    init, prompt,
    settings::Settings,
    spec::{GenerationRequestSpec, StyleHint},
    WellRedesign,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Interior photograph to redesign (jpg, jpeg or png)
    image: PathBuf,

    /// Maximize daylight through large windows
    #[arg(long)]
    daylight: bool,

    /// Ambient light level in lux (used with --daylight)
    #[arg(long, value_parser = clap::value_parser!(u32).range(100..=1000))]
    lux: Option<u32>,

    /// Add indoor plants
    #[arg(long)]
    plants: bool,

    /// Greenery coverage in percent (used with --plants)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    greenery: Option<u8>,

    /// Use natural wood materials
    #[arg(long)]
    wood: bool,

    /// Wood material coverage in percent (used with --wood)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    wood_pct: Option<u8>,

    /// Create a relaxation lounge area
    #[arg(long)]
    lounge: bool,

    /// Improve acoustic comfort with panels
    #[arg(long)]
    acoustic: bool,

    /// Target noise level in dB (used with --acoustic)
    #[arg(long, value_parser = clap::value_parser!(u32).range(20..=70))]
    noise: Option<u32>,

    /// Central staircase width in metres (0.5 to 3.0)
    #[arg(long, value_parser = parse_stair_width)]
    stair_width: Option<f64>,

    /// Visual style to hint to the backend
    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// Where to write the generated image
    #[arg(short, long, default_value = "redesigned_interior.png")]
    output: PathBuf,

    /// Read the backend address from this file instead of the default lookup
    #[arg(long)]
    url_file: Option<PathBuf>,

    /// Print the composed prompt and exit without contacting the backend
    #[arg(long)]
    dry_run: bool,

    /// Save the metric values from this run as future defaults
    #[arg(long)]
    remember: bool,
}

/// CLI-facing mirror of [`StyleHint`], so the core stays clap-free.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    None,
    PastelMix,
    ModernArchitecture,
    InteriorStudio,
}

impl From<StyleArg> for StyleHint {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::None => StyleHint::None,
            StyleArg::PastelMix => StyleHint::PastelMix,
            StyleArg::ModernArchitecture => StyleHint::ModernArchitecture,
            StyleArg::InteriorStudio => StyleHint::InteriorStudio,
        }
    }
}

fn parse_stair_width(raw: &str) -> Result<f64, String> {
    let width: f64 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if (0.5..=3.0).contains(&width) {
        Ok(width)
    } else {
        Err(format!("{width} is outside the 0.5-3.0 m range"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup
    let _ = dotenvy::dotenv();
    init();
    let args = Args::parse();

    // Remembered metric defaults fill in anything not given on the command line
    let defaults = Settings::load();
    let spec = GenerationRequestSpec {
        daylight_enabled: args.daylight,
        lux: args.lux.unwrap_or(defaults.lux),
        plants_enabled: args.plants,
        greenery_pct: args.greenery.unwrap_or(defaults.greenery_pct),
        wood_enabled: args.wood,
        wood_pct: args.wood_pct.unwrap_or(defaults.wood_pct),
        lounge_enabled: args.lounge,
        acoustic_enabled: args.acoustic,
        noise_db: args.noise.unwrap_or(defaults.noise_db),
        stair_width_m: args.stair_width.unwrap_or(defaults.stair_width_m),
        style_hint: args
            .style
            .map(StyleHint::from)
            .unwrap_or(defaults.style_hint),
    };

    if args.remember {
        let updated = Settings {
            lux: spec.lux,
            greenery_pct: spec.greenery_pct,
            stair_width_m: spec.stair_width_m,
            noise_db: spec.noise_db,
            wood_pct: spec.wood_pct,
            style_hint: spec.style_hint,
        };
        if let Err(e) = updated.save() {
            eprintln!("Warning: failed to save defaults: {e}");
        }
    }

    if args.dry_run {
        println!("{}", prompt::compose(&spec));
        return Ok(());
    }

    // Load and validate the photograph before touching the network
    let image = SourceImage::from_path(&args.image)
        .with_context(|| format!("Failed to load image {}", args.image.display()))?;

    // Backend address: explicit file flag wins over the standard lookup
    let config = match &args.url_file {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
    .context("Failed to resolve the generation backend address")?;

    let app = WellRedesign::with_config(config);
    let composed = app.prompt_for(&spec);
    println!("Prompt: {composed}");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.green} {msg}")?,
    );
    spinner.set_message("Enhancing your space with WELL principles...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = app.redesign(&image, &spec).await;

    spinner.finish_and_clear();

    match result {
        Ok(rendered) => {
            std::fs::write(&args.output, &rendered)
                .with_context(|| format!("Failed to write {}", args.output.display()))?;
            println!("Saved redesigned interior to {}", args.output.display());
        }
        Err(e) if e.is_retryable() => {
            eprintln!("Generation failed: {e}");
            eprintln!("The backend may be down; try again once it is reachable.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Unexpected error: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
