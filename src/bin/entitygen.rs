//! entitygen CLI - generate JPA entity sources from Czech prompts

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use entitygen::codegen::fs_utils;
use entitygen::{analyze_fields, extract_class_name, AppConfig, EntityGenerator, GenerationRequest};

#[derive(Parser)]
#[command(name = "entitygen")]
#[command(version, about = "Generate JPA entity classes from Czech descriptions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an entity class
    Generate {
        /// Entity description, e.g. "entita Kniha s názvem a cenou"
        #[arg(short, long)]
        prompt: String,

        /// Emit explicit getters and setters instead of Lombok @Data
        #[arg(short, long)]
        accessors: bool,

        /// Delegate generation to the Gemini model
        #[arg(long)]
        ai: bool,

        /// Output file, or directory to receive <ClassName>.java (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Optional YAML configuration file
        #[arg(short, long, env = "ENTITYGEN_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Show the inferred class name and fields without generating code
    Inspect {
        /// Entity description
        #[arg(short, long)]
        prompt: String,
    },
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { prompt, accessors, ai, output, config } => {
            run_generate(prompt, accessors, ai, output, config).await
        }
        Commands::Inspect { prompt } => {
            run_inspect(&prompt);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

async fn run_generate(
    prompt: String,
    accessors: bool,
    ai: bool,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load(config.as_deref())?;
    let generator = EntityGenerator::from_config(&config.gemini)?;

    let request = GenerationRequest::heuristic(prompt)
        .with_accessors(accessors)
        .with_ai(ai);
    let source = generator.generate(&request).await;

    match output {
        Some(path) => {
            let path = fs_utils::resolve_output_path(&path, &extract_class_name(&request.prompt));
            fs_utils::write_file(&path, &source)?;
            println!("✓ Wrote {}", path.display());
        }
        None => print!("{}", source),
    }

    Ok(())
}

fn run_inspect(prompt: &str) {
    println!("Class: {}", extract_class_name(prompt));
    println!("Fields:");
    for field in &analyze_fields(prompt) {
        println!("  - {}", field);
    }
}
