use anyhow::{Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use engine::{RecommendOutcome, Recommendation, Recommender};
use export::{AppConfig, ExportFormat, ObjectStoreUploader, RecommendationReport};
use std::path::{Path, PathBuf};

/// CineMatch - Content-Based Movie Recommendation Engine
#[derive(Parser)]
#[command(name = "cine-match")]
#[command(about = "Content-based movie recommendations via cosine similarity", long_about = None)]
struct Cli {
    /// Path to a ::-delimited catalog file (defaults to the built-in sample)
    #[arg(short = 'd', long)]
    catalog: Option<PathBuf>,

    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get recommendations similar to a movie
    Recommend {
        /// Exact title of the movie to match against
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "5")]
        num: usize,

        /// Export the results to a file
        #[arg(long, value_enum)]
        export: Option<ExportArg>,

        /// Upload the exported file to S3 (requires --export)
        #[arg(long, requires = "export")]
        upload: bool,

        /// Directory for exported files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// List all movies in the catalog
    List,
}

/// clap-facing mirror of export::ExportFormat
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportArg {
    Json,
    Csv,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Json => ExportFormat::Json,
            ExportArg::Csv => ExportFormat::Csv,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Catalog load failure is a hard error before any engine setup
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Recommend {
            title,
            num,
            export,
            upload,
            out_dir,
        } => {
            handle_recommend(
                catalog,
                &cli.config,
                &title,
                num,
                export.map(Into::into),
                upload,
                &out_dir,
            )
            .await?
        }
        Commands::List => handle_list(&catalog),
    }

    Ok(())
}

/// Load a catalog file, or fall back to the embedded sample data.
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            println!("No catalog file given, using the built-in sample catalog");
            Ok(Catalog::sample())
        }
    }
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Catalog,
    config_path: &Path,
    title: &str,
    num: usize,
    export: Option<ExportFormat>,
    upload: bool,
    out_dir: &Path,
) -> Result<()> {
    let engine = Recommender::new(catalog.into_movies());

    let recommendations = match engine.recommend(title, num) {
        RecommendOutcome::Found(recommendations) => recommendations,
        RecommendOutcome::NotFound => {
            println!("{}", format!("Movie '{}' not found in the catalog.", title).red());
            println!("\nAvailable movies:");
            for movie in engine.movies() {
                println!("- {}", movie.title);
            }
            return Ok(());
        }
    };

    print_recommendations(title, &recommendations);

    if let Some(format) = export {
        let report = RecommendationReport::new(title, recommendations);
        let path = report.write(format, out_dir)?;
        println!("{} Exported to {}", "✓".green(), path.display());

        if upload {
            let config = AppConfig::load(config_path)?;
            let uploader = ObjectStoreUploader::new(&config.aws).await;
            let uri = uploader.upload_file(&path).await?;
            println!("{} Uploaded to {}", "✓".green(), uri);
        }
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(catalog: &Catalog) {
    println!("{}", "Available movies:".bold().blue());
    for movie in catalog.movies() {
        println!(
            "- {} ({}), Genre: {}, Rating: {}",
            movie.title, movie.year, movie.genre, movie.rating
        );
    }
}

/// Helper function to format and print recommendations
fn print_recommendations(title: &str, recommendations: &[Recommendation]) {
    println!(
        "{}",
        format!("Recommendations for '{}':", title).bold().blue()
    );
    println!("{}", "=".repeat(50));

    if recommendations.is_empty() {
        println!("(no other movies in the catalog)");
        return;
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} ({})",
            (rank + 1).to_string().green(),
            rec.title,
            rec.year
        );
        println!(
            "   Genre: {}, Director: {}, Rating: {}",
            rec.genre, rec.director, rec.rating
        );
        println!("   Similarity Score: {:.4}", rec.score);
    }
}
