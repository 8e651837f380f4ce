use clap::{Parser, Subcommand};
use depscan::{
    renderer, Config, DependencyAnalyzer, FileDiscovery, LineCountAnalyzer, Reporter,
    ServiceAnalyzer, SourceAnalyzer,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "depscan")]
#[command(about = "A fast source analysis tool for scanning Java source trees and mapping package dependencies")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the inter-package dependency graph and render it as a DOT document
    Deps {
        /// Root source directory to analyze
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Root package used to scope the normalized graph
        #[arg(long)]
        pkg: String,

        /// Output file path for the DOT document
        #[arg(short, long)]
        output: PathBuf,

        /// Also write the un-normalized graph as pretty JSON
        #[arg(long)]
        raw: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Report REST resource entities and the verbs they import
    Services {
        /// Root source directory to analyze
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Output file path for the report
        #[arg(short, long)]
        output: PathBuf,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Count lines of code across the source tree
    Lines {
        /// Root source directory to analyze
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Output file path for the report
        #[arg(short, long)]
        output: PathBuf,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Generate a default configuration file
    Config {
        /// Output path for the config file (defaults to ~/.depscan.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Deps {
            path,
            pkg,
            output,
            raw,
            config,
        } => analyze_dependencies(path, pkg, output, raw, config),
        Commands::Services {
            path,
            output,
            config,
        } => analyze_services(path, output, config),
        Commands::Lines {
            path,
            output,
            config,
        } => count_lines(path, output, config),
        Commands::Config { output } => generate_config(output),
    }
}

fn load_config(config_path: Option<PathBuf>, target: PathBuf) -> anyhow::Result<Config> {
    let mut config = if let Some(config_path) = config_path {
        Config::from_file(&config_path)?
    } else {
        Config::load()?
    };
    config.target_directory = target;
    Ok(config)
}

fn analyze_dependencies(
    target_path: PathBuf,
    root_package: String,
    output_path: PathBuf,
    raw_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    println!("🔍 Scanning {} for package dependencies", target_path.display());
    let start_time = Instant::now();

    let config = load_config(config_path, target_path)?;
    let file_discovery = FileDiscovery::new(config);
    let files = file_discovery.discover_files()?;
    file_discovery.get_stats(&files).print_summary();

    let mut analyzer = DependencyAnalyzer::new()?;
    analyzer.analyze_files(&files);

    let reporter = Reporter::new();
    if let Some(raw_path) = raw_path {
        let written = reporter.write_raw_graph(analyzer.graph(), files.len(), &raw_path)?;
        println!("📄 Raw graph written to {}", written.display());
    }

    let graph = analyzer.into_graph();
    let normalized = graph.normalize(&root_package);
    let edge_count: usize = normalized.values().map(|targets| targets.len()).sum();

    let dot = renderer::render_dot(&normalized);
    let written = reporter.write_report(&dot, &output_path)?;

    println!(
        "✅ {} packages and {} edges under {} in {:.2}s",
        normalized.len(),
        edge_count,
        root_package,
        start_time.elapsed().as_secs_f64()
    );
    println!("📁 Graph written to {}", written.display());

    Ok(())
}

fn analyze_services(
    target_path: PathBuf,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    println!("🔍 Scanning {} for REST resources", target_path.display());
    let start_time = Instant::now();

    let config = load_config(config_path, target_path)?;
    let file_discovery = FileDiscovery::new(config);
    let files = file_discovery.discover_files()?;
    file_discovery.get_stats(&files).print_summary();

    let mut analyzer = ServiceAnalyzer::new()?;
    analyzer.analyze_files(&files);

    let report = analyzer.render_report();
    let written = Reporter::new().write_report(&report, &output_path)?;

    println!(
        "✅ {} entities found in {:.2}s",
        analyzer.repository().len(),
        start_time.elapsed().as_secs_f64()
    );
    println!("📁 Report written to {}", written.display());

    Ok(())
}

fn count_lines(
    target_path: PathBuf,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    println!("🔍 Counting lines under {}", target_path.display());

    let config = load_config(config_path, target_path)?;
    let file_discovery = FileDiscovery::new(config);
    let files = file_discovery.discover_files()?;

    let mut analyzer = LineCountAnalyzer::new();
    analyzer.analyze_files(&files);

    let report = analyzer.render_report();
    let written = Reporter::new().write_report(&report, &output_path)?;

    print!("{report}");
    println!("📁 Report written to {}", written.display());

    Ok(())
}

fn generate_config(output_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config_path = output_path.unwrap_or_else(|| {
        Config::default_config_path().unwrap_or_else(|_| PathBuf::from("depscan.toml"))
    });

    println!("📝 Generating configuration file: {}", config_path.display());

    let documented_config = Config::create_documented_config();
    std::fs::write(&config_path, documented_config)?;

    println!("✅ Configuration file created");
    println!("💡 Edit the file to customize which files are scanned.");

    Ok(())
}
