use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;

use docsift_core::{DocExtractor, Document, ExtractorConfig, FetchConfig, Language, detect, fetch_url};

mod echo;
mod menu;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract documentation pages and convert them to Markdown, keeping only
/// the code examples for the languages you care about
#[derive(Parser, Debug)]
#[command(name = "docsift")]
#[command(version = VERSION)]
#[command(about = "Extract documentation pages to Markdown with language filtering", long_about = None)]
struct Args {
    /// Documentation URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output directory for the Markdown file
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    output: PathBuf,

    /// Programming languages to keep (e.g. swift web kotlin); all if omitted
    #[arg(short, long, value_name = "LANG", num_args = 1.., conflicts_with = "interactive")]
    languages: Vec<String>,

    /// Interactively select languages after detection
    #[arg(short, long)]
    interactive: bool,

    /// Skip the title/source header block in the output
    #[arg(long)]
    no_header: bool,

    /// Strip images from output
    #[arg(long)]
    no_images: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
    }

    let is_url = args.input.starts_with("http://") || args.input.starts_with("https://");

    let (html, size) = if args.input == "-" {
        if args.verbose {
            echo::print_step(1, 4, "Reading from stdin");
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        let len = buffer.len();
        (buffer, len)
    } else if is_url {
        if args.verbose {
            echo::print_step(
                1,
                4,
                &format!("Fetching from {}", args.input.bright_white().underline()),
            );
        }

        let mut config = FetchConfig { timeout: args.timeout, ..Default::default() };
        if let Some(user_agent) = args.user_agent.clone() {
            config.user_agent = user_agent;
        }

        let content = fetch_url(&args.input, &config).await.context("Failed to fetch URL")?;
        let len = content.len();
        (content, len)
    } else {
        if args.verbose {
            echo::print_step(1, 4, &format!("Reading from file {}", args.input.bright_white()));
        }
        let content = docsift_core::fetch_file(&args.input)
            .with_context(|| format!("Failed to read file: {}", args.input))?;
        let len = content.len();
        (content, len)
    };

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), echo::format_size(size).bright_white());
        eprintln!();
        echo::print_step(2, 4, "Detecting languages");
    }

    let doc = Document::parse(&html).context("Failed to parse HTML")?;
    let detected = detect(&doc);

    if !detected.is_empty() {
        let names: Vec<String> = detected.iter().map(|l| menu::capitalize(l.name())).collect();
        echo::print_info(&format!("Detected languages: {}", names.join(", ")));
    }

    let keep = select_languages(&args, &detected)?;
    if !keep.is_empty() {
        let names: Vec<String> = keep.iter().map(|l| menu::capitalize(l.name())).collect();
        echo::print_info(&format!("Filtering content for: {}", names.join(", ")));
    }

    if args.verbose {
        eprintln!();
        echo::print_step(3, 4, "Extracting main content");
    }

    let config = ExtractorConfig::builder()
        .keep(keep)
        .include_header(!args.no_header)
        .strip_images(args.no_images)
        .build();

    let source_url = is_url.then_some(args.input.as_str());
    let extraction = DocExtractor::with_config(config)
        .extract(&html, source_url)
        .context("Failed to extract content")?;

    if args.verbose {
        eprintln!("  {} {}", "Title:".dimmed(), extraction.title.bright_white());
        eprintln!("  {} {}", "Selector:".dimmed(), extraction.selector.bright_white());
        eprintln!(
            "  {} {}",
            "Content:".dimmed(),
            format!("{} chars", extraction.content_chars).bright_white()
        );
        eprintln!();
        echo::print_step(4, 4, "Writing output");
    }

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create output directory: {}", args.output.display()))?;
    let path = args.output.join(&extraction.filename);
    fs::write(&path, &extraction.markdown)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    echo::print_success(&format!("Documentation saved to {}", path.display().bright_white()));

    Ok(())
}

/// Resolve the keep set from flags or the interactive menu.
///
/// Unknown names and names the page does not use are warnings, not errors;
/// they are simply excluded from the effective set.
fn select_languages(args: &Args, detected: &BTreeSet<Language>) -> anyhow::Result<BTreeSet<Language>> {
    if args.interactive {
        if detected.is_empty() {
            echo::print_info("No specific programming languages detected in this documentation.");
            return Ok(BTreeSet::new());
        }
        let selected = menu::prompt_languages(detected).context("Failed to read language selection")?;
        return Ok(selected.into_iter().collect());
    }

    let mut keep = BTreeSet::new();
    for name in &args.languages {
        match name.parse::<Language>() {
            Ok(language) if detected.contains(&language) => {
                keep.insert(language);
            }
            Ok(language) => {
                let available: Vec<&str> = detected.iter().map(|l| l.name()).collect();
                echo::print_warning(&format!(
                    "Language '{}' not found in this documentation. Available: {}",
                    language,
                    if available.is_empty() { "none".to_string() } else { available.join(", ") }
                ));
            }
            Err(_) => {
                let supported: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
                echo::print_warning(&format!(
                    "Unknown language '{}'. Supported: {}",
                    name,
                    supported.join(", ")
                ));
            }
        }
    }

    Ok(keep)
}
