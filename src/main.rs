use clap::Parser;
use log::{error, info};
use site_sniffer::{
    read_catalog_from_path, CatalogEntry, Matcher, MatcherConfig, UrlTokenizer,
    UrlTokenizerConfig, DEFAULT_MATCHER_CONFIG, DEFAULT_URL_TOKENIZER_CONFIG,
    DEFAULT_WEIGHTED_TOKEN_STRATEGY,
};
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Matches URLs read from stdin (one per line) against a catalog.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CSV catalog file, optionally gzip-compressed (`.gz`)
    catalog: PathBuf,

    /// Score entries by weighted, approximate token matches instead of domain root equality
    #[arg(long)]
    fuzzy: bool,

    #[arg(long, default_value_t = DEFAULT_MATCHER_CONFIG.max_results)]
    max_results: usize,

    /// Longest query n-gram to generate
    #[arg(long)]
    max_ngram_len: Option<usize>,

    /// Print the extracted tokens of each URL
    #[arg(long)]
    show_tokens: bool,
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();

    let catalog: Vec<CatalogEntry> = match read_catalog_from_path(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog {:?}: {}", args.catalog, e);
            std::process::exit(1);
        }
    };

    let url_tokenizer = UrlTokenizer::new(UrlTokenizerConfig {
        max_ngram_len: args.max_ngram_len,
        ..DEFAULT_URL_TOKENIZER_CONFIG
    });

    let matcher = Matcher::new(
        MatcherConfig {
            strategy: if args.fuzzy {
                DEFAULT_WEIGHTED_TOKEN_STRATEGY
            } else {
                DEFAULT_MATCHER_CONFIG.strategy
            },
            max_results: args.max_results,
            ..DEFAULT_MATCHER_CONFIG
        },
        url_tokenizer,
    );

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                std::process::exit(1);
            }
        };

        let url = line.trim();
        if url.is_empty() {
            continue;
        }

        let url_tokens = match url_tokenizer.extract_tokens(url) {
            Ok(url_tokens) => url_tokens,
            Err(e) => {
                error!("Skipping {}: {}", url, e);
                continue;
            }
        };

        if args.show_tokens {
            for token in &url_tokens {
                println!("{}\ttoken\t{}", url, token);
            }
        }

        let results = matcher.match_tokens(&catalog, &url_tokens);
        info!("{} matched {} entries", url, results.len());

        for entry in results {
            println!(
                "{}\t{}\t{}",
                url,
                entry.page_name.as_deref().unwrap_or_default(),
                entry.website.as_deref().unwrap_or_default()
            );
        }
    }
}
