use site_sniffer::{extract_url_tokens, match_by_url, CatalogEntry};

fn main() {
    env_logger::init();

    let catalog = vec![
        CatalogEntry::new("Ford Motor", "https://www.ford.com"),
        CatalogEntry::new("Ford UK", "https://www.ford.co.uk"),
        CatalogEntry::new("Toyota", "https://www.toyota.com"),
    ];

    let url = "https://www.ford.com/suvs/explorer?q=hybrid+suv";

    println!("Extracted tokens for \"{}\"", url);
    for token in extract_url_tokens(url).unwrap() {
        println!("  {}", token);
    }

    println!("Matched entries:");
    for entry in match_by_url(&catalog, url).unwrap() {
        println!(
            "  {} ({})",
            entry.page_name.as_deref().unwrap_or_default(),
            entry.website.as_deref().unwrap_or_default()
        );
    }
}
