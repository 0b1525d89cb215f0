use criterion::{black_box, criterion_group, criterion_main, Criterion};
use site_sniffer::{extract_url_tokens, match_by_url, CatalogEntry};

fn sample_catalog() -> Vec<CatalogEntry> {
    (0..500)
        .map(|i| {
            CatalogEntry::new(
                &format!("Company {}", i),
                &format!("https://www.company{}.com", i),
            )
        })
        .chain([CatalogEntry::new("Ford Motor", "https://www.ford.com")])
        .collect()
}

fn benchmark_extract_url_tokens(c: &mut Criterion) {
    let url = "https://www.ford.com/suvs/explorer?q=hybrid+family+suv+with+third+row";

    c.bench_function("extract_url_tokens", |b| {
        b.iter(|| extract_url_tokens(black_box(url)))
    });
}

fn benchmark_match_by_url(c: &mut Criterion) {
    let catalog = sample_catalog();
    let url = "https://www.ford.com/suvs/explorer";

    c.bench_function("match_by_url", |b| {
        b.iter(|| match_by_url(black_box(&catalog), black_box(url)))
    });
}

criterion_group!(benches, benchmark_extract_url_tokens, benchmark_match_by_url);
criterion_main!(benches);
