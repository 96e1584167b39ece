//! Parser and normaliser throughput on the bundled fixtures

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use books_scraper_lib::application::normalizer::{normalize_availability, parse_price};
use books_scraper_lib::infrastructure::parsing::{
    ContextualParser, DetailParseContext, ParseContext, ProductDetailParser, ProductListParser,
};

const LISTING_INDEX: &str = include_str!("../tests/fixtures/listing_index.html");
const DETAIL_ATTIC: &str = include_str!("../tests/fixtures/detail_a_light_in_the_attic.html");

fn listing_parsing(c: &mut Criterion) {
    let parser = ProductListParser::new().unwrap();
    let context = ParseContext::new(1, "https://books.toscrape.com/index.html");

    c.bench_function("parse_listing_page", |b| {
        b.iter(|| parser.parse_str(black_box(LISTING_INDEX), &context).unwrap())
    });
}

fn detail_parsing(c: &mut Criterion) {
    let parser = ProductDetailParser::new().unwrap();
    let context = DetailParseContext::new("https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html");

    c.bench_function("parse_detail_page", |b| {
        b.iter(|| parser.parse_str(black_box(DETAIL_ATTIC), &context).unwrap())
    });
}

fn normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.bench_function("parse_price", |b| b.iter(|| parse_price(black_box("Â£1,234.56"))));
    group.bench_function("availability", |b| {
        b.iter(|| normalize_availability(black_box("\n\n    In stock (22 available)\n\n")))
    });
    group.finish();
}

criterion_group!(benches, listing_parsing, detail_parsing, normalization);
criterion_main!(benches);
