#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: httptoken vs a char-by-char walk vs the http crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use http::HeaderName;

const NAMES: &[&str] = &[
    "",
    "Accept-Charset",
    "Accept-Encoding",
    "Access-Control-Request-Headers",
    "Access-Control-Request-Method",
    "Connection",
    "Content-Length",
    "Cookie",
    "Cookie2",
    "Date",
    "DNT",
    "Expect",
    "Host",
    "Keep-Alive",
    "Origin",
    "Referer",
    "Set-Cookie",
    "TE",
    "Trailer",
    "Transfer-Encoding",
    "Upgrade",
    "Via",
];

/// Header names plus their lowercase counterparts
fn names() -> Vec<String> {
    NAMES
        .iter()
        .map(ToString::to_string)
        .chain(NAMES.iter().map(|name| name.to_lowercase()))
        .collect()
}

/// Straightforward implementation: decode every code point and classify it
fn naive_is_token_rune(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

fn naive_valid_header_field_name(input: &str) -> bool {
    !input.is_empty() && input.chars().all(naive_is_token_rune)
}

fn bench_valid_header_field_name_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid_header_field_name");
    let names = names();

    group.bench_function("httptoken", |b| {
        b.iter(|| {
            for name in &names {
                black_box(httptoken::valid_header_field_name(black_box(name)));
            }
        });
    });

    group.bench_function("naive", |b| {
        b.iter(|| {
            for name in &names {
                black_box(naive_valid_header_field_name(black_box(name)));
            }
        });
    });

    group.bench_function("http_crate", |b| {
        b.iter(|| {
            for name in &names {
                black_box(HeaderName::from_bytes(black_box(name.as_bytes())).is_ok());
            }
        });
    });

    group.finish();
}

fn bench_is_cookie_name_valid_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_cookie_name_valid");
    let names = names();

    group.bench_function("httptoken", |b| {
        b.iter(|| {
            for name in &names {
                black_box(httptoken::is_cookie_name_valid(black_box(name)));
            }
        });
    });

    // strings.IndexFunc(raw, isNotToken) < 0
    group.bench_function("naive_index_of", |b| {
        b.iter(|| {
            for name in &names {
                let name = black_box(name);
                black_box(!name.is_empty() && !name.contains(|c: char| !naive_is_token_rune(c)));
            }
        });
    });

    group.finish();
}

fn bench_is_token_rune_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_token_rune");
    let names = names();

    group.bench_function("httptoken", |b| {
        b.iter(|| {
            for name in &names {
                for ch in name.chars() {
                    black_box(httptoken::is_token_rune(black_box(ch)));
                }
            }
        });
    });

    group.bench_function("naive", |b| {
        b.iter(|| {
            for name in &names {
                for ch in name.chars() {
                    black_box(naive_is_token_rune(black_box(ch)));
                }
            }
        });
    });

    group.finish();
}

fn bench_non_ascii_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_ascii");
    let input = "X-Custom-Héader";

    group.bench_function("httptoken", |b| {
        b.iter(|| httptoken::valid_header_field_name(black_box(input)));
    });

    group.bench_function("httptoken_bytes", |b| {
        b.iter(|| httptoken::valid_header_field_name_bytes(black_box(input.as_bytes())));
    });

    group.bench_function("naive", |b| {
        b.iter(|| naive_valid_header_field_name(black_box(input)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_valid_header_field_name_all,
    bench_is_cookie_name_valid_all,
    bench_is_token_rune_all,
    bench_non_ascii_all
);

criterion_main!(benches);
