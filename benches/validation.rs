use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stringutils::{is_secure, is_valid_isbn10, is_valid_isbn13, join, strip, validator, Rule};

fn benchmark_isbn10(c: &mut Criterion) {
    c.bench_function("is_valid_isbn10", |b| {
        b.iter(|| {
            let valid = is_valid_isbn10(black_box(Some("3 - 8 6 6 8 0 - 1 9 2 - 0")));
            black_box(valid);
        })
    });
}

fn benchmark_isbn13(c: &mut Criterion) {
    c.bench_function("is_valid_isbn13", |b| {
        b.iter(|| {
            let valid = is_valid_isbn13(black_box(Some("978-0-321-35668-0")));
            black_box(valid);
        })
    });
}

fn benchmark_is_secure(c: &mut Criterion) {
    c.bench_function("is_secure", |b| {
        b.iter(|| {
            let secure = is_secure(black_box(Some("123456abcdefABCDEF#%&")));
            black_box(secure);
        })
    });
}

fn benchmark_join(c: &mut Criterion) {
    let elements: Vec<Option<String>> = (0..20)
        .map(|i| if i % 5 == 0 { None } else { Some(i.to_string()) })
        .collect();

    c.bench_function("join_20", |b| {
        b.iter(|| {
            let joined = join(black_box(&elements));
            black_box(joined).ok();
        })
    });
}

fn benchmark_strip(c: &mut Criterion) {
    let input = "The quick brown fox jumps over the lazy dog. ".repeat(10);

    c.bench_function("strip", |b| {
        b.iter(|| {
            let stripped = strip(black_box(Some(input.as_str())), black_box(Some("aeiou ")));
            black_box(stripped).ok();
        })
    });
}

fn benchmark_named_rule(c: &mut Criterion) {
    c.bench_function("check_named_isbn", |b| {
        b.iter(|| {
            let result = validator().check_named(black_box("isbn"), black_box(Some("9780321356680")));
            black_box(result).ok();
        })
    });
}

criterion_group!(
    benches,
    benchmark_isbn10,
    benchmark_isbn13,
    benchmark_is_secure,
    benchmark_join,
    benchmark_strip,
    benchmark_named_rule
);
criterion_main!(benches);
