//! This benchmark compares resolving relative IRI references
//! against a base IRI parsed once, vs. a base IRI parsed for every resolution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rdfparse_iri::check_iri_ref;
use rdfparse_iri::resolve::BaseIri;

const BASE: &str = "http://a/b/c/d;p?q";
const RELATIVE: &[&str] = &[
    "g", "./g", "g/", "/g", "//g", "?y", "g?y", "#s", "g#s", ";x", "", ".", "..", "../g",
    "../..", "../../g", "../../../g", "/./g", "g.", "./../g", "g/../h",
];

fn check(c: &mut Criterion) {
    c.bench_with_input(BenchmarkId::new("check", ""), black_box(&RELATIVE), |b, &i| {
        b.iter(|| {
            for _ in 0..42 {
                for iri in i {
                    black_box(check_iri_ref(iri, true).is_ok());
                    black_box(check_iri_ref(iri, false).is_ok());
                }
            }
        });
    });
}

fn resolve_from_scratch(c: &mut Criterion) {
    c.bench_with_input(
        BenchmarkId::new("resolve from scratch", ""),
        black_box(&RELATIVE),
        |b, &i| {
            b.iter(|| {
                for _ in 0..42 {
                    for rel in i {
                        let base = BaseIri::new(BASE).unwrap();
                        black_box(base.resolve(rel).unwrap());
                    }
                }
            });
        },
    );
}

fn resolve_mutualized(c: &mut Criterion) {
    c.bench_with_input(
        BenchmarkId::new("resolve mutualized", ""),
        black_box(&(BaseIri::new(BASE).unwrap(), RELATIVE)),
        |b, i| {
            let mut buf = String::new();
            b.iter(|| {
                for _ in 0..42 {
                    for rel in i.1 {
                        black_box(i.0.resolve_into(rel, &mut buf).unwrap());
                    }
                }
            });
        },
    );
}

criterion_group!(benches, check, resolve_from_scratch, resolve_mutualized);
criterion_main!(benches);
