//! Criterion benchmarks for the shingle rewriter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use shingler::query::{ExpandedQuery, Query};
use shingler::rewrite::{QueryRewriter, ShingleRewriter};

/// Build a query with `positions` tokens, each with `alternatives` terms.
fn generate_query(positions: usize, alternatives: usize) -> Query {
    let words = [
        "search", "engine", "full", "text", "index", "query", "document", "field", "term",
        "phrase", "boolean", "vector",
    ];

    let mut query = Query::new();
    for i in 0..positions {
        let dmq = query.add_token(Some("title"), words[i % words.len()], false);
        for j in 1..alternatives {
            let synonym = format!("{}{}", words[(i + j) % words.len()], j);
            query.add_term(dmq, Some("title"), synonym, j % 2 == 0);
        }
    }
    query
}

fn bench_shingle_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("shingle_rewrite");

    for &(positions, alternatives) in &[(2, 1), (8, 1), (8, 4), (32, 4)] {
        let query = generate_query(positions, alternatives);
        group.throughput(Throughput::Elements(positions as u64));

        for accept_generated_terms in [false, true] {
            let rewriter = ShingleRewriter::with_accept_generated_terms(accept_generated_terms);
            let id = format!("{positions}x{alternatives}/accept_generated={accept_generated_terms}");
            group.bench_with_input(BenchmarkId::from_parameter(id), &query, |b, query| {
                b.iter(|| rewriter.rewrite(black_box(ExpandedQuery::new(query.clone()))))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_shingle_rewrite);
criterion_main!(benches);
