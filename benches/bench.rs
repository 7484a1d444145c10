//! Criterion benchmarks for the bm25 scorer.
//!
//! Covers:
//! - Building corpus statistics
//! - Sequential scoring, with and without a reused buffer
//! - Parallel scoring

use std::hint::black_box;

use bm25::analysis::{Vocabulary, WhitespaceTokenizer};
use bm25::document::{Document, LengthMode};
use bm25::scoring::{Bm25Config, Bm25Scorer, IntersectionBuffer};
use bm25::stats::TfIdf;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = vec![
        "search",
        "engine",
        "full",
        "text",
        "index",
        "query",
        "document",
        "field",
        "term",
        "phrase",
        "boolean",
        "vector",
        "similarity",
        "relevance",
        "score",
        "analysis",
        "tokenization",
        "stemming",
        "normalization",
        "clustering",
        "retrieval",
        "ranking",
        "filtering",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

/// Tokenize generated texts into documents over one vocabulary.
fn build_corpus(count: usize) -> (Vocabulary, Vec<Document>) {
    let tokenizer = WhitespaceTokenizer::new();
    let mut vocabulary = Vocabulary::new();
    let documents = generate_test_documents(count)
        .iter()
        .map(|text| vocabulary.add_text(&tokenizer, text))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    (vocabulary, documents)
}

/// Benchmark statistics construction.
fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    let (_, documents) = build_corpus(1000);

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("tfidf_from_documents", |b| {
        b.iter(|| {
            let stats = TfIdf::from_documents(LengthMode::Occurrences, black_box(&documents));
            black_box(stats)
        })
    });

    group.finish();
}

/// Benchmark scoring a corpus against a short query.
fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");

    let (vocabulary, documents) = build_corpus(5000);
    let stats = TfIdf::from_documents(LengthMode::Occurrences, &documents);
    let query: Document = ["relevance", "ranking", "query"]
        .iter()
        .filter_map(|word| vocabulary.get(word))
        .collect();
    let scorer = Bm25Scorer::new(Bm25Config::new(1.5, 0.75));

    group.throughput(Throughput::Elements(documents.len() as u64));

    group.bench_function("score_sequential", |b| {
        b.iter(|| {
            let scores = scorer.score(&stats, black_box(&query), &documents).unwrap();
            black_box(scores)
        })
    });

    group.bench_function("score_reused_buffer", |b| {
        let mut buffer = IntersectionBuffer::with_capacity(160);
        b.iter(|| {
            let scores = scorer
                .score_with_buffer(&stats, black_box(&query), &documents, &mut buffer)
                .unwrap();
            black_box(scores)
        })
    });

    group.bench_function("score_parallel", |b| {
        b.iter(|| {
            let scores = scorer
                .score_parallel(&stats, black_box(&query), &documents)
                .unwrap();
            black_box(scores)
        })
    });

    group.bench_function("score_and_rank_top_10", |b| {
        b.iter(|| {
            let scores = scorer.score(&stats, black_box(&query), &documents).unwrap();
            black_box(scores.top_k(10))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_statistics, bench_scoring);
criterion_main!(benches);
