//! Benchmarks for convsplit partitioning and JSON handling.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench partitioning -- split_points`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use convsplit::config::PartitionConfig;
use convsplit::core::{find_split_points, parse_dataset, partition_conversation, partition_dataset, to_json};
use convsplit::message::{ContentMessage, Message};
use convsplit::Conversation;

use chrono::{Duration, SecondsFormat, TimeZone, Utc};

// =============================================================================
// Test Data Generators
// =============================================================================

/// One message per hour, with a 30-day jump every `burst` messages.
fn generate_conversation(count: usize, burst: usize) -> Conversation {
    let mut time = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
    let mut messages = Vec::with_capacity(count);
    for i in 0..count {
        time += if i > 0 && i % burst == 0 {
            Duration::days(30)
        } else {
            Duration::hours(1)
        };
        let content = if i % 10 == 9 {
            String::new()
        } else {
            format!("Message number {i}")
        };
        messages.push(
            Message::new(content)
                .with_timestamp(time.to_rfc3339_opts(SecondsFormat::Secs, true))
                .with_field("sender", if i % 2 == 0 { "Alice" } else { "Bob" }),
        );
    }
    let openai = messages
        .iter()
        .enumerate()
        .filter(|(_, m)| m.has_content())
        .map(|(i, m)| {
            if i % 2 == 0 {
                ContentMessage::user(m.content())
            } else {
                ContentMessage::assistant(m.content())
            }
        })
        .collect();

    Conversation::new(messages, openai)
        .with_recipients(["Bob"])
        .with_num_participants(2)
        .with_source("imessage")
        .with_chat_type("direct")
}

fn generate_dataset(records: usize, messages_per_record: usize) -> Vec<Conversation> {
    (0..records)
        .map(|_| generate_conversation(messages_per_record, 50))
        .collect()
}

// =============================================================================
// Partitioning Benchmarks
// =============================================================================

fn bench_split_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_points");

    for size in [100_usize, 1_000, 10_000, 100_000] {
        let conv = generate_conversation(size, 100);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &conv, |b, conv| {
            b.iter(|| {
                let points = find_split_points(black_box(&conv.full_metadata_messages), 7.0).unwrap();
                black_box(points)
            });
        });
    }
    group.finish();
}

fn bench_partition_conversation(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition_conversation");
    let config = PartitionConfig::new();

    for size in [100_usize, 1_000, 10_000, 100_000] {
        let conv = generate_conversation(size, 100);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &conv, |b, conv| {
            b.iter(|| {
                let fragments = partition_conversation(black_box(conv), &config).unwrap();
                black_box(fragments)
            });
        });
    }
    group.finish();
}

fn bench_partition_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition_dataset");
    let dataset = generate_dataset(1_000, 200);
    group.throughput(Throughput::Elements(dataset.len() as u64));

    for jobs in [1_usize, 2, 4] {
        let config = PartitionConfig::new().with_jobs(jobs);
        group.bench_with_input(BenchmarkId::new("jobs", jobs), &dataset, |b, dataset| {
            b.iter(|| {
                let outcome = partition_dataset(black_box(dataset.clone()), &config).unwrap();
                black_box(outcome)
            });
        });
    }
    group.finish();
}

// =============================================================================
// JSON Benchmarks
// =============================================================================

fn bench_parse_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_dataset");

    for records in [10_usize, 100, 1_000] {
        let json = to_json(&generate_dataset(records, 100), false).unwrap();
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(records), &json, |b, json| {
            b.iter(|| {
                let dataset = parse_dataset(black_box(json)).unwrap();
                black_box(dataset)
            });
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let config = PartitionConfig::new();

    for records in [10_usize, 100, 1_000] {
        let json = to_json(&generate_dataset(records, 100), false).unwrap();
        group.throughput(Throughput::Elements(records as u64));
        group.bench_with_input(BenchmarkId::from_parameter(records), &json, |b, json| {
            b.iter(|| {
                let dataset = parse_dataset(black_box(json)).unwrap();
                let outcome = partition_dataset(dataset, &config).unwrap();
                let out = to_json(&outcome.conversations, true).unwrap();
                black_box(out)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_split_points,
    bench_partition_conversation,
    bench_partition_dataset,
    bench_parse_dataset,
    bench_full_pipeline,
);

criterion_main!(benches);
