//! 节点过滤与 store 变更基准测试

use std::hint::black_box;

use chatflow::flow::{Flow, FlowNode, FlowStore, NodeKind, NodePatch, StoreOptions};
use chatflow::services::{filter_nodes, matching_ids};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn build_nodes(count: usize) -> Vec<FlowNode> {
    (0..count)
        .map(|i| {
            let tags: &[&str] = if i % 10 == 0 { &["vip", "promo"] } else { &["newsletter"] };
            FlowNode::new(NodeKind::Text)
                .with_message(format!("Message number {} about our summer sale", i))
                .with_tags(tags.iter().copied())
        })
        .collect()
}

// ============== filter_nodes 基准测试 ==============

fn bench_filter_nodes(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/filter_nodes");

    for size in [10usize, 100, 1_000] {
        let nodes = build_nodes(size);

        group.bench_with_input(BenchmarkId::new("empty_term", size), &nodes, |b, nodes| {
            b.iter(|| filter_nodes(black_box(nodes), ""));
        });

        // 标签命中约 10%
        group.bench_with_input(BenchmarkId::new("tag_hit", size), &nodes, |b, nodes| {
            b.iter(|| filter_nodes(black_box(nodes), "VIP"));
        });

        group.bench_with_input(BenchmarkId::new("no_match", size), &nodes, |b, nodes| {
            b.iter(|| filter_nodes(black_box(nodes), "zzz-not-present"));
        });
    }

    group.finish();
}

fn bench_matching_ids(c: &mut Criterion) {
    let nodes = build_nodes(1_000);
    c.bench_function("filter/matching_ids_1000", |b| {
        b.iter(|| matching_ids(black_box(&nodes), "sale"));
    });
}

// ============== FlowStore 基准测试 ==============

fn bench_store_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("store/update_node");

    for size in [10usize, 100, 1_000] {
        let flow = match Flow::from_nodes(build_nodes(size)) {
            Ok(flow) => flow,
            Err(e) => panic!("bench flow invalid: {}", e),
        };
        let target = flow.nodes[size / 2].id.clone();

        group.bench_with_input(BenchmarkId::from_parameter(size), &flow, |b, flow| {
            b.iter_batched(
                || FlowStore::new(flow.clone(), StoreOptions::default()),
                |mut store| store.update_node(&target, NodePatch::new().delay_seconds(30)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_filter_nodes,
    bench_matching_ids,
    bench_store_update
);
criterion_main!(benches);
