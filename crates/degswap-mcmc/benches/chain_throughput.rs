use criterion::{criterion_group, criterion_main, Criterion};
use degswap_graph::WeightMatrix;
use degswap_mcmc::{swap_uniform, swap_weighted};

fn sample_graph(vertices: u32) -> (Vec<u32>, Vec<u32>) {
    let mut tails = Vec::new();
    let mut heads = Vec::new();
    for v in 0..vertices {
        for offset in [1, 3] {
            tails.push(v);
            heads.push((v + offset) % vertices);
        }
    }
    (tails, heads)
}

fn sample_weights(vertices: usize) -> WeightMatrix {
    let values = (0..vertices * vertices)
        .map(|cell| 0.5 + (cell % 7) as f64 / 4.0)
        .collect();
    WeightMatrix::new(vertices, vertices, values).unwrap()
}

fn bench_chains(c: &mut Criterion) {
    let (tails, heads) = sample_graph(200);
    let weights = sample_weights(200);
    let zero_tails: Vec<u32> = (0..200).collect();
    let zero_heads = zero_tails.clone();

    c.bench_function("uniform_chain_10k", |b| {
        b.iter(|| {
            let _ = swap_uniform(tails.clone(), heads.clone(), 10_000, 0.5, Some(42)).unwrap();
        })
    });

    c.bench_function("weighted_chain_10k", |b| {
        b.iter(|| {
            let _ = swap_weighted(
                tails.clone(),
                heads.clone(),
                10_000,
                &weights,
                &zero_tails,
                &zero_heads,
                Some(42),
            )
            .unwrap();
        })
    });
}

criterion_group!(benches, bench_chains);
criterion_main!(benches);
