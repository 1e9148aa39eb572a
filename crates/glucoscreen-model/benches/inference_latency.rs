//! Latency benchmark for single-request inference
//!
//! The whole request path is one scaler pass plus one small forward pass;
//! this keeps an eye on the only cost that matters per call.
//!
//! Run with: cargo bench -p glucoscreen-model

use candle_core::{DType, Device};
use candle_nn::VarBuilder;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glucoscreen_core::FeatureVector;
use glucoscreen_model::{DiabetesPredictor, RiskClassifier, RiskNet, StandardScaler};
use tokio::runtime::Runtime;

fn benchmark_single_assessment(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let device = Device::Cpu;
    let vb = VarBuilder::zeros(DType::F32, &device);
    let net = RiskNet::new(vb).expect("Failed to build network");
    let predictor = DiabetesPredictor::new(StandardScaler::identity(), net, device);

    let cases = vec![
        ("all_zero", FeatureVector::default()),
        (
            "typical",
            FeatureVector::from_array([2.0, 148.0, 72.0, 35.0, 94.0, 33.6, 0.627, 50.0]),
        ),
    ];

    let mut group = c.benchmark_group("single_assessment");
    group.sample_size(100);

    for (name, features) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                rt.block_on(async { predictor.assess(black_box(&features)).await.unwrap() })
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_assessment);
criterion_main!(benches);
