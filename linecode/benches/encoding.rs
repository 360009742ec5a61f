use std::hint::black_box;

use criterion::{
    Criterion,
    Throughput,
    criterion_group,
    criterion_main,
};
use linecode::{
    BitSequence,
    Scheme,
    timeline::project,
};

pub fn bench_encoding(c: &mut Criterion) {
    let num_bits = 0x10000;

    let mut group = c.benchmark_group("encoding");
    group.throughput(Throughput::Elements(num_bits as u64));

    // deterministic, but not periodic in any way the codes would care about
    let text = (0..num_bits)
        .map(|i: u32| if (i.wrapping_mul(2654435761) >> 7) & 1 == 1 { '1' } else { '0' })
        .collect::<String>();
    let bits = BitSequence::from(text.as_str());

    for scheme in Scheme::ALL {
        group.bench_function(scheme.name(), |b| {
            b.iter(|| black_box(scheme.encode(black_box(&bits))));
        });
    }

    group.bench_function("parse and project", |b| {
        b.iter(|| {
            let bits = BitSequence::from(black_box(text.as_str()));
            let samples = Scheme::DifferentialManchester.encode(&bits);
            black_box(project(&samples, Scheme::DifferentialManchester.time_base()))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encoding);
criterion_main!(benches);
