//! Parser throughput benchmarks.
//!
//! Run with: `cargo bench --bench parser_bench`

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use ivy_par::Parser;

const SAMPLE: &str = r#"
function fib(n) {
    if (n <= 1) {
        return n;
    }
    return fib(n - 1) + fib(n - 2);
}

let i = 0;
let total = 0;
while (i < 10) {
    total = total + fib(i);
    i = i + 1;
}
total;
"#;

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");
    group.throughput(Throughput::Bytes(SAMPLE.len() as u64));

    group.bench_function("parse_fib_loop", |b| {
        b.iter(|| {
            let mut parser = Parser::new(SAMPLE).expect("sample source lexes");
            parser.parse_program().expect("sample source parses")
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parser);
criterion_main!(benches);
