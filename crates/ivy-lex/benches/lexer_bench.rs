//! Lexer throughput benchmarks.
//!
//! Run with: `cargo bench --bench lexer_bench`

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use ivy_lex::lexer::Lexer;

const SAMPLE: &str = r#"
function fib(n) {
    if (n < 2) {
        return n;
    }
    return fib(n - 1) + fib(n - 2);
}

let result = fib(10);
"#;

fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(SAMPLE.len() as u64));

    group.bench_function("tokenize_fib", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(SAMPLE);
            loop {
                let tok = lexer.next_token().expect("sample source is valid");
                if tok.is_eof() {
                    break;
                }
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lexer);
criterion_main!(benches);
