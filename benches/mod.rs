use criterion::{criterion_group, criterion_main};

mod shell;

criterion_group!(
    benches,
    parser::bench_move,
    parser::bench_say,
    parser::bench_unknown_command,
    shell::bench_input_line
);
criterion_main!(benches);
