use cmdparser::parser::{Argument, Response};
use cmdparser::system::shell::Shell;
use core::fmt::Write;
use criterion::{Criterion, Throughput};
use std::hint::black_box;

fn add_handler(args: &[Argument<32>], response: &mut Response<64>) {
    let a = args[0].as_int64().unwrap_or_default();
    let b = args[1].as_int64().unwrap_or_default();
    let _ = write!(response, "{}", a.wrapping_add(b));
}

pub fn bench_input_line(c: &mut Criterion) {
    let mut shell: Shell = Shell::new();
    shell.set_echo(false);
    shell.set_output_function(|text| {
        black_box(text);
    });
    shell
        .register_command("add", "ii", add_handler)
        .expect("Failed to register");

    let line = b"add 12345 -678\r";
    let mut group = c.benchmark_group("shell_input");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("shell_input", |b| {
        b.iter(|| shell.input(black_box(line)).expect("Failed to process input"))
    });
    group.finish();
}
