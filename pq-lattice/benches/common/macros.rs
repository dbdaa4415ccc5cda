//! Benchmark macros to reduce boilerplate code

/// Creates a benchmark which runs `$closure` against data built once by `$setup`.
///
/// # Usage
/// ```rust
/// benchmark_with_setup_data!(my_bench, measurement_time, sample_size, group_name, setup, |b, data| { ... });
/// ```
#[macro_export]
macro_rules! benchmark_with_setup_data {
    ($func_name:ident, $measurement_time:expr, $sample_size:expr, $group_name:literal, $setup:expr, $closure:expr) => {
        fn $func_name(c: &mut Criterion) {
            let mut group = c.benchmark_group($group_name);
            group.measurement_time($measurement_time);
            group.sample_size($sample_size as usize);

            let setup_data = $setup();

            group.bench_function("benchmark", |b| $closure(b, &setup_data));

            group.finish();
        }
    };
    ($func_name:ident, $measurement_time:expr, $sample_size:expr, $group_name:literal, $setup:expr, $closure:expr,) => {
        benchmark_with_setup_data!($func_name, $measurement_time, $sample_size, $group_name, $setup, $closure);
    };
}

/// Creates a benchmark which runs `$closure` once per message size in `$sizes`.
///
/// # Usage
/// ```rust
/// benchmark_message_sizes!(my_bench, measurement_time, group_name, SIZES, setup, |b, data, message| { ... });
/// ```
#[macro_export]
macro_rules! benchmark_message_sizes {
    ($func_name:ident, $measurement_time:expr, $group_name:literal, $sizes:expr, $setup:expr, $closure:expr) => {
        fn $func_name(c: &mut Criterion) {
            let mut group = c.benchmark_group($group_name);
            group.measurement_time($measurement_time);

            let setup_data = $setup();

            for &size in $sizes {
                let message = generate_byte_array_random(size);
                group.throughput(criterion::Throughput::Bytes(size as u64));
                group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, message| {
                    $closure(b, &setup_data, message.as_slice())
                });
            }

            group.finish();
        }
    };
    ($func_name:ident, $measurement_time:expr, $group_name:literal, $sizes:expr, $setup:expr, $closure:expr,) => {
        benchmark_message_sizes!($func_name, $measurement_time, $group_name, $sizes, $setup, $closure);
    };
}
