use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Flat object with numeric and short string members
fn write_flat_object(sink: &mut Vec<u8>, members: usize) {
    let mut object = scrawl_json::object(sink).unwrap();
    for i in 0..members {
        let name = format!("field{}", i);
        object = if i % 2 == 0 {
            object.with(&name, i as u64).unwrap()
        } else {
            object.with(&name, "value").unwrap()
        };
    }
    object.close().unwrap().finish();
}

/// Array of small objects, the log-record shape
fn write_record_array(sink: &mut Vec<u8>, records: usize) {
    let users = ["alice", "bob", "carol", "dave", "eve"];
    let mut array = scrawl_json::array(sink).unwrap();
    for i in 0..records {
        array = array
            .object()
            .unwrap()
            .with("timestamp", 1_600_000_000u64 + i as u64)
            .unwrap()
            .with("user", users[i % users.len()])
            .unwrap()
            .with("active", i % 3 == 0)
            .unwrap()
            .close()
            .unwrap();
    }
    array.close().unwrap().finish();
}

/// String content where every few characters needs escaping
fn write_escape_heavy(sink: &mut Vec<u8>, values: usize) {
    let text = "path=\"C:\\temp\"\nline two\twith tabs";
    let mut array = scrawl_json::array(sink).unwrap();
    for _ in 0..values {
        array = array.push(text).unwrap();
    }
    array.close().unwrap().finish();
}

fn bench_flat_objects(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_object");
    for &members in &[10usize, 100, 1_000] {
        let mut probe = Vec::new();
        write_flat_object(&mut probe, members);
        group.throughput(Throughput::Bytes(probe.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(members), &members, |b, &members| {
            b.iter(|| {
                let mut out = Vec::with_capacity(16 * 1024);
                write_flat_object(&mut out, members);
                black_box(out);
            });
        });
    }
    group.finish();
}

fn bench_record_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_array");
    for &records in &[100usize, 1_000] {
        let mut probe = Vec::new();
        write_record_array(&mut probe, records);
        group.throughput(Throughput::Bytes(probe.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(records), &records, |b, &records| {
            b.iter(|| {
                let mut out = Vec::with_capacity(64 * 1024);
                write_record_array(&mut out, records);
                black_box(out);
            });
        });
    }
    group.finish();
}

fn bench_escape_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_heavy");
    for &values in &[100usize, 1_000] {
        let mut probe = Vec::new();
        write_escape_heavy(&mut probe, values);
        group.throughput(Throughput::Bytes(probe.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(values), &values, |b, &values| {
            b.iter(|| {
                let mut out = Vec::with_capacity(64 * 1024);
                write_escape_heavy(&mut out, values);
                black_box(out);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_flat_objects,
    bench_record_arrays,
    bench_escape_heavy
);
criterion_main!(benches);
