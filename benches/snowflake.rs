use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use discord_api_types::{Permissions, Snowflake};

pub fn snowflake_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("Snowflake");

    for id in ["175928847299117063", "1234567890123456789012"] {
        let snowflake = Snowflake::from(id);

        group.bench_with_input(BenchmarkId::new("To u64", id.len()), &snowflake, |b, s| {
            b.iter(|| black_box(s.to_u64()))
        });

        group.bench_with_input(BenchmarkId::new("Timestamp", id.len()), &snowflake, |b, s| {
            b.iter(|| black_box(s.timestamp_ms()))
        });
    }

    group.bench_function("From timestamp", |b| {
        b.iter(|| Snowflake::from_timestamp_ms(black_box(1_462_015_105_796)))
    });

    group.finish();
}

pub fn snowflake_serde(c: &mut Criterion) {
    let mut group = c.benchmark_group("Snowflake Serde");

    group.bench_function("From string", |b| {
        b.iter(|| serde_json::from_str::<Snowflake>(black_box("\"175928847299117063\"")))
    });

    group.bench_function("From integer", |b| {
        b.iter(|| serde_json::from_str::<Snowflake>(black_box("175928847299117063")))
    });

    group.finish();
}

pub fn permission_checks(c: &mut Criterion) {
    let perms = Permissions::from("2251799813685247");

    c.bench_function("Permission flags", |b| b.iter(|| black_box(perms.flags())));
}

criterion_group!(views, snowflake_views, snowflake_serde);
criterion_group!(permissions, permission_checks);
criterion_main!(views, permissions);
