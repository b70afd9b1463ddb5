use criterion::{black_box, criterion_group, criterion_main, Criterion};
use discord_api_types::{
    formatting::{self, MentionKind},
    routes::{
        self,
        query::{GetChannelMessagesQuery, Query},
    },
    Snowflake,
};

pub fn route_building(c: &mut Criterion) {
    let channel = Snowflake::from("175928847299117063");
    let message = Snowflake::from("175928847299117064");

    let mut group = c.benchmark_group("Routes");

    group.bench_function("Plain", |b| {
        b.iter(|| routes::rest::channel_message(black_box(&channel), black_box(&message)))
    });

    group.bench_function("Escaped emoji", |b| {
        b.iter(|| {
            routes::rest::channel_message_user_reaction(
                black_box(&channel),
                black_box(&message),
                black_box("\u{1F525}"),
                None,
            )
        })
    });

    group.bench_function("Query", |b| {
        let query = GetChannelMessagesQuery {
            limit: Some(100),
            before: Some(message.clone()),
            ..Default::default()
        };

        b.iter(|| black_box(&query).to_query_string())
    });

    group.finish();
}

pub fn mention_matching(c: &mut Criterion) {
    let text = "hi <@80351110224678912>, see <#175928847299117063> and ping <@&41771983423143936> or <@!80351110224678912>";

    let mut group = c.benchmark_group("Mentions");

    group.bench_function("Parse one", |b| {
        b.iter(|| formatting::parse_mention(black_box("<@!80351110224678912>")))
    });

    group.bench_function("Find users", |b| {
        b.iter(|| formatting::find_mentions(black_box(text), MentionKind::User))
    });

    group.finish();
}

criterion_group!(routing, route_building);
criterion_group!(mentions, mention_matching);
criterion_main!(routing, mentions);
