use chrono::DateTime;
use criterion::{criterion_group, criterion_main, Criterion};
use stashmark::export::MarkdownExporter;
use stashmark::models::{
    ArticleBookmark, BaseFields, CodeBookmark, Collection, DesignBookmark, GenericBookmark,
};
use stashmark::search::search;
use stashmark::JsonStore;
use tempfile::TempDir;

fn populated(per_kind: usize) -> Collection {
    let now = DateTime::parse_from_rfc3339("2024-05-01T09:30:00+02:00").unwrap();
    let mut c = Collection::new();
    for i in 0..per_kind {
        let base = |kind: &str| {
            BaseFields::new(
                format!("https://example.com/{}/{}", kind, i),
                format!("{} Title {}", kind, i),
                now,
            )
            .with_notes("Description")
            .with_tags(vec!["tag1".into(), "tag2".into()])
        };
        c.push(DesignBookmark::new(base("design"), "website", "saas", "dark").into());
        c.push(CodeBookmark::new(base("code"), "rust", "Use an iterator").into());
        c.push(
            ArticleBookmark::new(base("article"), "blog")
                .with_reading_time(7)
                .into(),
        );
        c.push(GenericBookmark::new(base("generic"), "misc").into());
    }
    c
}

fn bench_collection_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_operations");
    let collection = populated(250);

    group.bench_function("search (1000 bookmarks)", |b| {
        b.iter(|| search(&collection, "TITLE 42"));
    });

    group.bench_function("export markdown (1000 bookmarks)", |b| {
        b.iter(|| MarkdownExporter.render(&collection));
    });

    group.bench_function("save (1000 bookmarks)", |b| {
        b.iter_with_setup(
            || {
                let dir = TempDir::new().unwrap();
                let store = JsonStore::new(dir.path().join("bookmarks.json"));
                (dir, store)
            },
            |(_dir, store)| {
                store.save(&collection).unwrap();
            },
        );
    });

    group.bench_function("load (1000 bookmarks)", |b| {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("bookmarks.json"));
        store.save(&collection).unwrap();
        b.iter(|| store.load().unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_collection_ops);
criterion_main!(benches);
