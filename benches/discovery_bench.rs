use criterion::{criterion_group, criterion_main, Criterion};
use harness_runner::core::discovery::{collect_candidates, select_artifacts, ArtifactFilter};
use harness_runner::infra::fs::relative_listing;
use std::fs;
use tempfile::TempDir;

fn build_tree() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    for dir in 0..10 {
        let sub = root.path().join(format!("suite_{dir}")).join("nested");
        fs::create_dir_all(&sub).unwrap();
        for file in 0..20 {
            let ext = if file % 2 == 0 { "exe" } else { "cpp" };
            fs::write(sub.join(format!("case_{file}.{ext}")), "").unwrap();
        }
    }
    root
}

fn bench_discovery(c: &mut Criterion) {
    let tree = build_tree();
    let filter = ArtifactFilter::from_extensions(&["exe"]);

    c.bench_function("collect_and_select_artifacts", |b| {
        b.iter(|| {
            let candidates = collect_candidates(tree.path(), "en");
            select_artifacts(candidates, &filter)
        });
    });

    c.bench_function("relative_listing", |b| {
        b.iter(|| relative_listing(tree.path()).unwrap());
    });
}

criterion_group!(benches, bench_discovery);
criterion_main!(benches);
