use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::fs;
use std::hint::black_box;
use tempfile::TempDir;

use project_collector::{
    Config, JsonReporter, ProjectCollector, ScanConfig, SilentListener, collect_document,
};

fn create_source_file(dir: &std::path::Path, name: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

fn setup_project(count: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    for i in 0..count {
        let content = format!(
            r#"import {{ useState }} from "react";

// Component {i}
export default function Widget{i}() {{
  const [count, setCount] = useState({i});
  return <button onClick={{() => setCount(count + 1)}}>{{count}}</button>;
}}
"#
        );
        let dir = temp_dir.path().join("src").join(format!("module_{}", i % 10));
        create_source_file(&dir, &format!("Widget{i}.jsx"), &content);
    }

    // Noise that must be pruned or skipped.
    let deps = temp_dir.path().join("node_modules").join("react");
    for i in 0..count {
        create_source_file(&deps, &format!("chunk{i}.js"), "module.exports = {};");
    }
    for i in 0..count / 10 {
        fs::write(
            temp_dir.path().join(format!("asset{i}.png")),
            [0x89, b'P', b'N', b'G'],
        )
        .unwrap();
    }

    temp_dir
}

fn benchmark_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect");

    for count in [10, 100, 500].iter() {
        let temp_dir = setup_project(*count);
        let collector = ProjectCollector::new(ScanConfig::new(
            temp_dir.path(),
            temp_dir.path().join("review.json"),
        ));

        group.bench_with_input(BenchmarkId::new("files", count), count, |b, _| {
            b.iter(|| {
                let result = collector.collect(black_box(&SilentListener));
                black_box(result)
            });
        });
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let temp_dir = setup_project(100);
    let config = Config {
        scan: ScanConfig::new(temp_dir.path(), temp_dir.path().join("review.json")),
        ..Default::default()
    };
    let (document, _) = collect_document(&config, &SilentListener).unwrap();
    let reporter = JsonReporter::new();

    c.bench_function("render_json", |b| {
        b.iter(|| {
            let output = reporter.render(black_box(&document));
            black_box(output)
        });
    });
}

criterion_group!(benches, benchmark_collect, benchmark_render);
criterion_main!(benches);
