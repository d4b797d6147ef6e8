#[macro_use]
extern crate criterion;

use criterion::Criterion;
use svgpath::geom::LengthOptions;
use svgpath::parse;

// The outline of a glyph-like shape mixing every kind of command, repeated to
// get a path of a realistic size.
const SHAPE: &str = "m 1672.2372,-54.8161 a 14.5445,14.5445 0 0 0 -11.3152,23.6652 \
    l 27.2573,27.2572 27.2572,-27.2572 a 14.5445,14.5445 0 0 0 -11.3012,-23.634 \
    a 14.5445,14.5445 0 0 0 -11.414,5.4625 l -4.542,4.5420 l -4.5437,-4.5420 \
    a 14.5445,14.5445 0 0 0 -11.3984,-5.4937 z \
    M100,200 C100,100 250,100 250,200 S400,300 400,200 \
    M200,300 Q400,50 600,300 T1000,300 h-150 v 20 z";

fn path_data() -> String {
    let mut src = String::new();
    for _ in 0..100 {
        src.push_str(SHAPE);
        src.push(' ');
    }
    src
}

fn parsing(c: &mut Criterion) {
    let src = path_data();
    c.bench_function("parse", |b| {
        b.iter(|| std::hint::black_box(parse(&src).unwrap()))
    });
}

fn measuring(c: &mut Criterion) {
    let path = parse(&path_data()).unwrap();
    let mut g = c.benchmark_group("length");
    g.bench_function("default", |b| {
        b.iter(|| std::hint::black_box(path.clone().length(&LengthOptions::DEFAULT)))
    });
    g.bench_function("coarse", |b| {
        let options = LengthOptions::DEFAULT.with_error(1e-6).with_min_depth(2);
        b.iter(|| std::hint::black_box(path.clone().length(&options)))
    });
    g.finish();
}

fn sampling(c: &mut Criterion) {
    let mut path = parse(&path_data()).unwrap();
    path.length(&LengthOptions::DEFAULT);
    c.bench_function("point", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..1000 {
                if let Some(p) = path.point(i as f64 / 1000.0) {
                    sum += p.x + p.y;
                }
            }
            std::hint::black_box(sum)
        })
    });
}

fn serializing(c: &mut Criterion) {
    let path = parse(&path_data()).unwrap();
    c.bench_function("d", |b| b.iter(|| std::hint::black_box(path.d())));
}

criterion_group!(benches, parsing, measuring, sampling, serializing);
criterion_main!(benches);
