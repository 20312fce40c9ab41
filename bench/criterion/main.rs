use criterion::criterion_group;
use criterion::criterion_main;

fn enclosing(name: &str) -> bool {
    bench_input::ENCLOSING.contains(&name)
}

fn gen_scan(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("scan");
    for (name, input) in bench_input::INPUTS {
        group.throughput(criterion::Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            input,
            |b, &input| {
                b.iter(|| shortcode::Parser::new(input, enclosing).count());
            },
        );
    }
}
criterion_group!(scan, gen_scan);

fn gen_canonical(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("canonical");
    for (name, input) in bench_input::INPUTS {
        group.throughput(criterion::Throughput::Elements(
            shortcode::Parser::new(input, enclosing).count() as u64,
        ));
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            input,
            |b, &input| {
                b.iter_with_large_drop(|| {
                    shortcode::Parser::new(input, enclosing)
                        .map(|e| match e {
                            shortcode::Event::Shortcode(s) => s.to_string(),
                            shortcode::Event::Text(s) | shortcode::Event::Error(s, _) => {
                                s.to_string()
                            }
                        })
                        .collect::<String>()
                });
            },
        );
    }
}
criterion_group!(canonical, gen_canonical);

fn gen_render(c: &mut criterion::Criterion) {
    let registry = shortcode::render::Registry::new()
        .self_closing("ref", |s| format!("[{}]", s.positional_value(0).unwrap_or("?")))
        .enclosing("quote", |s| {
            format!("<blockquote>{}</blockquote>", s.content().unwrap_or_default())
        })
        .enclosing("box", |s| format!("<div>{}</div>", s.content().unwrap_or_default()));
    let mut group = c.benchmark_group("render");
    for (name, input) in bench_input::INPUTS {
        group.throughput(criterion::Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            input,
            |b, &input| {
                b.iter_with_large_drop(|| registry.render(input));
            },
        );
    }
}
criterion_group!(render, gen_render);

criterion_main!(scan, canonical, render);
