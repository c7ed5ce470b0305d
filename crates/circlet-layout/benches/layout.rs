//! Benchmarks for circular layout passes.

use circlet_core::{Angle, Constraints, Insets, Rect, Size};
use circlet_layout::{
    compute_layout, ellipse_radius_at, ChildBox, ChildId, CircleLayout, CircleParams, Strategy,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn ring_of(n: usize, width: f32, height: f32) -> Vec<ChildBox> {
    (0..n)
        .map(|i| ChildBox::new(width + (i % 5) as f32, height).with_id(i as u64))
        .collect()
}

fn bench_circular_4_children(c: &mut Criterion) {
    let area = Rect::new(0.0, 0.0, 200.0, 200.0);
    let children = ring_of(4, 20.0, 20.0);
    let params = CircleParams::new();

    c.bench_function("circular_4_children", |b| {
        b.iter(|| compute_layout(black_box(area), black_box(&children), black_box(&params)))
    });
}

fn bench_circular_100_children(c: &mut Criterion) {
    let area = Rect::new(0.0, 0.0, 800.0, 600.0);
    let children = ring_of(100, 30.0, 30.0);
    let params = CircleParams::new().center_element(ChildId(0));

    c.bench_function("circular_100_children_with_center", |b| {
        b.iter(|| compute_layout(black_box(area), black_box(&children), black_box(&params)))
    });
}

fn bench_oval_100_children(c: &mut Criterion) {
    let area = Rect::new(0.0, 0.0, 800.0, 600.0);
    let children = ring_of(100, 60.0, 20.0);
    let params = CircleParams::new().strategy(Strategy::Oval);

    c.bench_function("oval_100_children", |b| {
        b.iter(|| compute_layout(black_box(area), black_box(&children), black_box(&params)))
    });
}

fn bench_container_cached(c: &mut Criterion) {
    let mut layout = CircleLayout::new(Size::square(400.0));
    for child in ring_of(24, 30.0, 30.0) {
        layout.push_child(child);
    }
    layout.set_padding(Insets::uniform(8.0));

    c.bench_function("container_cached_layout", |b| {
        b.iter(|| layout.layout().len())
    });
}

fn bench_container_angle_sweep(c: &mut Criterion) {
    let mut layout = CircleLayout::new(Size::square(400.0));
    for child in ring_of(24, 30.0, 30.0) {
        layout.push_child(child);
    }
    let mut degrees = 0.0f32;

    c.bench_function("container_angle_offset_sweep", |b| {
        b.iter(|| {
            degrees = (degrees + 1.0) % 360.0;
            layout
                .set_angle_offset_degrees(black_box(degrees))
                .expect("finite offset");
            layout.layout().len()
        })
    });
}

fn bench_geometry_helpers(c: &mut Criterion) {
    let constraints = Constraints::loose(Size::new(800.0, 600.0));
    let size = Size::new(500.0, 900.0);

    c.bench_function("constraints_constrain", |b| {
        b.iter(|| constraints.constrain(black_box(size)))
    });

    c.bench_function("ellipse_radius_at", |b| {
        b.iter(|| ellipse_radius_at(black_box(120.0), black_box(80.0), black_box(Angle::from_degrees(37.0))))
    });
}

criterion_group!(
    benches,
    bench_circular_4_children,
    bench_circular_100_children,
    bench_oval_100_children,
    bench_container_cached,
    bench_container_angle_sweep,
    bench_geometry_helpers,
);
criterion_main!(benches);
