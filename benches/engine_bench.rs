use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use outline_annotator::{resolve_loop, resolve_split, Curve, Point};
use std::f64::consts::TAU;
use std::hint::black_box;

/// Lasso-Geste um (200, 200): beginnt innerhalb des Kreises, läuft den Kreis
/// fast ganz ab und kreuzt am Ende einmal quer über das Anfangsstück.
fn build_lasso_gesture(point_count: usize) -> Vec<Point> {
    let center = Point::new(200.0, 200.0);
    let arc_count = point_count.max(4) - 2;
    let (arc_start, arc_end) = (0.2, TAU - 0.2);

    let mut gesture = Vec::with_capacity(arc_count + 2);
    gesture.push(center + Point::new(60.0, -40.0));
    gesture.extend((0..arc_count).map(|i| {
        let angle = arc_start + (arc_end - arc_start) * i as f64 / (arc_count - 1) as f64;
        center + Point::new(100.0 * angle.cos(), 100.0 * angle.sin())
    }));
    gesture.push(center + Point::new(80.0, 40.0));
    gesture
}

fn build_circle_ring(point_count: usize) -> Curve {
    let points: Vec<Point> = (0..point_count)
        .map(|i| {
            let angle = TAU * i as f64 / point_count as f64;
            Point::new(200.0 + 100.0 * angle.cos(), 200.0 + 100.0 * angle.sin())
        })
        .collect();
    Curve::new(points).closed()
}

fn bench_resolve_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_loop");

    for &point_count in &[100usize, 1_000usize] {
        let gesture = build_lasso_gesture(point_count);
        assert!(
            resolve_loop(&gesture).is_ok(),
            "Lasso-Geste muss sich schließen lassen"
        );
        group.bench_with_input(
            BenchmarkId::new("lasso", point_count),
            &gesture,
            |b, gesture| b.iter(|| black_box(resolve_loop(black_box(gesture)))),
        );
    }

    group.finish();
}

fn bench_resolve_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_split");

    for &point_count in &[100usize, 1_000usize] {
        let parent = build_circle_ring(point_count);
        let gesture = vec![Point::new(230.0, 80.0), Point::new(230.0, 320.0)];
        assert!(
            resolve_split(&parent, &gesture).is_ok(),
            "senkrechter Schnitt muss eine Kind-Region liefern"
        );
        group.bench_with_input(
            BenchmarkId::new("vertical_cut", point_count),
            &parent,
            |b, parent| b.iter(|| black_box(resolve_split(black_box(parent), &gesture))),
        );
    }

    group.finish();
}

criterion_group!(engine_benches, bench_resolve_loop, bench_resolve_split);
criterion_main!(engine_benches);
