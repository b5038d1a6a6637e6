use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wirespin::buffer::VertexBuffer;
use wirespin::math::vec3::Vec3;
use wirespin::mesh::{LoadOptions, Mesh};
use wirespin::render::{Renderer, WireframeRasterizer};
use wirespin::transform::{self, Spin};

const VIEWPORT: u32 = 600;

/// A grid of `n` x `n` quads in the XY plane, as OBJ text.
fn grid_obj(n: usize) -> String {
    let mut obj = String::new();
    for y in 0..=n {
        for x in 0..=n {
            obj.push_str(&format!("v {} {} 0\n", x as f32 / n as f32, y as f32 / n as f32));
        }
    }
    let row = n + 1;
    for y in 0..n {
        for x in 0..n {
            let a = y * row + x + 1;
            obj.push_str(&format!("f {} {} {} {}\n", a, a + 1, a + row + 1, a + row));
        }
    }
    obj
}

fn grid_buffer(n: usize) -> VertexBuffer {
    let mesh = Mesh::parse_obj(grid_obj(n).as_bytes(), &LoadOptions::default())
        .expect("generated grid is valid OBJ");
    VertexBuffer::from_mesh(&mesh, 1.0)
}

fn benchmark_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    for n in [10, 50, 100] {
        let obj = grid_obj(n);
        group.bench_with_input(BenchmarkId::new("parse_obj", n * n), &obj, |b, obj| {
            b.iter(|| Mesh::parse_obj(black_box(obj.as_bytes()), &LoadOptions::default()))
        });
    }
    group.finish();
}

fn benchmark_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let spin = Spin::default();
    let rasterizer = WireframeRasterizer::with_viewport(VIEWPORT, VIEWPORT);
    let mut renderer = Renderer::new(VIEWPORT, VIEWPORT);

    for n in [10, 50, 100] {
        let triangles = n * n * 2;

        let mut buffer = grid_buffer(n);
        group.bench_function(BenchmarkId::new("spin", triangles), |b| {
            b.iter(|| transform::spin(black_box(&mut buffer), &spin))
        });

        let buffer = grid_buffer(n);
        group.bench_function(BenchmarkId::new("render", triangles), |b| {
            b.iter(|| rasterizer.render(black_box(&buffer), &mut renderer))
        });
    }
    group.finish();

    let mut buffer = grid_buffer(50);
    c.bench_function("rotate_oblique_axis", |b| {
        b.iter(|| transform::rotate(black_box(&mut buffer), Vec3::new(1.0, 1.0, 0.0), 1.0))
    });
}

criterion_group!(benches, benchmark_load, benchmark_frame);
criterion_main!(benches);
