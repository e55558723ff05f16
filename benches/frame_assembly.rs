use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orbit_view::core::{Button, FramebufferSize, InputEvent};
use orbit_view::math::{perspective_projection, rotation_y, translation, Mat44f, Vec3f};
use orbit_view::{CameraState, FrameAssembler};

fn active_camera() -> CameraState {
    let mut camera = CameraState::default();
    let _ = camera.handle_input(&InputEvent::press(Button::ToggleCamera));
    camera.cursor_moved(120.0, 40.0);
    camera
}

/// Benchmark: single 4x4 product
fn bench_mat_mul(c: &mut Criterion) {
    let a = rotation_y(0.7) * translation(Vec3f::new(1.0, 2.0, 3.0));
    let b = perspective_projection(1.0, 1.5, 0.1, 100.0);

    c.bench_function("mat44_mul", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

/// Benchmark: projection + view rebuild and one model transform
fn bench_begin_frame(c: &mut Criterion) {
    let assembler = FrameAssembler::default();
    let camera = active_camera();
    let size = FramebufferSize::new(1280, 720);

    c.bench_function("frame_begin_single_object", |bench| {
        bench.iter(|| {
            let frame = assembler.begin(black_box(&camera), black_box(size));
            black_box(frame.map(|f| f.model_view_projection(Mat44f::IDENTITY)))
        })
    });
}

/// Benchmark: full assembly across scene sizes
fn bench_assemble_scaling(c: &mut Criterion) {
    let assembler = FrameAssembler::default();
    let camera = active_camera();
    let size = FramebufferSize::new(1920, 1080);

    let mut group = c.benchmark_group("frame_assemble");
    for count in [2usize, 64, 1024] {
        let models: Vec<Mat44f> = (0..count)
            .map(|i| rotation_y(i as f32 * 0.01) * translation(Vec3f::new(i as f32, 0.0, 0.0)))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &models, |bench, models| {
            bench.iter(|| black_box(assembler.assemble(&camera, size, models)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mat_mul, bench_begin_frame, bench_assemble_scaling);
criterion_main!(benches);
