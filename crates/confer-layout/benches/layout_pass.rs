//! Layout pass benchmarks.

use confer_core::{CameraDockPosition, DeviceContext, DeviceType, LayoutInput};
use confer_layout::{CollectingSink, LayoutEngine, LayoutTrigger, MemoryStore};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn busy_input() -> LayoutInput {
    let mut input = LayoutInput::default();
    input.camera_dock.position = CameraDockPosition::Top;
    input.camera_dock.num_cameras = 6;
    input.presentation.is_open = true;
    input.presentation.slide_count = 5;
    input.screen_share.has_screen_share = true;
    input.screen_share.width = 1280.0;
    input.screen_share.height = 720.0;
    input.sidebar_navigation.is_open = true;
    input.sidebar_content.is_open = true;
    input.captions.has_captions = true;
    input
}

fn compute_desktop(c: &mut Criterion) {
    let input = busy_input();
    let device = DeviceContext::new(DeviceType::Desktop, 1920.0, 1080.0);
    let mut engine = LayoutEngine::new(MemoryStore::new());
    c.bench_function("compute_desktop", |b| {
        b.iter(|| engine.compute(black_box(&input), black_box(&device)))
    });
}

fn compute_mobile(c: &mut Criterion) {
    let input = busy_input();
    let device = DeviceContext::new(DeviceType::Mobile, 375.0, 667.0);
    let mut engine = LayoutEngine::new(MemoryStore::new());
    c.bench_function("compute_mobile", |b| {
        b.iter(|| engine.compute(black_box(&input), black_box(&device)))
    });
}

fn resize_burst(c: &mut Criterion) {
    c.bench_function("resize_burst", |b| {
        b.iter(|| {
            let mut trigger =
                LayoutTrigger::new(LayoutEngine::new(MemoryStore::new()), CollectingSink::new());
            trigger.set_input(busy_input());
            trigger.set_device_type(Some(DeviceType::Desktop));
            for step in 0..100 {
                let now = step as f64 * 5.0;
                trigger.resize(1920.0 - step as f64, 1080.0, black_box(now));
                trigger.tick(now);
            }
        })
    });
}

criterion_group!(benches, compute_desktop, compute_mobile, resize_burst);
criterion_main!(benches);
