use std::hint::black_box;
use std::time::Instant;

use flycam_camera::step;
use flycam_common::{CameraPose, ControlScheme, MotionConfig};
use flycam_input::{Key, KeyState};
use glam::Vec3;

fn bench_step(label: &str, config: &MotionConfig, keys: &KeyState, iterations: usize) {
    let mut pose = CameraPose::looking_at(Vec3::new(10.0, 10.0, 10.0), Vec3::new(0.0, 10.0, 0.0));

    let start = Instant::now();
    for _ in 0..iterations {
        pose = step(black_box(config), black_box(pose), black_box(keys), black_box(1.0 / 60.0));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  {label} ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
    black_box(pose);
}

fn main() {
    println!("=== Camera Controller Benchmarks ===\n");

    let euler = MotionConfig::default();
    let strafe = MotionConfig {
        scheme: ControlScheme::Strafe,
        ..MotionConfig::default()
    };
    let idle = KeyState::new();
    let busy: KeyState = [Key::W, Key::A, Key::Q, Key::ArrowUp].into_iter().collect();

    println!("Euler scheme:");
    bench_step("idle", &euler, &idle, 1_000_000);
    bench_step("four keys held", &euler, &busy, 1_000_000);

    println!("\nStrafe scheme:");
    bench_step("idle", &strafe, &idle, 1_000_000);
    bench_step("four keys held", &strafe, &busy, 1_000_000);

    println!("\n=== Done ===");
}
