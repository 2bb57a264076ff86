//! Blockyard headless sandbox.
//!
//! Drives a scripted editing session through the editor command surface
//! and prints what a renderer would receive each step. Useful for
//! eyeballing engine behavior without a window.
//!
//! ```bash
//! cargo run -p blockyard-sandbox
//! ```
//!
//! Set `RUST_LOG` for more detail (e.g. `RUST_LOG=debug`).

use std::time::Instant;

use blockyard_editor::{Editor, ViewName};
use glam::Vec3;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(
        grid = blockyard_core::constants::GRID_SIZE,
        "blockyard sandbox starting"
    );

    let started = Instant::now();
    let mut editor = Editor::new();

    // A pool, a path, and a couple of trees.
    place(&mut editor, &started, (2.0, 0.0, 2.0), (5.0, 0.0, 4.0), "pool");
    place(&mut editor, &started, (7.0, 0.0, 0.0), (7.0, 0.0, 9.0), "path");
    place(&mut editor, &started, (10.0, 0.0, 3.0), (10.0, 0.0, 3.0), "tree");
    place(&mut editor, &started, (12.0, 0.0, 6.0), (12.0, 0.0, 6.0), "tree");

    // Try to drop a fence through the pool; the engine refuses and the
    // anchor stays armed, so retry next to it.
    editor.select_object_type("fence");
    click(&mut editor, &started, Vec3::new(3.0, 0.0, 3.0));
    click(&mut editor, &started, Vec3::new(3.0, 0.0, 3.0));
    info!(
        objects = editor.world().len(),
        "fence through the pool was rejected"
    );
    editor.cancel();
    place(&mut editor, &started, (0.0, 0.0, 6.0), (5.0, 0.0, 6.0), "fence");

    // Fly the camera left and tick it through the transition.
    let now = started.elapsed().as_secs_f64();
    editor.request_view(ViewName::Left, now);
    let mut t = now;
    while editor.camera().is_animating() {
        t += 1.0 / 60.0;
        editor.tick(t);
    }

    let snapshot = editor.snapshot();
    info!(
        objects = snapshot.objects.len(),
        occupied_cells = editor.world().occupancy().len(),
        view = ?editor.camera().current_view(),
        "session finished"
    );
    for obj in &snapshot.objects {
        info!(
            id = %obj.id,
            ty = obj.ty.id,
            cells = obj.positions.len(),
            "placed object"
        );
    }
}

fn click(editor: &mut Editor, started: &Instant, point: Vec3) {
    let now_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    if let Err(err) = editor.pointer_down(point, now_ms) {
        info!(%err, "pointer event dropped");
    }
}

fn place(
    editor: &mut Editor,
    started: &Instant,
    anchor: (f32, f32, f32),
    far: (f32, f32, f32),
    ty: &str,
) {
    editor.select_object_type(ty);
    click(editor, started, Vec3::new(anchor.0, anchor.1, anchor.2));
    click(editor, started, Vec3::new(far.0, far.1, far.2));
}
