//! Benchmarks for restacking operations
//!
//! Run with: cargo bench stacking

use panelstack::model::PanelConfig;
use panelstack::{PanelId, PanelManager};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn manager_with_panels(count: usize) -> (PanelManager, Vec<PanelId>) {
    let mut manager = PanelManager::headless();
    let ids = (0..count)
        .map(|i| {
            manager
                .open(PanelConfig::non_modal().with_id(format!("panel-{}", i)))
                .expect("open panel")
        })
        .collect();
    (manager, ids)
}

// ============================================================================
// Opening and closing
// ============================================================================

#[divan::bench(args = [1, 10, 50, 200])]
fn open_non_modal_panels(count: usize) {
    let (manager, _) = manager_with_panels(count);
    divan::black_box(manager);
}

#[divan::bench(args = [10, 50, 200])]
fn close_all(bencher: divan::Bencher, count: usize) {
    bencher
        .with_inputs(|| manager_with_panels(count).0)
        .bench_local_values(|mut manager| divan::black_box(manager.close_all()));
}

// ============================================================================
// Modal toggling
// These restack every panel twice: disable on open, re-enable on close
// ============================================================================

#[divan::bench(args = [10, 50, 200])]
fn toggle_modal(bencher: divan::Bencher, count: usize) {
    let (mut manager, _) = manager_with_panels(count);
    let modal = manager
        .register(PanelConfig::modal().with_id("modal"))
        .expect("register modal");

    bencher.bench_local(|| {
        manager.show(&modal).expect("show modal");
        manager.hide(&modal).expect("hide modal")
    });
}

// ============================================================================
// Raising
// ============================================================================

#[divan::bench(args = [10, 50, 200])]
fn bring_bottom_to_front(bencher: divan::Bencher, count: usize) {
    let (mut manager, ids) = manager_with_panels(count);
    let mut next = 0;

    bencher.bench_local(|| {
        // The bottom panel cycles through every id
        let id = &ids[next % ids.len()];
        next += 1;
        manager.bring_to_front(id).expect("raise panel");
    });
}

#[divan::bench(args = [10, 50, 200])]
fn frontmost_lookup(bencher: divan::Bencher, count: usize) {
    let (manager, _) = manager_with_panels(count);

    bencher.bench_local(|| divan::black_box(manager.frontmost().map(|p| p.draw_index())));
}
