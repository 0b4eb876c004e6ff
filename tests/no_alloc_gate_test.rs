use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_snake::core::{BoardSnapshot, GameSession};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{GameConfig, Position};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Straight run along the middle row with wrapping on; the food sits on row 0
/// so the snake never grows.
fn cruising_session() -> GameSession {
    let cfg = GameConfig::default().with_wrap(true);
    let mut s = GameSession::new(cfg, 1);
    s.place_food(Position::new(0, 0));
    s
}

#[test]
fn session_tick_and_render_are_allocation_free_after_warmup() {
    let mut s = cruising_session();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut snap = BoardSnapshot::new(0, 0);

    // Warm-up (initial sizing).
    s.tick(None);
    s.snapshot_into(&mut snap);
    view.render_into(&snap, None, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            s.tick(None);
            s.snapshot_into(&mut snap);
            view.render_into(&snap, None, viewport, &mut fb);
        }
    });

    assert!(!s.is_terminated());
    assert_eq!(allocs, 0);
}
