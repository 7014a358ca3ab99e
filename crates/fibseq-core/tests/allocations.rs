//! Verifies that `Generator::next` never touches the heap.
//!
//! Installs a counting global allocator for this test binary. Counts are kept
//! per thread so the test harness's own allocations on other threads do not
//! leak into the measurement.
#![allow(unsafe_code)]

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use fibseq_core::{Generator, SEQUENCE_LEN};

struct CountingAllocator;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn record_allocation() {
    let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
}

// SAFETY: delegates every operation to the system allocator unchanged.
unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        record_allocation();
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        record_allocation();
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        record_allocation();
        unsafe { System.realloc(ptr, layout, new_size) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn allocations_during(f: impl FnOnce()) -> usize {
    let before = ALLOCATIONS.with(Cell::get);
    f();
    ALLOCATIONS.with(Cell::get) - before
}

// Single test so nothing else runs on this thread between the two reads.
#[test]
fn next_never_allocates() {
    let generator = Generator::new();

    let mut worst = 0;
    for _ in 0..SEQUENCE_LEN {
        worst = worst.max(allocations_during(|| {
            let _ = std::hint::black_box(generator.next());
        }));
    }
    assert_eq!(worst, 0, "expected zero allocations on next()");

    let overflow = allocations_during(|| {
        let result = std::hint::black_box(generator.next());
        assert!(result.is_err());
    });
    assert_eq!(overflow, 0, "expected zero allocations on overflowing next()");
}
