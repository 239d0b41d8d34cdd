// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use wpapsk_alloc::{AllocBehaviour, AllocError, BufferAllocator};

use crate::lane_buffer::LaneBuffer;

fn buffer(slots: usize, words_per_slot: usize, group: usize) -> LaneBuffer {
    LaneBuffer::new(&BufferAllocator::new(), slots, words_per_slot, group)
        .expect("Failed to allocate lane buffer")
}

#[test]
fn test_new_buffer_is_zeroized() {
    let buf = buffer(8, 5, 4);

    assert!(buf.is_zeroized());
    assert_eq!(buf.read::<5>(7), [0; 5]);
}

#[test]
fn test_write_then_read_per_slot() {
    let mut buf = buffer(8, 5, 4);

    for slot in 0..8 {
        let base = slot as u32 * 10;
        buf.write(slot, 0, &[base, base + 1, base + 2, base + 3, base + 4]);
    }

    for slot in 0..8 {
        let base = slot as u32 * 10;
        assert_eq!(buf.read::<5>(slot), [base, base + 1, base + 2, base + 3, base + 4]);
    }
}

#[test]
fn test_group_layout_is_word_major() {
    let mut buf = buffer(8, 3, 4);

    for slot in 0..8 {
        let s = slot as u32;
        buf.write(slot, 0, &[100 + s, 200 + s, 300 + s]);
    }

    assert_eq!(
        buf.group(1),
        &[104, 105, 106, 107, 204, 205, 206, 207, 304, 305, 306, 307]
    );
}

#[test]
fn test_partial_write_leaves_other_words() {
    let mut buf = buffer(2, 4, 2);
    buf.write(1, 0, &[1, 2, 3, 4]);

    buf.write(1, 2, &[9]);

    assert_eq!(buf.read::<4>(1), [1, 2, 9, 4]);
    assert_eq!(buf.read::<4>(0), [0; 4]);
}

#[test]
fn test_group_mut_writes_through() {
    let mut buf = buffer(4, 2, 2);

    buf.group_mut(1)[3] = 42;

    // Group 1, word 1, lane 1: slot 3.
    assert_eq!(buf.read::<2>(3), [0, 42]);
}

#[test]
fn test_zeroize() {
    let mut buf = buffer(4, 2, 1);
    buf.write(2, 0, &[7, 7]);
    assert!(!buf.is_zeroized());

    buf.zeroize();

    assert!(buf.is_zeroized());
}

#[test]
fn test_allocation_failure() {
    let mut allocator = BufferAllocator::new();
    allocator.change_behaviour(AllocBehaviour::FailAtAllocate);

    let result = LaneBuffer::new(&allocator, 8, 16, 8);

    assert!(matches!(result, Err(AllocError::OutOfMemory { .. })));
}
