use sprite_atlas_core::prelude::*;
use sprite_atlas_core::{compute_canvas_size, next_pow2};

fn is_pow2(v: u32) -> bool {
    v != 0 && (v & (v - 1)) == 0
}

#[test]
fn natural_size_is_max_extent() {
    let rects = [Rect::new(0, 0, 30, 10), Rect::new(30, 0, 5, 40), Rect::new(0, 10, 12, 12)];
    assert_eq!(compute_canvas_size(&rects, false).unwrap(), (35, 40));
}

#[test]
fn pow2_uses_longer_side_for_both() {
    let rects = [Rect::new(0, 0, 130, 70)];
    assert_eq!(compute_canvas_size(&rects, true).unwrap(), (256, 256));
    let exact = [Rect::new(0, 0, 64, 32)];
    assert_eq!(compute_canvas_size(&exact, true).unwrap(), (64, 64));
    let one = [Rect::new(0, 0, 1, 1)];
    assert_eq!(compute_canvas_size(&one, true).unwrap(), (1, 1));
}

#[test]
fn empty_is_zero_even_with_pow2() {
    let none: [Rect; 0] = [];
    assert_eq!(compute_canvas_size(&none, false).unwrap(), (0, 0));
    assert_eq!(compute_canvas_size(&none, true).unwrap(), (0, 0));
}

#[test]
fn pow2_overflow_is_reported() {
    let huge = [Rect::new(0, 0, (1u32 << 31) + 1, 1)];
    match compute_canvas_size(&huge, true) {
        Err(AtlasError::CanvasTooLarge { width, height }) => {
            assert_eq!(width, (1u32 << 31) + 1);
            assert_eq!(height, 1);
        }
        other => panic!("expected CanvasTooLarge, got {:?}", other),
    }
}

#[test]
fn next_pow2_values() {
    assert_eq!(next_pow2(0), Some(1));
    assert_eq!(next_pow2(1), Some(1));
    assert_eq!(next_pow2(129), Some(256));
    assert_eq!(next_pow2(1 << 31), Some(1 << 31));
    assert_eq!(next_pow2(u32::MAX), None);
}

#[test]
fn packed_pow2_layout_covers_placements() {
    let cfg = PackerConfig::builder().pow2(true).expand(3).build();
    let inputs = vec![("x", 123, 77), ("y", 200, 20), ("z", 9, 9)];
    let layout = pack_layout(inputs, cfg).expect("pack");
    assert_eq!(layout.width, layout.height);
    assert!(is_pow2(layout.width));
    let need = layout
        .placements
        .iter()
        .map(|p| p.rect.right().max(p.rect.bottom()))
        .max()
        .unwrap();
    assert!(layout.width >= need);
    assert!(layout.width / 2 < need);
}
