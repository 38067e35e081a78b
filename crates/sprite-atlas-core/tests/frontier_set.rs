use sprite_atlas_core::prelude::*;

fn sprite(key: &str, w: u32, h: u32) -> SpriteDescriptor {
    SpriteDescriptor::new(key, w, h, 0, 0).expect("sprite")
}

#[test]
fn frontier_starts_at_origin_and_dedups() {
    let mut f = CandidateFrontier::new();
    assert_eq!(f.len(), 1);
    assert!(f.contains(Point::new(0, 0)));
    assert!(f.insert(Point::new(5, 0)));
    assert!(!f.insert(Point::new(5, 0)));
    assert_eq!(f.len(), 2);
    assert!(!f.remove(Point::new(9, 9)));
    assert!(f.remove(Point::new(0, 0)));
    assert_eq!(f.iter().collect::<Vec<_>>(), vec![Point::new(5, 0)]);
}

#[test]
fn placement_replaces_anchor_with_three_corners() {
    let mut packer = FrontierPacker::new();
    let r = packer.place(&sprite("a", 64, 32)).expect("place");
    assert_eq!(r, Rect::new(0, 0, 64, 32));
    let f = packer.frontier();
    assert_eq!(f.len(), 3);
    assert!(!f.contains(Point::new(0, 0)));
    assert!(f.contains(Point::new(64, 0)));
    assert!(f.contains(Point::new(0, 32)));
    assert!(f.contains(Point::new(64, 32)));
}

#[test]
fn shared_corner_is_not_duplicated() {
    let mut packer = FrontierPacker::new();
    packer.place(&sprite("a", 64, 64)).expect("place");
    packer.place(&sprite("b", 64, 64)).expect("place");
    // (64,64) is produced by both placements.
    let f = packer.frontier();
    assert_eq!(f.iter().filter(|p| *p == Point::new(64, 64)).count(), 1);
    assert_eq!(f.len(), 4);
}

#[test]
fn covered_corners_are_dropped() {
    let mut packer = FrontierPacker::new();
    packer.place(&sprite("small", 10, 10)).expect("place");
    let big = packer.place(&sprite("big", 100, 100)).expect("place");
    assert_eq!(big, Rect::new(10, 0, 100, 100));
    let f = packer.frontier();
    assert!(!f.contains(Point::new(10, 10)));
    assert!(f.contains(Point::new(0, 10)));
    assert!(f.contains(Point::new(110, 0)));
    assert!(f.contains(Point::new(10, 100)));
    assert!(f.contains(Point::new(110, 100)));
    assert_eq!(packer.placed().len(), 2);
}

#[test]
fn rejects_corners_that_would_overlap() {
    let mut packer = FrontierPacker::new();
    packer.place(&sprite("a", 10, 100)).expect("place");
    packer.place(&sprite("b", 100, 10)).expect("place");
    let c = packer.place(&sprite("c", 20, 20)).expect("place");
    for placed in &packer.placed()[..2] {
        assert!(!placed.intersects(&c));
    }
}

#[test]
fn edge_touching_rects_do_not_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
    assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
    assert!(!a.intersects(&Rect::new(10, 10, 5, 5)));
    assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
    assert!(a.intersects(&Rect::new(2, 2, 2, 2)));
}
