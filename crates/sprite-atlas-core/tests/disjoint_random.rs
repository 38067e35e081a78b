use rand::{Rng, SeedableRng};
use sprite_atlas_core::prelude::*;
use std::collections::HashMap;

fn random_sprites(seed: u64, count: u32) -> Vec<(String, u32, u32)> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| (format!("s{}", i), rng.gen_range(1..=64), rng.gen_range(1..=64)))
        .collect()
}

fn assert_valid(layout: &Layout, inputs: &[(String, u32, u32)], expand: u32) {
    assert_eq!(layout.len(), inputs.len());
    let by_key: HashMap<&str, &Placement> =
        layout.placements.iter().map(|p| (p.key.as_str(), p)).collect();
    assert_eq!(by_key.len(), inputs.len(), "duplicate placements");
    for (key, w, h) in inputs {
        let p = by_key.get(key.as_str()).expect("missing placement");
        assert_eq!(p.rect.w, w + 2 * expand);
        assert_eq!(p.rect.h, h + 2 * expand);
        assert_eq!((p.frame.w, p.frame.h), (*w, *h));
    }
    for i in 0..layout.placements.len() {
        for j in (i + 1)..layout.placements.len() {
            let a = &layout.placements[i].rect;
            let b = &layout.placements[j].rect;
            assert!(!a.intersects(b), "rects overlap: {:?} vs {:?}", a, b);
        }
    }
    let max_right = layout.placements.iter().map(|p| p.rect.right()).max().unwrap_or(0);
    let max_bottom = layout.placements.iter().map(|p| p.rect.bottom()).max().unwrap_or(0);
    assert!(layout.width >= max_right && layout.height >= max_bottom);
}

#[test]
fn frontier_random_sets_are_disjoint_and_tight() {
    for seed in [1u64, 7, 2024] {
        let inputs = random_sprites(seed, 150);
        let cfg = PackerConfig::builder().expand(1).build();
        let layout = pack_layout(inputs.clone(), cfg).expect("pack");
        assert_valid(&layout, &inputs, 1);
        let max_right = layout.placements.iter().map(|p| p.rect.right()).max().unwrap();
        let max_bottom = layout.placements.iter().map(|p| p.rect.bottom()).max().unwrap();
        assert_eq!((layout.width, layout.height), (max_right, max_bottom));
    }
}

#[test]
fn quadtree_random_sets_are_disjoint() {
    for seed in [3u64, 11] {
        let inputs = random_sprites(seed, 150);
        let cfg = PackerConfig::builder()
            .strategy(PlacementStrategyKind::QuadTree)
            .expand(2)
            .build();
        let layout = pack_layout(inputs.clone(), cfg).expect("pack");
        assert_valid(&layout, &inputs, 2);
    }
}

#[test]
fn unsorted_order_still_disjoint() {
    let inputs = random_sprites(99, 100);
    let cfg = PackerConfig::builder().sort_order(SortOrder::None).build();
    let layout = pack_layout(inputs.clone(), cfg).expect("pack");
    assert_valid(&layout, &inputs, 0);
    let keys: Vec<&str> = layout.placements.iter().map(|p| p.key.as_str()).collect();
    let expected: Vec<&str> = inputs.iter().map(|(k, _, _)| k.as_str()).collect();
    assert_eq!(keys, expected);
}

#[test]
fn frontier_fills_at_least_a_quarter_of_the_canvas() {
    let inputs = random_sprites(5, 200);
    let layout = pack_layout(inputs, PackerConfig::default()).expect("pack");
    let stats = layout.stats();
    assert!(stats.occupancy > 0.25, "occupancy too low: {}", stats.summary());
}
