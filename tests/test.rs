use graingrow::{
    boundary_grid, seed_points, seed_squares, AdvancedRule, BasicRule, Edge, Grid, Rgb,
    RuleDescriptor,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "serde")]
use graingrow::GridSer;
#[cfg(feature = "serde")]
use serde_json::json;
#[cfg(feature = "serde")]
use std::error::Error;

#[test]
fn growth_from_a_single_seed() {
    let mut grid = Grid::new(3, 3, 0_u8);
    grid.set(1, 1, 9);
    grid.set_ignore(vec![0]);
    let rule = BasicRule::new().set_empty(vec![0]);
    let mut rng = StdRng::seed_from_u64(1);

    let changes = rule.step(&grid, &mut rng);
    assert!(changes.can_change());
    assert_eq!(changes.updates().len(), 4);
    for pos in [(0, 1), (1, 0), (2, 1), (1, 2)] {
        assert_eq!(changes.updates().get(&pos), Some(&9));
    }

    let grown = changes.result();
    assert_eq!(grown.get(1, 1), 9);
    assert_eq!(grown.get(1, 0), 9);
    assert_eq!(grown.get(0, 0), 0);
    // The grid the step was computed against is left as it was.
    assert_eq!(grid.cells().len(), 1);
}

#[test]
fn fresh_growth_votes_only_next_step() {
    let mut grid = Grid::new(4, 1, 0_u8);
    grid.set(0, 0, 5);
    let rule = BasicRule::new().set_empty(vec![0]).set_ignore(vec![0]);
    let mut rng = StdRng::seed_from_u64(1);

    let changes = rule.step(&grid, &mut rng);
    assert_eq!(changes.updates().len(), 1);
    assert_eq!(changes.updates().get(&(1, 0)), Some(&5));

    // Only after materializing does the front move one cell further.
    let grid = changes.into_result();
    let changes = rule.step(&grid, &mut rng);
    assert_eq!(changes.updates().len(), 1);
    assert_eq!(changes.updates().get(&(2, 0)), Some(&5));
}

#[test]
fn growth_fills_the_whole_extent() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut grid = Grid::new(8, 8, 0_u8);
    seed_points(&mut grid, 3, &mut rng, |rng| rng.gen_range(1..=200));
    let rule = BasicRule::new().set_empty(vec![0]).set_ignore(vec![0]);

    let mut steps = 0;
    loop {
        let changes = rule.step(&grid, &mut rng);
        if !changes.can_change() {
            break;
        }
        grid = changes.into_result();
        steps += 1;
        assert!(steps < 100, "growth failed to converge");
    }
    assert!(steps > 0);
    assert_eq!(grid.occupancy(), 1.0);
}

#[test]
fn uniform_field_never_changes() {
    let mut grid = Grid::new(3, 3, 0_u8);
    for y in 0..3 {
        for x in 0..3 {
            grid.set(x, y, 5);
        }
    }
    let mut rng = StdRng::seed_from_u64(1);
    let basic = BasicRule::new().set_empty(vec![0]).set_ignore(vec![0]);
    let changes = basic.step(&grid, &mut rng);
    assert!(changes.updates().is_empty());
    assert!(!changes.can_change());

    let advanced = AdvancedRule::new(100).set_empty(vec![0]).set_ignore(vec![0]);
    let changes = advanced.step(&grid, &mut rng);
    assert!(changes.updates().is_empty());
    assert!(!changes.can_change());
}

#[test]
fn repeating_edges_grow_across_the_seam() {
    let mut seam = Grid::new(3, 1, 0_u8);
    seam.set(0, 0, 9);
    let mut rng = StdRng::seed_from_u64(1);

    let absorbing = BasicRule::new().set_empty(vec![0]).set_ignore(vec![0]);
    let changes = absorbing.step(&seam, &mut rng);
    assert_eq!(changes.updates().len(), 1);

    let repeating = BasicRule::new()
        .set_empty(vec![0])
        .set_ignore(vec![0])
        .set_edge(Edge::Repeating);
    let changes = repeating.step(&seam, &mut rng);
    assert_eq!(changes.updates().len(), 2);
    assert_eq!(changes.updates().get(&(2, 0)), Some(&9));
}

#[test]
fn descriptor_kernel_reaches_further() {
    let descriptor = RuleDescriptor {
        cells: Some(vec![vec![(-2, 0)]]),
        ..RuleDescriptor::default()
    };
    let rule = descriptor.build(vec![0_u8], vec![0_u8]).unwrap();
    let mut grid = Grid::new(5, 1, 0_u8);
    grid.set(0, 0, 7);
    let mut rng = StdRng::seed_from_u64(1);
    let changes = rule.step(&grid, &mut rng);
    assert_eq!(changes.updates().len(), 1);
    assert_eq!(changes.updates().get(&(2, 0)), Some(&7));
}

#[test]
fn descriptor_built_advanced_rule_steps() {
    let descriptor = RuleDescriptor {
        rules_type: "advanced".to_string(),
        ..RuleDescriptor::default()
    };
    let rule = descriptor.build(vec![0_u8], vec![0_u8]).unwrap();
    let mut grid = Grid::new(3, 3, 0_u8);
    for x in 0..3 {
        for y in 0..3 {
            if (x, y) != (1, 1) {
                grid.set(x, y, 7);
            }
        }
    }
    let mut rng = StdRng::seed_from_u64(1);
    let changes = rule.step(&grid, &mut rng);
    assert_eq!(changes.updates().len(), 1);
    assert_eq!(changes.updates().get(&(1, 1)), Some(&7));
}

#[test]
fn inclusions_seed_on_phase_boundaries() {
    let red = Rgb(255, 0, 0);
    let green = Rgb(0, 255, 0);
    let inclusion = Rgb(0, 0, 0);
    let background = Rgb(40, 40, 40);

    let mut grid = Grid::new(6, 6, background);
    for y in 0..6 {
        for x in 0..6 {
            grid.set(x, y, if x < 3 { red } else { green });
        }
    }

    let marks = boundary_grid(&grid, Edge::Repeating, true, 1, background, inclusion);
    assert!(!marks.cells().is_empty());

    let mut rng = StdRng::seed_from_u64(5);
    seed_squares(&mut grid, 2, 1, inclusion, &mut rng, |rng| {
        marks.random_occupied_position(rng)
    });

    let seeded: Vec<_> = grid
        .cells()
        .iter()
        .filter(|(_, value)| **value == inclusion)
        .map(|(&pos, _)| pos)
        .collect();
    assert!(!seeded.is_empty());
    for (x, y) in seeded {
        assert!(marks.is_occupied(x, y));
    }
}

#[test]
fn seeded_runs_reproduce() {
    fn grow(seed: u64) -> Grid<Rgb> {
        let background = Rgb(40, 40, 40);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::new(10, 10, background);
        grid.set_ignore(vec![background]);
        seed_points(&mut grid, 4, &mut rng, |rng| Rgb::random_range(rng, 50..250));
        let rule = AdvancedRule::new(50).set_empty(vec![background]);
        for _ in 0..5 {
            grid = rule.step(&grid, &mut rng).into_result();
        }
        grid
    }
    assert_eq!(grow(123), grow(123));
}

#[cfg(feature = "serde")]
#[test]
fn descriptor_decodes_the_request_payload() -> Result<(), Box<dyn Error>> {
    let descriptor: RuleDescriptor = serde_json::from_value(json!({
        "rulesType": "advanced",
        "cells": null,
        "edge": "repeating",
        "advancedProbability": 70,
    }))?;
    assert_eq!(descriptor.rules_type, "advanced");
    assert_eq!(descriptor.cells, None);
    assert_eq!(descriptor.edge, "repeating");
    assert_eq!(descriptor.advanced_probability, 70);

    // Missing fields fall back to the defaults.
    let descriptor: RuleDescriptor = serde_json::from_value(json!({}))?;
    assert_eq!(descriptor, RuleDescriptor::default());
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn grid_wire_form_round_trips() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(5, 4, Rgb(40, 40, 40));
    grid.set_ignore(vec![Rgb(40, 40, 40), Rgb(0, 0, 0)]);
    grid.set(0, 0, Rgb(255, 0, 0));
    grid.set(4, 3, Rgb(60, 70, 80));
    let text = serde_json::to_string(&grid.ser())?;
    let restored = serde_json::from_str::<GridSer<Rgb>>(&text)?.grid()?;
    assert_eq!(restored, grid);
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn color_wire_shape_is_a_three_element_list() -> Result<(), Box<dyn Error>> {
    assert_eq!(serde_json::to_value(Rgb(255, 0, 40))?, json!([255, 0, 40]));
    assert_eq!(
        serde_json::from_value::<Rgb>(json!([255, 0, 40]))?,
        Rgb(255, 0, 40)
    );
    assert!(serde_json::from_value::<Rgb>(json!(9)).is_err());
    assert!(serde_json::from_value::<Rgb>(json!([1, 2])).is_err());
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn malformed_cell_keys_surface_errors() -> Result<(), Box<dyn Error>> {
    let saved: GridSer<u8> = serde_json::from_value(json!({
        "width": 2,
        "height": 2,
        "default": 0,
        "ignore": [],
        "cells": { "1;2": 5 },
    }))?;
    assert_eq!(
        saved.grid(),
        Err(graingrow::Error::InvalidCellKey("1;2".to_string()))
    );

    let saved: GridSer<u8> = serde_json::from_value(json!({
        "width": 0,
        "height": 2,
        "default": 0,
        "ignore": [],
        "cells": {},
    }))?;
    assert_eq!(saved.grid(), Err(graingrow::Error::NonPositive));
    Ok(())
}
