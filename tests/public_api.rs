use rand::rngs::StdRng;
use rand::SeedableRng;

use torus_automata::{
    create, step, step_named, Bounds, CellState, Error, Position, Rule, Torus, TorusBuffers,
};

#[test]
fn test_create_clamps_to_three_by_three() {
    let torus = create(1, 1);
    assert_eq!(torus.bounds(), Bounds::new(2, 2));
    assert_eq!(torus.grid().as_bytes(), &[0u8; 9]);
}

#[test]
fn test_glider_returns_after_full_lap() {
    // A glider moves one cell diagonally every 4 generations; on an 8x8 torus
    // it is back where it started after 32.
    let glider = Torus::from_rows(&[
        ".#......",
        "..#.....",
        "###.....",
        "........",
        "........",
        "........",
        "........",
        "........",
    ])
    .unwrap();

    let mut torus = glider.clone();
    for generation in 1..=32 {
        torus = step(&torus, Rule::GameOfLife);
        assert_eq!(torus.population(), 5, "generation {}", generation);
    }
    assert_eq!(torus, glider);
}

#[test]
fn test_every_rule_preserves_dimensions() {
    let mut rng = StdRng::seed_from_u64(5);
    let torus = Torus::random(11, 6, 0.5, &mut rng);
    for rule in Rule::ALL {
        let next = step(&torus, rule);
        assert_eq!(next.bounds(), torus.bounds(), "{}", rule);
        assert_eq!(next.grid().cells().len(), 66);
    }
}

#[test]
fn test_unknown_rule_leaves_torus_untouched() {
    let mut torus = create(5, 5);
    torus.set(Position::new(2, 2), CellState::Alive).unwrap();
    let before = torus.clone();

    let result = step_named(&torus, "Rule 184");
    assert_eq!(result, Err(Error::UnknownRule("Rule 184".to_string())));
    assert_eq!(torus, before);
}

#[test]
fn test_buffers_allow_edits_between_steps() {
    let mut buffers = TorusBuffers::new(create(6, 6));
    buffers.step(Rule::GameOfLife);
    assert_eq!(buffers.current().population(), 0);

    // Three cells in an L: the fourth corner of the block is born.
    for (x, y) in [(2, 2), (3, 2), (2, 3)] {
        buffers.set(Position::new(x, y), CellState::Alive).unwrap();
    }
    buffers.step(Rule::GameOfLife);
    assert_eq!(buffers.current().population(), 4);
    assert!(buffers.current()[Position::new(3, 3)].is_alive());
    assert_eq!(buffers.generation(), 2);
}

#[test]
fn test_buffers_step_a_loaded_torus_of_another_size() {
    let mut buffers = TorusBuffers::new(create(8, 8));
    buffers.step(Rule::GameOfLife);

    let blinker = Torus::from_rows(&[".....", ".....", ".###.", ".....", "....."]).unwrap();
    buffers.load(blinker.clone());
    buffers.step(Rule::GameOfLife);
    assert_eq!(buffers.current().bounds(), Bounds::new(4, 4));
    buffers.step(Rule::GameOfLife);
    assert_eq!(buffers.current(), &blinker);
}

#[test]
fn test_out_of_bounds_is_reported() {
    let torus = create(4, 3);
    match torus.get(Position::new(0, 3)) {
        Err(Error::OutOfBounds { position, bounds }) => {
            assert_eq!(position, Position::new(0, 3));
            assert_eq!(bounds, Bounds::new(3, 2));
        }
        other => panic!("expected OutOfBounds, got {:?}", other),
    }
}
