use grid_battle::{ActorKind, Board, BoardError, Cell, Coordinate, Orientation, Ship, ShotOutcome};

fn c(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

fn board_with(ships: &[(i32, i32, usize, Orientation)]) -> Board {
    let mut board = Board::new(6);
    for &(r, col, len, o) in ships {
        board.place(Ship::new(c(r, col), len, o)).unwrap();
    }
    board
}

#[test]
fn test_place_marks_cells_and_contour() {
    let board = board_with(&[(2, 2, 1, Orientation::Horizontal)]);
    assert_eq!(board.cell(c(2, 2)), Some(Cell::Occupied));
    assert_eq!(board.cell(c(1, 1)), Some(Cell::Empty));
    assert_eq!(board.reserved_count(), 9);
    assert!(board.is_reserved(c(3, 3)));
    assert!(!board.is_reserved(c(4, 4)));
    assert_eq!(board.targeted_count(), 0);
}

#[test]
fn test_place_contour_clipped_at_edge() {
    let board = board_with(&[(0, 0, 1, Orientation::Horizontal)]);
    assert_eq!(board.reserved_count(), 4);
}

#[test]
fn test_place_out_of_bounds_leaves_board_unchanged() {
    let mut board = board_with(&[(0, 0, 1, Orientation::Horizontal)]);
    let err = board
        .place(Ship::new(c(4, 5), 3, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::InvalidPlacement { origin: c(4, 5) });
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.reserved_count(), 4);
    assert_eq!(board.cell(c(4, 5)), Some(Cell::Empty));
    assert_eq!(board.cell(c(5, 5)), Some(Cell::Empty));

    assert!(board
        .place(Ship::new(c(-1, 3), 1, Orientation::Vertical))
        .is_err());
    assert_eq!(board.reserved_count(), 4);
}

#[test]
fn test_place_overlapping_or_touching_fails() {
    let mut board = board_with(&[(2, 2, 2, Orientation::Vertical)]);
    let before = board.reserved_count();
    // overlap
    assert!(board
        .place(Ship::new(c(1, 3), 2, Orientation::Horizontal))
        .is_err());
    // orthogonal neighbour
    assert!(board
        .place(Ship::new(c(2, 4), 1, Orientation::Horizontal))
        .is_err());
    // diagonal neighbour
    assert!(board
        .place(Ship::new(c(3, 4), 1, Orientation::Horizontal))
        .is_err());
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.reserved_count(), before);

    // one cell of gap is enough
    board
        .place(Ship::new(c(2, 5), 1, Orientation::Horizontal))
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_miss_marks_single_cell() {
    let mut board = board_with(&[(0, 0, 2, Orientation::Horizontal)]);
    let outcome = board.resolve_shot(c(4, 4), ActorKind::Human).unwrap();
    assert_eq!(outcome, ShotOutcome::Miss);
    assert!(!outcome.grants_extra_turn());
    assert_eq!(board.cell(c(4, 4)), Some(Cell::Miss));
    assert_eq!(board.targeted_count(), 1);
    assert_eq!(board.sunk_count(), 0);
}

#[test]
fn test_contour_of_afloat_ship_can_be_fired_at() {
    let mut board = board_with(&[(0, 0, 2, Orientation::Vertical)]);
    assert!(board.is_reserved(c(1, 0)));
    assert_eq!(
        board.resolve_shot(c(1, 0), ActorKind::Automated),
        Ok(ShotOutcome::Miss)
    );
}

#[test]
fn test_hit_decrements_hit_points_and_grants_turn() {
    let mut board = board_with(&[(1, 1, 2, Orientation::Vertical)]);
    let outcome = board.resolve_shot(c(1, 2), ActorKind::Human).unwrap();
    assert_eq!(outcome, ShotOutcome::Hit);
    assert!(outcome.grants_extra_turn());
    assert_eq!(board.ships()[0].hit_points(), 1);
    assert_eq!(board.cell(c(1, 2)), Some(Cell::Hit));
    assert_eq!(board.sunk_count(), 0);
    assert!(!board.is_destroyed());
}

#[test]
fn test_sinking_reveals_contour_without_extra_turn() {
    let mut board = board_with(&[
        (2, 2, 1, Orientation::Horizontal),
        (5, 5, 1, Orientation::Horizontal),
    ]);
    assert_eq!(
        board.resolve_shot(c(1, 1), ActorKind::Human),
        Ok(ShotOutcome::Miss)
    );
    let outcome = board.resolve_shot(c(2, 2), ActorKind::Human).unwrap();
    assert_eq!(outcome, ShotOutcome::Sunk);
    assert!(!outcome.grants_extra_turn());
    assert_eq!(board.sunk_count(), 1);
    assert!(!board.is_destroyed());

    // earlier misses stay misses, the rest of the contour is blocked
    assert_eq!(board.cell(c(1, 1)), Some(Cell::Miss));
    for coord in [c(1, 2), c(1, 3), c(2, 1), c(2, 3), c(3, 1), c(3, 2), c(3, 3)] {
        assert_eq!(board.cell(coord), Some(Cell::Blocked), "{}", coord);
    }
    assert_eq!(board.targeted_count(), 9);

    // revealed contour cannot be targeted
    assert_eq!(
        board.resolve_shot(c(3, 3), ActorKind::Automated),
        Err(BoardError::DuplicateTarget {
            target: c(3, 3),
            actor: ActorKind::Automated
        })
    );
}

#[test]
fn test_duplicate_target_is_tagged_by_actor() {
    let mut board = board_with(&[(0, 0, 3, Orientation::Horizontal)]);
    assert_eq!(
        board.resolve_shot(c(0, 0), ActorKind::Human),
        Ok(ShotOutcome::Hit)
    );
    for _ in 0..2 {
        assert_eq!(
            board.resolve_shot(c(0, 0), ActorKind::Human),
            Err(BoardError::DuplicateTarget {
                target: c(0, 0),
                actor: ActorKind::Human
            })
        );
    }
    assert_eq!(
        board.resolve_shot(c(0, 0), ActorKind::Automated),
        Err(BoardError::DuplicateTarget {
            target: c(0, 0),
            actor: ActorKind::Automated
        })
    );
    assert_eq!(board.ships()[0].hit_points(), 2);
}

#[test]
fn test_out_of_bounds_shot_rejected() {
    let mut board = Board::new(6);
    for target in [c(-1, 0), c(0, -1), c(6, 0), c(0, 6), c(i32::MAX, 2)] {
        assert_eq!(
            board.resolve_shot(target, ActorKind::Human),
            Err(BoardError::OutOfBounds(target))
        );
    }
    assert_eq!(board.targeted_count(), 0);
}

#[test]
fn test_three_cell_ship_sunk_by_three_hits_in_any_order() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(c(0, 0), 3, Orientation::Horizontal))
        .unwrap();

    assert_eq!(
        board.resolve_shot(c(2, 0), ActorKind::Human),
        Ok(ShotOutcome::Hit)
    );
    assert_eq!(
        board.resolve_shot(c(0, 0), ActorKind::Human),
        Ok(ShotOutcome::Hit)
    );
    assert_eq!(
        board.resolve_shot(c(1, 0), ActorKind::Human),
        Ok(ShotOutcome::Sunk)
    );
    assert_eq!(board.sunk_count(), 1);
    assert!(board.is_destroyed());
    // the ship plus its contour in the corner: rows 0..=3, cols 0..=1
    assert_eq!(board.targeted_count(), 8);
}

#[test]
fn test_rows_and_hidden_flag() {
    let mut board = board_with(&[(0, 0, 1, Orientation::Horizontal)]);
    assert_eq!(board.rows().count(), 6);
    assert!(board.rows().all(|row| row.len() == 6));
    assert!(!board.is_hidden());
    board.set_hidden(true);
    assert!(board.is_hidden());
    assert_eq!(board.cell(c(0, 0)), Some(Cell::Occupied));
    assert_eq!(board.cell(c(6, 0)), None);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        BoardError::DuplicateTarget {
            target: c(1, 2),
            actor: ActorKind::Automated
        }
        .to_string(),
        "automated actor already targeted (1, 2)"
    );
    assert_eq!(
        BoardError::OutOfBounds(c(-1, 0)).to_string(),
        "target (-1, 0) is outside the board"
    );
}

#[test]
fn test_board_without_ships_is_not_destroyed() {
    let mut board = Board::new(6);
    assert!(!board.is_destroyed());
    assert_eq!(
        board.resolve_shot(c(2, 2), ActorKind::Human),
        Ok(ShotOutcome::Miss)
    );
    assert!(!board.is_destroyed());
}

#[test]
#[should_panic(expected = "overflows the cell count")]
fn test_board_size_overflow_panics() {
    let _ = Board::new(usize::MAX);
}
