//! Unit tests for the pure route generators.

use pbs_core::{GridPos, PlannedStep, SimRng, Step};

/// Every step must start where the previous one ended (CHECK gates carry no
/// position and are skipped).
fn assert_contiguous(steps: &[PlannedStep]) {
    let mut prev: Option<GridPos> = None;
    for step in steps {
        if let PlannedStep::Move(s) = step {
            if let Some(p) = prev {
                assert_eq!(s.from, p, "discontinuous route at {s}");
            }
            prev = Some(s.to);
        }
    }
}

fn moves(steps: &[PlannedStep]) -> Vec<Step> {
    steps
        .iter()
        .filter_map(|s| match s {
            PlannedStep::Move(m) => Some(*m),
            PlannedStep::Check => None,
        })
        .collect()
}

#[cfg(test)]
mod walks {
    use crate::walks::{column_walk, row_walk};

    use super::*;

    #[test]
    fn n_cell_walk_has_3n_substeps() {
        assert_eq!(row_walk(GridPos::new(5, 3), 8).len(), 9);
        assert_eq!(row_walk(GridPos::new(5, 3), 4).len(), 3);
        assert_eq!(column_walk(GridPos::new(2, 7), 5).len(), 6);
        assert!(row_walk(GridPos::new(5, 3), 5).is_empty());
    }

    #[test]
    fn first_advance_then_pullback_then_settle() {
        let steps = row_walk(GridPos::new(5, 3), 7);
        assert_eq!(steps[0], Step::new(GridPos::new(5, 3), GridPos::new(6, 3), false));
        assert_eq!(steps[1], Step::new(GridPos::new(6, 3), GridPos::new(5, 3), true));
        // settle lands on the target without a pull-back
        assert_eq!(*steps.last().unwrap(), Step::new(GridPos::new(6, 3), GridPos::new(7, 3), false));
    }

    #[test]
    fn one_pullback_per_cell_advanced() {
        let steps = column_walk(GridPos::new(4, 10), 6);
        assert_eq!(steps.iter().filter(|s| s.carries).count(), 4);
    }

    #[test]
    fn walks_are_contiguous_robot_paths() {
        for steps in [
            row_walk(GridPos::new(0, 0), 8),
            row_walk(GridPos::new(8, 14), 2),
            column_walk(GridPos::new(3, 1), 13),
            column_walk(GridPos::new(3, 13), 0),
        ] {
            let planned: Vec<_> = steps.into_iter().map(PlannedStep::Move).collect();
            assert_contiguous(&planned);
        }
    }
}

#[cfg(test)]
mod maneuvers {
    use crate::maneuver::{
        five_step_horizontal, five_step_horizontal_route, five_step_vertical,
        five_step_vertical_route, three_step_horizontal, three_step_route, three_step_vertical,
    };
    use pbs_core::Side;

    use super::*;

    #[test]
    fn horizontal_three_step_climbs_one_row() {
        let (end, steps) = three_step_horizontal(GridPos::new(4, 3));
        assert_eq!(end, GridPos::new(3, 3));
        assert_eq!(steps[0], PlannedStep::Check);
        assert_contiguous(&steps);
        // one column toward the I/O, one row up, one column back: 9 sub-steps
        assert_eq!(moves(&steps).len(), 9);
    }

    #[test]
    fn vertical_three_step_shifts_one_column_inward() {
        let (end, steps) = three_step_vertical(GridPos::new(3, 4));
        assert_eq!(end, GridPos::new(3, 5));
        assert_contiguous(&steps);

        let (end, steps) = three_step_vertical(GridPos::new(3, 11));
        assert_eq!(end, GridPos::new(3, 10));
        assert_contiguous(&steps);
    }

    #[test]
    fn three_steps_are_noops_on_the_io_column() {
        let loc = GridPos::new(4, 7);
        assert_eq!(three_step_horizontal(loc), (loc, vec![PlannedStep::Check]));
        assert_eq!(three_step_vertical(loc), (loc, vec![PlannedStep::Check]));
    }

    #[test]
    fn top_row_vertical_three_step_compensates() {
        let (end, steps) = three_step_vertical(GridPos::new(0, 4));
        assert_eq!(end, GridPos::new(0, 5));
        assert_contiguous(&steps);
    }

    #[test]
    fn carry_route_reaches_the_io_column_or_top_row() {
        let (end, steps) = three_step_route(GridPos::new(4, 3), true);
        assert!(end.col == 7 || end.row == 0, "ended at {end}");
        assert_contiguous(&steps);

        // already on the I/O column: nothing to do
        let (end, steps) = three_step_route(GridPos::new(3, 7), true);
        assert_eq!(end, GridPos::new(3, 7));
        assert!(steps.is_empty());
    }

    #[test]
    fn vertical_five_step_descends_one_row() {
        let (end, steps) = five_step_vertical(GridPos::new(4, 7), Side::Left);
        assert_eq!(end, GridPos::new(3, 7));
        assert_contiguous(&steps);
        // left-side items detour left of the column
        assert!(moves(&steps).iter().any(|s| s.to.col == 6));

        let (end, steps) = five_step_vertical(GridPos::new(4, 7), Side::Right);
        assert_eq!(end, GridPos::new(3, 7));
        assert!(moves(&steps).iter().any(|s| s.to.col == 8));
    }

    #[test]
    fn vertical_five_step_route_stops_one_row_above_io() {
        let (end, steps) = five_step_vertical_route(GridPos::new(5, 7), Side::Right);
        assert_eq!(end, GridPos::new(1, 7));
        assert_contiguous(&steps);
    }

    #[test]
    fn horizontal_five_step_advances_one_column_inward() {
        let (end, steps) = five_step_horizontal(GridPos::new(1, 10));
        assert_eq!(end, GridPos::new(1, 9));
        assert_contiguous(&steps);

        let (end, steps) = five_step_horizontal(GridPos::new(1, 4));
        assert_eq!(end, GridPos::new(1, 5));
        assert_contiguous(&steps);
    }

    #[test]
    fn horizontal_five_step_route_reaches_the_io_fringe() {
        let (end, steps) = five_step_horizontal_route(GridPos::new(1, 11), Side::Right);
        assert_eq!(end, GridPos::new(1, 8));
        assert_contiguous(&steps);

        let (end, steps) = five_step_horizontal_route(GridPos::new(0, 2), Side::Left);
        assert_eq!(end, GridPos::new(0, 6));
        assert_contiguous(&steps);
    }
}

#[cfg(test)]
mod manhattan {
    use crate::manhattan::{manhattan_steps, return_route, AxisOrder, RouteKind};

    use super::*;

    #[test]
    fn axis_order_rules() {
        let mut rng = SimRng::new(1);
        // shared row → columns first
        assert_eq!(
            AxisOrder::choose(GridPos::new(4, 2), GridPos::new(4, 9), &mut rng),
            AxisOrder::ColumnsFirst
        );
        // top-two-row target → columns first
        assert_eq!(
            AxisOrder::choose(GridPos::new(6, 2), GridPos::new(1, 9), &mut rng),
            AxisOrder::ColumnsFirst
        );
        // shared column → rows first
        assert_eq!(
            AxisOrder::choose(GridPos::new(6, 2), GridPos::new(3, 2), &mut rng),
            AxisOrder::RowsFirst
        );
    }

    #[test]
    fn rows_first_fetch_stops_one_row_above_the_item() {
        let steps =
            manhattan_steps(GridPos::new(8, 1), GridPos::new(5, 9), AxisOrder::RowsFirst, RouteKind::ToItem);
        assert_eq!(steps.last().unwrap().to, GridPos::new(4, 9));
    }

    #[test]
    fn columns_first_redirects_top_row_items() {
        let steps =
            manhattan_steps(GridPos::new(3, 2), GridPos::new(0, 5), AxisOrder::ColumnsFirst, RouteKind::ToItem);
        assert_eq!(steps.last().unwrap().to, GridPos::new(0, 4));

        // corners redirect inward
        let steps =
            manhattan_steps(GridPos::new(3, 5), GridPos::new(0, 0), AxisOrder::ColumnsFirst, RouteKind::ToItem);
        assert_eq!(steps.last().unwrap().to, GridPos::new(0, 1));
        let steps =
            manhattan_steps(GridPos::new(3, 5), GridPos::new(0, 14), AxisOrder::ColumnsFirst, RouteKind::ToItem);
        assert_eq!(steps.last().unwrap().to, GridPos::new(0, 13));
    }

    #[test]
    fn direct_routes_hit_the_exact_cell() {
        for order in [AxisOrder::ColumnsFirst, AxisOrder::RowsFirst] {
            let steps =
                manhattan_steps(GridPos::new(1, 6), GridPos::new(7, 0), order, RouteKind::Direct);
            assert_eq!(steps.last().unwrap().to, GridPos::new(7, 0));
            let planned: Vec<_> = steps.into_iter().map(PlannedStep::Move).collect();
            assert_contiguous(&planned);
        }
    }

    #[test]
    fn zero_length_journey_is_empty() {
        let from = GridPos::new(4, 9);
        assert!(manhattan_steps(from, from, AxisOrder::ColumnsFirst, RouteKind::Direct).is_empty());
    }

    #[test]
    fn return_route_hugs_the_side_wall() {
        // right-side item: top row → right wall → down → across
        let steps = return_route(GridPos::new(1, 7), GridPos::new(6, 11));
        assert!(steps.iter().any(|s| s.to == GridPos::new(0, 14)));
        assert_eq!(steps.last().unwrap().to, GridPos::new(5, 11));
        let planned: Vec<_> = steps.into_iter().map(PlannedStep::Move).collect();
        assert_contiguous(&planned);

        // left-side item at the wall column is approached from column 1
        let steps = return_route(GridPos::new(0, 6), GridPos::new(5, 0));
        assert!(steps.iter().any(|s| s.to == GridPos::new(0, 0)));
        assert_eq!(steps.last().unwrap().to, GridPos::new(4, 1));
    }
}

#[cfg(test)]
mod dodge {
    use crate::dodge::dodge_steps;
    use pbs_core::layout::FREEZE_TICKS;

    use super::*;

    #[test]
    fn vertical_conflict_sidesteps_a_column() {
        let mut rng = SimRng::new(666);
        let steps = dodge_steps(GridPos::new(4, 0), GridPos::new(3, 0), &mut rng);
        // bounded at the wall: must go to column 1 and come back
        assert!(steps.iter().all(|s| s.to.col <= 1));
        assert_eq!(steps.iter().filter(|s| s.is_fictitious()).count(), FREEZE_TICKS);
        assert_eq!(steps.last().unwrap().to.col, 0);
    }

    #[test]
    fn horizontal_conflict_sidesteps_a_row() {
        let mut rng = SimRng::new(666);
        let steps = dodge_steps(GridPos::new(8, 5), GridPos::new(8, 6), &mut rng);
        assert!(steps.iter().all(|s| s.to.row >= 7));
        assert_eq!(steps.last().unwrap().to, GridPos::new(8, 5));
    }

    #[test]
    fn diagonal_conflict_has_no_dodge() {
        let mut rng = SimRng::new(666);
        assert!(dodge_steps(GridPos::new(4, 4), GridPos::new(5, 5), &mut rng).is_empty());
    }
}
