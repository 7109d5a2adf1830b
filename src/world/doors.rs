//! Door animation state machine.
//!
//! Openness runs on an inverted scale: 1.0 is shut, 0.05 is the resting
//! open position. The open and close thresholds are intentionally not
//! symmetric around the step size.

use super::grid::{CellKind, DoorState, TileGrid};

/// Milliseconds on a monotonic clock.
pub type Timestamp = u64;

/// Openness change per tick.
pub const STEP: f32 = 0.05;
/// An opening door snaps open once it reaches this.
pub const OPEN_THRESHOLD: f32 = 0.0501;
/// Openness of a door resting open.
pub const OPEN_REST: f32 = 0.05;
/// A closing door snaps shut once it reaches this.
pub const CLOSE_THRESHOLD: f32 = 0.9501;
/// A door only reacts to interaction when at least this closed.
pub const INTERACT_MIN_OPENNESS: f32 = 0.9999;
/// Default time a door stays open before closing by itself.
pub const DEFAULT_AUTO_CLOSE_MS: u64 = 3000;

/// One state change produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorTransition {
    pub x: i32,
    pub y: i32,
    pub from: DoorState,
    pub to: DoorState,
}

/// Advances door cells and handles the interact trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorAnimator {
    pub auto_close_ms: u64,
}

impl Default for DoorAnimator {
    fn default() -> Self {
        Self {
            auto_close_ms: DEFAULT_AUTO_CLOSE_MS,
        }
    }
}

impl DoorAnimator {
    pub fn new(auto_close_ms: u64) -> Self {
        Self { auto_close_ms }
    }

    /// Run one tick over every door in the grid.
    ///
    /// `player_tile` suppresses auto-close for the door the player stands in.
    pub fn advance(
        &self,
        grid: &mut TileGrid,
        player_tile: (i32, i32),
        now: Timestamp,
    ) -> Vec<DoorTransition> {
        let mut transitions = Vec::new();

        for ((x, y), kind, door) in grid.doors_mut() {
            let CellKind::Door(state) = *kind else {
                continue;
            };

            let next = match state {
                DoorState::Closed => None,
                DoorState::Opening => {
                    door.openness -= STEP;
                    if door.openness <= OPEN_THRESHOLD {
                        door.openness = OPEN_REST;
                        Some(DoorState::Open)
                    } else {
                        None
                    }
                }
                DoorState::Open => {
                    let expired = door.auto_close_deadline.is_some_and(|deadline| deadline <= now);
                    (expired && player_tile != (x, y)).then_some(DoorState::Closing)
                }
                DoorState::Closing => {
                    door.openness += STEP;
                    if door.openness >= CLOSE_THRESHOLD {
                        door.openness = 1.0;
                        door.auto_close_deadline = None;
                        Some(DoorState::Closed)
                    } else {
                        None
                    }
                }
            };

            if let Some(to) = next {
                *kind = CellKind::Door(to);
                transitions.push(DoorTransition { x, y, from: state, to });
            }
        }

        transitions
    }

    /// Start opening every shut door near the player.
    ///
    /// Looks at the 3x3 block around the player's tile and triggers doors
    /// whose centre is within one tile of the player. Returns the tiles that
    /// started opening.
    pub fn interact(
        &self,
        grid: &mut TileGrid,
        position: (f32, f32),
        now: Timestamp,
    ) -> Vec<(i32, i32)> {
        let (px, pz) = position;
        let (tx, ty) = (px.floor() as i32, pz.floor() as i32);
        let mut triggered = Vec::new();

        for dy in -1..=1 {
            for dx in -1..=1 {
                let (x, y) = (tx + dx, ty + dy);
                if grid.get(x, y) != Some(CellKind::Door(DoorState::Closed)) {
                    continue;
                }
                let Some(door) = grid.door_mut(x, y) else {
                    continue;
                };
                if door.openness < INTERACT_MIN_OPENNESS {
                    continue;
                }

                let ddx = px - (x as f32 + 0.5);
                let ddz = pz - (y as f32 + 0.5);
                if ddx * ddx + ddz * ddz > 1.0 {
                    continue;
                }

                door.openness -= STEP;
                door.auto_close_deadline = Some(now + self.auto_close_ms);
                // Bounds already checked by `get` above.
                let _ = grid.set_kind(x, y, CellKind::Door(DoorState::Opening));
                triggered.push((x, y));
            }
        }

        triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> TileGrid {
        TileGrid::from_rows(&[
            "#####",
            "#...#",
            "##D##",
            "#...#",
            "#####",
        ])
    }

    const FAR: (i32, i32) = (-10, -10);

    #[test]
    fn interaction_starts_opening() {
        let mut grid = corridor();
        let animator = DoorAnimator::default();

        let triggered = animator.interact(&mut grid, (2.5, 1.5), 1000);
        assert_eq!(triggered, vec![(2, 2)]);
        assert_eq!(grid.get(2, 2), Some(CellKind::Door(DoorState::Opening)));

        let door = grid.door(2, 2).unwrap();
        assert!((door.openness - 0.95).abs() < 1e-6);
        assert_eq!(door.auto_close_deadline, Some(4000));
    }

    #[test]
    fn interaction_out_of_reach_is_noop() {
        let mut grid = TileGrid::from_rows(&["#####", "#...#", "#...#", "##D##"]);
        let animator = DoorAnimator::default();

        // Door centre (2.5, 3.5), player at (1.2, 2.9): distance > 1.
        let triggered = animator.interact(&mut grid, (1.2, 2.9), 0);
        assert!(triggered.is_empty());
        assert_eq!(grid.get(2, 3), Some(CellKind::Door(DoorState::Closed)));
        assert_eq!(grid.door(2, 3).unwrap().openness, 1.0);
    }

    #[test]
    fn interaction_triggers_several_doors() {
        let mut grid = TileGrid::from_rows(&["#D#", "D.D", "#D#"]);
        let triggered = DoorAnimator::default().interact(&mut grid, (1.5, 1.5), 0);
        assert_eq!(triggered.len(), 4);
    }

    #[test]
    fn interaction_near_grid_edge_does_not_panic() {
        let mut grid = TileGrid::from_rows(&["D.", ".."]);
        let triggered = DoorAnimator::default().interact(&mut grid, (0.2, 0.2), 0);
        assert_eq!(triggered, vec![(0, 0)]);
    }

    #[test]
    fn opening_takes_nineteen_decrements() {
        let mut grid = corridor();
        let animator = DoorAnimator::default();
        animator.interact(&mut grid, (2.5, 1.5), 0);

        // The interaction itself was the first decrement.
        let mut decrements = 1;
        while grid.get(2, 2) == Some(CellKind::Door(DoorState::Opening)) {
            animator.advance(&mut grid, FAR, 0);
            decrements += 1;
            assert!(decrements <= 19, "door still opening after 19 decrements");
        }

        assert_eq!(decrements, 19);
        assert_eq!(grid.get(2, 2), Some(CellKind::Door(DoorState::Open)));
        assert_eq!(grid.door(2, 2).unwrap().openness, OPEN_REST);
    }

    #[test]
    fn open_door_auto_closes_after_deadline() {
        let mut grid = corridor();
        let animator = DoorAnimator::default();
        animator.interact(&mut grid, (2.5, 1.5), 0);
        for _ in 0..18 {
            animator.advance(&mut grid, FAR, 0);
        }
        assert_eq!(grid.get(2, 2), Some(CellKind::Door(DoorState::Open)));

        // Before the deadline nothing happens.
        assert!(animator.advance(&mut grid, FAR, 2999).is_empty());
        assert_eq!(grid.get(2, 2), Some(CellKind::Door(DoorState::Open)));

        let transitions = animator.advance(&mut grid, FAR, 3000);
        assert_eq!(
            transitions,
            vec![DoorTransition { x: 2, y: 2, from: DoorState::Open, to: DoorState::Closing }]
        );
        // Openness is untouched on the transition tick.
        assert_eq!(grid.door(2, 2).unwrap().openness, OPEN_REST);
    }

    #[test]
    fn player_in_doorway_holds_it_open() {
        let mut grid = corridor();
        let animator = DoorAnimator::default();
        animator.interact(&mut grid, (2.5, 1.5), 0);
        for _ in 0..18 {
            animator.advance(&mut grid, (2, 2), 0);
        }
        for now in [5_000, 50_000, 500_000] {
            animator.advance(&mut grid, (2, 2), now);
            assert_eq!(grid.get(2, 2), Some(CellKind::Door(DoorState::Open)));
        }
        animator.advance(&mut grid, (2, 3), 500_001);
        assert_eq!(grid.get(2, 2), Some(CellKind::Door(DoorState::Closing)));
    }

    #[test]
    fn closing_door_returns_to_closed() {
        let mut grid = corridor();
        let animator = DoorAnimator::new(100);
        animator.interact(&mut grid, (2.5, 1.5), 0);

        let mut ticks = 0;
        let mut seen_closing = false;
        loop {
            animator.advance(&mut grid, FAR, 1_000);
            ticks += 1;
            match grid.get(2, 2) {
                Some(CellKind::Door(DoorState::Closing)) => seen_closing = true,
                Some(CellKind::Door(DoorState::Closed)) => break,
                _ => {}
            }
            assert!(ticks < 100, "door never closed");
        }

        assert!(seen_closing);
        let door = grid.door(2, 2).unwrap();
        assert_eq!(door.openness, 1.0);
        assert_eq!(door.auto_close_deadline, None);

        // Closed again, so a new interaction works.
        assert_eq!(animator.interact(&mut grid, (2.5, 1.5), 2_000), vec![(2, 2)]);
    }

    #[test]
    fn openness_stays_in_unit_range() {
        let mut grid = corridor();
        let animator = DoorAnimator::new(50);
        for tick in 0..500u64 {
            if tick % 7 == 0 {
                animator.interact(&mut grid, (2.5, 1.5), tick * 16);
            }
            animator.advance(&mut grid, FAR, tick * 16);
            let openness = grid.door(2, 2).unwrap().openness;
            assert!((0.0..=1.0).contains(&openness), "openness {openness} at tick {tick}");
        }
    }

    #[test]
    fn idle_doors_stay_put() {
        let mut grid = TileGrid::from_rows(&["###", "#D#", "###"]);
        let before = grid.clone();
        let animator = DoorAnimator::default();
        for tick in 0..40 {
            assert!(animator.advance(&mut grid, (0, 0), tick * 1000).is_empty());
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn opening_door_ignores_interaction() {
        let mut grid = corridor();
        let animator = DoorAnimator::default();
        animator.interact(&mut grid, (2.5, 1.5), 0);
        animator.advance(&mut grid, FAR, 0);
        assert!(animator.interact(&mut grid, (2.5, 1.5), 10).is_empty());
        assert_eq!(grid.door(2, 2).unwrap().auto_close_deadline, Some(3000));
    }
}
