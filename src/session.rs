use std::collections::VecDeque;

use rand::Rng;

use crate::consts::{ITEMS_PER_SPEEDUP, MAX_SPEED, MIN_SPEED, REWARD_PER_ITEM};
use crate::snake::{Direction, MoveResult, Snake};
use crate::spawner::place_item;
use crate::Coords;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first move, or paused.
    Idle,
    Running,
    /// Crashed. Only `reset` leaves this phase.
    Over,
}

/// Read-only view of a session for rendering.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    /// Head first.
    pub segments: &'a VecDeque<Coords>,
    pub item: Coords,
    pub heading: Direction,
    pub score: u32,
    pub best: u32,
    pub speed: u32,
    pub items_consumed: u32,
    pub phase: Phase,
}

/// A single game, plus the best score of every game before it.
#[derive(Clone, Debug)]
pub struct Session {
    snake: Snake,
    heading: Direction,
    pending_heading: Direction,
    item: Coords,
    score: u32,
    best: u32,
    speed: u32,
    items_consumed: u32,
    phase: Phase,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let snake = Snake::new();
        let item = place_item(rng, &snake);

        Session {
            snake,
            heading: Direction::Right,
            pending_heading: Direction::Right,
            item,
            score: 0,
            best: 0,
            speed: MIN_SPEED,
            items_consumed: 0,
            phase: Phase::Idle,
        }
    }

    /// Starts a fresh game. The best score is kept.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let best = self.best;
        *self = Session::new(rng);
        self.best = best;
        log::info!("Session reset, best score {}", best);
    }

    /// Queues a turn for the next tick.
    ///
    /// A turn straight back onto the current heading is ignored. An accepted turn
    /// starts an idle session. Returns whether the turn was accepted.
    pub fn set_pending_heading(&mut self, direction: Direction) -> bool {
        if self.phase == Phase::Over || direction.is_opposite(self.heading) {
            return false;
        }

        self.pending_heading = direction;
        if self.phase == Phase::Idle {
            log::debug!("Running, heading {:?}", direction);
            self.phase = Phase::Running;
        }
        true
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Idle,
            Phase::Idle => Phase::Running,
            Phase::Over => Phase::Over,
        };
    }

    /// Runs one tick. Returns `None` without touching anything unless the session is running.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<MoveResult> {
        if self.phase != Phase::Running {
            return None;
        }

        self.heading = self.pending_heading;
        let next = self.snake.next_head(self.heading);
        let ate = next == self.item;

        let res = self.snake.move_step(self.heading, ate);
        match &res {
            MoveResult::Crashed => {
                log::info!("Crashed at ({}, {}) with score {}", next.0, next.1, self.score);
                self.phase = Phase::Over;
            }
            MoveResult::Moved { .. } if ate => self.consume_item(rng),
            MoveResult::Moved { .. } => {}
        }

        Some(res)
    }

    fn consume_item<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.score += REWARD_PER_ITEM;
        self.items_consumed += 1;

        if self.items_consumed % ITEMS_PER_SPEEDUP == 0 && self.speed < MAX_SPEED {
            self.speed += 1;
            log::debug!("Speed tier {}", self.speed);
        }
        if self.score > self.best {
            self.best = self.score;
        }

        self.item = place_item(rng, &self.snake);
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            segments: self.snake.body(),
            item: self.item,
            heading: self.heading,
            score: self.score,
            best: self.best,
            speed: self.speed,
            items_consumed: self.items_consumed,
            phase: self.phase,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_heading(&self) -> Direction {
        self.pending_heading
    }

    pub fn item(&self) -> Coords {
        self.item
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn items_consumed(&self) -> u32 {
        self.items_consumed
    }

    /// Moves the item without going through the spawner. Used by tests.
    pub fn set_item(&mut self, item: Coords) {
        self.item = item;
    }

    /// Replaces the snake and its heading. Used by tests.
    pub fn set_snake(&mut self, snake: Snake, heading: Direction) {
        self.snake = snake;
        self.heading = heading;
        self.pending_heading = heading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn fresh(seed: u64) -> (Session, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let session = Session::new(&mut rng);
        (session, rng)
    }

    fn body(session: &Session) -> Vec<Coords> {
        session.snake().body().iter().copied().collect()
    }

    /// Parks the item somewhere the snake won't reach in the next tick.
    fn park_item(session: &mut Session) {
        session.set_item((17, 0));
    }

    /// Puts the item right in front of the head and ticks once.
    fn eat_next(session: &mut Session, rng: &mut Pcg32) {
        let next = session.snake().next_head(session.pending_heading());
        session.set_item(next);
        assert!(matches!(session.advance(rng), Some(MoveResult::Moved { .. })));
    }

    #[test]
    fn reset_state() {
        let (s, _) = fresh(1);
        assert_eq!(body(&s), vec![(4, 10), (3, 10), (2, 10)]);
        assert_eq!(s.heading(), Right);
        assert_eq!(s.pending_heading(), Right);
        assert_eq!((s.score(), s.speed(), s.items_consumed()), (0, 1, 0));
        assert_eq!(s.phase(), Phase::Idle);
        assert!(!s.snake().occupies(s.item()));
    }

    #[test]
    fn first_tick_moves_right() {
        let (mut s, mut rng) = fresh(2);
        park_item(&mut s);
        s.toggle_pause();

        s.advance(&mut rng);

        assert_eq!(body(&s), vec![(5, 10), (4, 10), (3, 10)]);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn eating_grows_and_scores() {
        let (mut s, mut rng) = fresh(3);
        s.set_item((5, 10));
        s.toggle_pause();

        s.advance(&mut rng);

        assert_eq!(s.score(), 10);
        assert_eq!(s.best(), 10);
        assert_eq!(s.items_consumed(), 1);
        assert_eq!(body(&s), vec![(5, 10), (4, 10), (3, 10), (2, 10)]);
        assert!(!s.snake().occupies(s.item()));
    }

    #[test]
    fn speed_goes_up_on_third_item() {
        let (mut s, mut rng) = fresh(4);
        s.toggle_pause();

        eat_next(&mut s, &mut rng);
        eat_next(&mut s, &mut rng);
        assert_eq!(s.speed(), 1);

        eat_next(&mut s, &mut rng);
        assert_eq!(s.speed(), 2);
        assert_eq!(s.items_consumed(), 3);
    }

    #[test]
    fn speed_is_capped() {
        let (mut s, mut rng) = fresh(5);
        s.toggle_pause();

        // Row 10 holds 17 segments before the head would wrap into the body.
        for _ in 0..14 {
            eat_next(&mut s, &mut rng);
        }
        assert!(s.set_pending_heading(Down));
        for _ in 0..10 {
            eat_next(&mut s, &mut rng);
        }

        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.speed(), MAX_SPEED);
        assert_eq!(s.score(), 240);
        assert_eq!(s.snake().len(), 27);
    }

    #[test]
    fn crash_into_body_ends_game() {
        let (mut s, mut rng) = fresh(6);
        // Head at (0, 5) heading left wraps onto (17, 5), which is part of the body.
        let snake = Snake::from_segments(vec![(0, 5), (0, 4), (17, 4), (17, 5), (17, 6)]).unwrap();
        s.set_snake(snake, Left);
        park_item(&mut s);
        s.toggle_pause();
        let before = body(&s);

        assert_eq!(s.advance(&mut rng), Some(MoveResult::Crashed));
        assert_eq!(s.phase(), Phase::Over);
        assert_eq!(body(&s), before);
    }

    #[test]
    fn crash_into_tail_ends_game() {
        let (mut s, mut rng) = fresh(7);
        let snake = Snake::from_segments(vec![(1, 0), (1, 1), (0, 1), (0, 0)]).unwrap();
        s.set_snake(snake, Up);
        park_item(&mut s);
        assert!(s.set_pending_heading(Left));
        let before = body(&s);

        assert_eq!(s.advance(&mut rng), Some(MoveResult::Crashed));
        assert_eq!(s.phase(), Phase::Over);
        assert_eq!(body(&s), before);
    }

    #[test]
    fn over_is_terminal() {
        let (mut s, mut rng) = fresh(8);
        let snake = Snake::from_segments(vec![(1, 0), (1, 1), (0, 1), (0, 0)]).unwrap();
        s.set_snake(snake, Left);
        s.toggle_pause();
        s.advance(&mut rng);
        assert_eq!(s.phase(), Phase::Over);
        let before = body(&s);

        assert_eq!(s.advance(&mut rng), None);
        s.toggle_pause();
        assert!(!s.set_pending_heading(Down));
        assert_eq!(s.phase(), Phase::Over);
        assert_eq!(body(&s), before);
    }

    #[test]
    fn reversal_is_ignored() {
        let (mut s, _) = fresh(9);

        assert!(!s.set_pending_heading(Left));
        assert_eq!(s.pending_heading(), Right);
        assert_eq!(s.phase(), Phase::Idle);

        assert!(s.set_pending_heading(Up));
        assert_eq!(s.phase(), Phase::Running);
        // Still checked against the current heading, not the pending one.
        assert!(!s.set_pending_heading(Left));
        assert!(s.set_pending_heading(Down));
        assert_eq!(s.pending_heading(), Down);
    }

    #[test]
    fn idle_session_does_not_move() {
        let (mut s, mut rng) = fresh(10);
        let before = body(&s);

        assert_eq!(s.advance(&mut rng), None);
        assert_eq!(body(&s), before);
    }

    #[test]
    fn pause_toggles_between_idle_and_running() {
        let (mut s, _) = fresh(11);
        s.toggle_pause();
        assert_eq!(s.phase(), Phase::Running);
        s.toggle_pause();
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn best_score_survives_reset() {
        let (mut s, mut rng) = fresh(12);
        s.toggle_pause();
        eat_next(&mut s, &mut rng);
        eat_next(&mut s, &mut rng);

        s.reset(&mut rng);
        assert_eq!(s.best(), 20);
        assert_eq!(s.score(), 0);
        assert_eq!(s.phase(), Phase::Idle);

        s.toggle_pause();
        eat_next(&mut s, &mut rng);
        assert_eq!(s.best(), 20);
    }

    #[test]
    fn snapshot_mirrors_state() {
        let (mut s, _) = fresh(13);
        s.set_item((9, 9));
        let snap = s.snapshot();

        assert_eq!(snap.segments.front(), Some(&(4, 10)));
        assert_eq!(snap.item, (9, 9));
        assert_eq!(snap.heading, Right);
        assert_eq!(snap.phase, Phase::Idle);
        assert_eq!((snap.score, snap.best, snap.speed), (0, 0, 1));
    }
}
