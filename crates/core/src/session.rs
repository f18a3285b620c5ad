//! Session module - the controller that owns a running game
//!
//! A session holds the grid, the cumulative score and the tile source. It
//! applies engine moves, spawns a tile after every move that changed the
//! grid, and checks for game over only after that spawn.

use crate::engine;
use crate::grid::Grid;
use crate::rng::TileSource;
use crate::snapshot::GameSnapshot;
use crate::stage::{Scenery, Stage, StageTable};
use crate::types::{Direction, GameAction};

/// Where the game stands. Moves are only accepted while `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Play {
    Playing(Grid),
    GameOver(Grid),
}

/// What a move did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game is over; input was dropped.
    Ignored,
    /// Nothing could slide that way. No spawn, no score.
    Unchanged,
    Moved {
        points: u32,
        /// Where the follow-up tile landed.
        spawned: Option<(usize, usize)>,
        /// True if this move ended the game.
        game_over: bool,
    },
}

impl MoveOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// A running game.
#[derive(Debug, Clone)]
pub struct Session<S> {
    play: Play,
    score: u32,
    /// Successful moves in the current episode.
    moves: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    stages: StageTable,
    source: S,
}

impl<S: TileSource> Session<S> {
    /// Start a new game with two random tiles.
    pub fn new(mut source: S) -> Self {
        let grid = engine::initialize(&mut source);
        Self::with_grid(grid, source)
    }

    /// Resume from a known grid with a score of 0.
    ///
    /// A grid with no move left starts out in game over.
    pub fn with_grid(grid: Grid, source: S) -> Self {
        let play = if grid.has_available_move() {
            Play::Playing(grid)
        } else {
            Play::GameOver(grid)
        };
        Self {
            play,
            score: 0,
            moves: 0,
            episode_id: 0,
            stages: StageTable::default(),
            source,
        }
    }

    pub fn with_stages(mut self, stages: StageTable) -> Self {
        self.stages = stages;
        self
    }

    pub fn grid(&self) -> &Grid {
        match &self.play {
            Play::Playing(grid) | Play::GameOver(grid) => grid,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.play, Play::GameOver(_))
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn stage(&self) -> &'static Stage {
        self.stages.stage_for(self.score)
    }

    pub fn stages(&self) -> &StageTable {
        &self.stages
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Shift tiles toward `direction`.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let Play::Playing(grid) = self.play else {
            log::debug!("ignoring {} after game over", direction);
            return MoveOutcome::Ignored;
        };

        let result = engine::apply_move(&grid, direction);
        if !result.moved {
            return MoveOutcome::Unchanged;
        }

        let mut next = result.grid;
        let spawned = engine::spawn(&mut next, &mut self.source);
        self.score = self.score.saturating_add(result.points);
        self.moves += 1;

        let game_over = !engine::has_available_move(&next);
        self.play = if game_over {
            log::info!(
                "game over after {} moves, score {}, best tile {}",
                self.moves,
                self.score,
                next.max_tile()
            );
            Play::GameOver(next)
        } else {
            Play::Playing(next)
        };

        log::debug!(
            "move {}: +{} (score {})",
            direction,
            result.points,
            self.score
        );
        MoveOutcome::Moved {
            points: result.points,
            spawned,
            game_over,
        }
    }

    /// Apply a game action. Returns true if the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).changed(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Fresh grid, score 0, back to playing.
    pub fn restart(&mut self) {
        let grid = engine::initialize(&mut self.source);
        self.play = Play::Playing(grid);
        self.score = 0;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        log::info!("restarted (episode {})", self.episode_id);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let grid = self.grid();
        grid.write_cells(&mut out.grid);
        out.score = self.score;
        out.game_over = self.is_game_over();
        out.stage = *self.stage();
        out.scenery = Scenery::for_score(self.score);
        out.next_stage_at = self.stages.next_after(self.score).map(|s| s.threshold);
        out.best_tile = grid.max_tile();
        out.moves = self.moves;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedSource, SeededRng};
    use crate::types::Tile;

    fn grid(rows: [[Tile; 4]; 4]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    /// One move from game over: sliding left merges the 2s, the spawn fills
    /// the freed cell, and nothing is left to merge.
    fn nearly_stuck() -> Grid {
        grid([
            [2, 2, 8, 16],
            [8, 16, 32, 64],
            [16, 32, 64, 128],
            [32, 64, 128, 256],
        ])
    }

    #[test]
    fn new_session_starts_playing_with_two_tiles() {
        let session = Session::new(SeededRng::new(1));
        assert!(!session.is_game_over());
        assert_eq!(session.score(), 0);
        assert_eq!(session.grid().count_filled(), 2);
        assert_eq!(session.stage().zone, "Ground");
    }

    #[test]
    fn successful_move_spawns_and_scores() {
        let start = grid([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut session = Session::with_grid(start, ScriptedSource::zeros());

        let outcome = session.apply_move(Direction::Left);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                points: 4,
                spawned: Some((0, 1)),
                game_over: false
            }
        );
        assert_eq!(session.score(), 4);
        assert_eq!(session.moves(), 1);
        assert_eq!(session.grid().get(0, 0), Some(4));
        assert_eq!(session.grid().get(0, 1), Some(2));
    }

    #[test]
    fn unchanged_move_does_not_spawn() {
        let start = grid([[4, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut session = Session::with_grid(start, ScriptedSource::zeros());

        assert_eq!(session.apply_move(Direction::Left), MoveOutcome::Unchanged);
        assert_eq!(session.grid(), &start);
        assert_eq!(session.score(), 0);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.source().calls(), 0);
    }

    #[test]
    fn final_move_ends_the_game() {
        // After the merge, row 0 is [4, 8, 16, 0]; a spawned 2 leaves no pairs.
        let mut session = Session::with_grid(nearly_stuck(), ScriptedSource::zeros());

        let outcome = session.apply_move(Direction::Left);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                points: 4,
                spawned: Some((0, 3)),
                game_over: true
            }
        );
        assert!(session.is_game_over());
        assert!(session.snapshot().game_over);
    }

    #[test]
    fn moves_after_game_over_are_ignored() {
        let mut session = Session::with_grid(nearly_stuck(), ScriptedSource::zeros());
        session.apply_move(Direction::Left);
        let score = session.score();
        let grid = *session.grid();
        let calls = session.source().calls();

        for dir in Direction::ALL {
            assert_eq!(session.apply_move(dir), MoveOutcome::Ignored);
        }
        assert_eq!(session.score(), score);
        assert_eq!(session.grid(), &grid);
        assert_eq!(session.source().calls(), calls);
    }

    #[test]
    fn restart_resets_everything_but_the_episode() {
        let mut session = Session::with_grid(nearly_stuck(), ScriptedSource::zeros());
        session.apply_move(Direction::Left);
        assert!(session.is_game_over());

        assert!(session.apply_action(GameAction::Restart));
        assert!(!session.is_game_over());
        assert_eq!(session.score(), 0);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.episode_id(), 1);
        assert_eq!(session.grid().count_filled(), 2);
    }

    #[test]
    fn terminal_grid_starts_in_game_over() {
        let stuck = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let session = Session::with_grid(stuck, ScriptedSource::zeros());
        assert!(session.is_game_over());
    }

    #[test]
    fn score_never_decreases() {
        let mut session = Session::new(SeededRng::new(42));
        let mut last = 0;
        for i in 0..500 {
            session.apply_move(Direction::ALL[i % 4]);
            assert!(session.score() >= last);
            last = session.score();
        }
    }

    #[test]
    fn snapshot_reflects_session() {
        let start = grid([[256, 256, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut session = Session::with_grid(start, ScriptedSource::zeros());
        session.apply_move(Direction::Left);

        let snap = session.snapshot();
        assert_eq!(snap.score, 512);
        assert_eq!(snap.stage.zone, "Village");
        assert_eq!(snap.best_tile, 512);
        assert_eq!(snap.grid[0][0], 512);
        assert_eq!(snap.moves, 1);
        assert!(!snap.scenery.clouds);
        assert_eq!(snap.next_stage_at, Some(2000));
    }
}
