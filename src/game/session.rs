//! The game state machine.
//!
//! `GameSession` owns the dataset, the session config, a random source and
//! the `RoundState`. Every player intent is one method call; calls that
//! make no sense in the current phase are ignored rather than rejected.
//!
//! ## Example
//!
//! ```
//! use country_guesser::{Dataset, GameMode, GameSession, Phase, SessionConfig};
//!
//! let mut session = GameSession::new(Dataset::standard(), SessionConfig::default()).unwrap();
//! session.start(GameMode::Practice);
//! assert_eq!(session.state().phase, Phase::Playing);
//!
//! let outcome = session.guess(0).unwrap();
//! assert_eq!(session.state().phase, Phase::RoundResolved);
//! assert_eq!(session.state().score, u32::from(outcome.is_correct));
//!
//! // A second guess in the same round is ignored.
//! assert!(session.guess(1).is_none());
//! ```

use tracing::{debug, info};

use super::snapshot::{CountryView, MetricView, RoundSnapshot, ScoreVerdict};
use super::state::{CountryPair, GuessOutcome, Phase, RoundState, Side};
use crate::core::{GameMode, GameRng, RandomSource, Result, SessionConfig};
use crate::data::{CountryId, Dataset, Metric, MetricIndex, RankedTable};

/// A play session: one player, many games, one high score.
#[derive(Clone, Debug)]
pub struct GameSession<R: RandomSource = GameRng> {
    dataset: Dataset,
    config: SessionConfig,
    rng: R,
    state: RoundState,
}

impl GameSession<GameRng> {
    /// Create a session seeded from `config.seed`.
    pub fn new(dataset: Dataset, config: SessionConfig) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(dataset, config, rng)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session drawing from a caller-supplied random source.
    ///
    /// The session starts in `Loading`; call `start` to draw the first pair.
    pub fn with_rng(dataset: Dataset, config: SessionConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let metric = config
            .initial_metric
            .as_deref()
            .map_or(MetricIndex::FIRST, |id| dataset.metric_or_default(id));
        let state = RoundState::new(config.mode, metric);

        debug!(
            countries = dataset.country_count(),
            metrics = dataset.metric_count(),
            rounds_per_game = config.rounds_per_game,
            "session created"
        );

        Ok(Self {
            dataset,
            config,
            rng,
            state,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current round state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// The random source, e.g. to inspect how many draws a scripted source served.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Metric of the current round.
    #[must_use]
    pub fn current_metric(&self) -> &Metric {
        self.dataset.metric(self.state.metric)
    }

    /// Ranking for the data-browser view. Unknown ids fall back to the first metric.
    #[must_use]
    pub fn ranking(&self, metric_id: &str) -> &RankedTable {
        self.dataset.ranking_for(metric_id)
    }

    // === Operations ===

    /// Start a new game in `mode`.
    ///
    /// Resets score, round and streak, draws a pair, and in random mode
    /// draws a metric. Practice mode keeps the current selection.
    pub fn start(&mut self, mode: GameMode) {
        self.state.mode = mode;
        self.state.reset_game();
        self.deal();
        if mode == GameMode::Random {
            self.state.metric = self.draw_metric();
        }
        self.state.phase = Phase::Playing;

        info!(mode = %mode, metric = %self.current_metric().id, "game started");
    }

    /// Pick side `choice` (0 = left, 1 = right).
    ///
    /// Ignored (returns `None`) unless a pair is shown and unanswered, or if
    /// `choice` is not 0 or 1.
    pub fn guess(&mut self, choice: usize) -> Option<GuessOutcome> {
        if !self.state.awaiting_guess() {
            debug!(phase = ?self.state.phase, choice, "guess ignored");
            return None;
        }
        let Some(side) = Side::from_index(choice) else {
            debug!(choice, "guess ignored: no such side");
            return None;
        };
        let pair = self.state.pair?;

        let metric = self.dataset.metric(self.state.metric);
        let chosen_value = metric.value(self.dataset.country(pair.get(side))?);
        let other_value = metric.value(self.dataset.country(pair.get(side.other()))?);
        let is_correct = metric.direction.beats(chosen_value, other_value);

        self.state.answered = true;
        self.state.is_correct = is_correct;
        self.state.last_choice = Some(side);

        let game_over = if is_correct {
            self.state.record_hit();
            false
        } else {
            self.state.record_miss(self.config.rounds_per_game)
        };
        self.state.phase = if game_over {
            Phase::GameOver
        } else {
            Phase::RoundResolved
        };

        debug!(
            round = self.state.round,
            side = ?side,
            chosen_value,
            other_value,
            is_correct,
            score = self.state.score,
            streak = self.state.streak,
            "guess resolved"
        );
        if game_over {
            info!(
                score = self.state.score,
                high_score = self.state.high_score,
                "game over"
            );
        }

        Some(GuessOutcome {
            side,
            is_correct,
            chosen_value,
            other_value,
            game_over,
        })
    }

    /// Advance to the next round.
    ///
    /// Only applies after a guess on a game that is still running. The round
    /// number saturates at the final round, which repeats until a miss.
    /// Returns whether the round advanced.
    pub fn next_round(&mut self) -> bool {
        if self.state.phase != Phase::RoundResolved {
            debug!(phase = ?self.state.phase, "next round ignored");
            return false;
        }

        self.state.round = (self.state.round + 1).min(self.config.rounds_per_game);
        self.state.clear_answer();
        self.deal();
        if self.state.mode == GameMode::Random {
            self.state.metric = self.draw_metric();
        }
        self.state.phase = Phase::Playing;

        debug!(round = self.state.round, metric = %self.current_metric().id, "next round");
        true
    }

    /// Select the practice metric and restart the game with it.
    ///
    /// Ignored in random mode. Unknown ids select the first metric.
    /// Returns whether the selection was applied.
    pub fn change_metric(&mut self, metric_id: &str) -> bool {
        if self.state.mode != GameMode::Practice {
            debug!(metric_id, "metric change ignored in random mode");
            return false;
        }

        self.state.metric = self.dataset.metric_or_default(metric_id);
        self.state.reset_game();
        self.deal();
        self.state.phase = Phase::Playing;

        info!(metric = %self.current_metric().id, "practice metric changed");
        true
    }

    /// After game over, start over in the same mode; otherwise advance the round.
    ///
    /// Returns whether anything happened.
    pub fn play_again(&mut self) -> bool {
        if self.state.phase == Phase::GameOver {
            self.start(self.state.mode);
            true
        } else {
            self.next_round()
        }
    }

    /// Switch between random and practice mode, restarting the game.
    ///
    /// Returns the new mode.
    pub fn toggle_mode(&mut self) -> GameMode {
        let mode = self.state.mode.toggled();
        self.start(mode);
        mode
    }

    // === Views ===

    /// Owned view of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        let metric = self.current_metric();
        let pair = self
            .state
            .pair
            .map(|pair| Side::BOTH.map(|side| self.country_view(metric, pair, side)));
        let verdict = self
            .state
            .is_game_over
            .then(|| ScoreVerdict::for_score(self.state.score, self.config.rounds_per_game));

        RoundSnapshot {
            phase: self.state.phase,
            mode: self.state.mode,
            metric: MetricView::from(metric),
            pair,
            answered: self.state.answered,
            is_correct: self.state.is_correct,
            chosen: self.state.last_choice,
            round: self.state.round,
            rounds_per_game: self.config.rounds_per_game,
            score: self.state.score,
            streak: self.state.streak,
            high_score: self.state.high_score,
            is_game_over: self.state.is_game_over,
            verdict,
            transition_delay_ms: self.config.transition_delay_ms,
        }
    }

    fn country_view(&self, metric: &Metric, pair: CountryPair, side: Side) -> CountryView {
        let id = pair.get(side);
        let this = self.dataset.country(id);
        let other = self.dataset.country(pair.get(side.other()));

        let (name, code) = this.map_or_else(Default::default, |c| (c.name.clone(), c.code.clone()));
        let revealed = match (self.state.answered, this, other) {
            (true, Some(this), Some(other)) => Some((metric.value(this), metric.value(other))),
            _ => None,
        };

        CountryView {
            id,
            name,
            code,
            value: revealed.map(|(v, _)| v),
            formatted_value: revealed.map(|(v, _)| metric.format_value(v)),
            holds_winning_value: revealed.map(|(v, o)| !metric.direction.beats(o, v)),
            chosen: self.state.last_choice == Some(side),
        }
    }

    // === Drawing ===

    /// Draw a fresh pair into the state.
    fn deal(&mut self) {
        self.state.pair = Some(self.draw_pair());
    }

    /// Two distinct countries, uniformly without replacement.
    ///
    /// Partial Fisher-Yates over a fresh index list; the loop resamples if a
    /// source ever produces a self-pair.
    fn draw_pair(&mut self) -> CountryPair {
        loop {
            let mut order: Vec<CountryId> = self.dataset.country_ids().collect();
            self.rng.partial_shuffle(&mut order, 2);
            if let Some(pair) = CountryPair::new(order[0], order[1]) {
                return pair;
            }
        }
    }

    /// Uniform metric draw.
    fn draw_metric(&mut self) -> MetricIndex {
        let index = self
            .rng
            .choose_index(self.dataset.metric_count())
            .unwrap_or(0);
        MetricIndex::from_index(index).unwrap_or(MetricIndex::FIRST)
    }
}
