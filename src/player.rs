use std::time::Duration;

use log::debug;

pub const MIN_WPM: u16 = 100;
pub const MAX_WPM: u16 = 1000;
pub const WPM_STEP: u16 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlayerState {
    Idle,
    Running,
    Paused,
    Finished,
}

/// Outcome of a single scheduler tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tick {
    /// Moved to the next word.
    Advanced,
    /// Reached the last word; reported exactly once per completed pass.
    Finished,
    /// The player was not running, nothing changed.
    Ignored,
}

/// Word-at-a-time playback scheduler.
///
/// Owns the word sequence, the position pointer, and the play/pause state.
/// The caller drives it by calling [`Player::tick`] once per
/// [`Player::tick_interval`]; re-querying the interval every cycle is what
/// makes a rate change take effect on the next tick without touching the
/// position.
pub struct Player {
    words: Vec<String>,
    position: usize,
    wpm: u16,
    state: PlayerState,
}

impl Player {
    pub fn new(wpm: u16) -> Self {
        Self {
            words: Vec::new(),
            position: 0,
            wpm: wpm.clamp(MIN_WPM, MAX_WPM),
            state: PlayerState::Idle,
        }
    }

    /// Replace the word sequence. Always returns the player to idle at
    /// position 0, whatever state it was in.
    pub fn load(&mut self, words: Vec<String>) {
        debug!("loading {} words", words.len());
        self.words = words;
        self.position = 0;
        self.state = PlayerState::Idle;
    }

    /// Begin or resume playback. No-op when the sequence is empty or the
    /// player is already running or finished.
    pub fn start(&mut self) -> bool {
        if self.words.is_empty() {
            return false;
        }
        match self.state {
            PlayerState::Idle | PlayerState::Paused => {
                self.state = PlayerState::Running;
                true
            }
            PlayerState::Running | PlayerState::Finished => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.state == PlayerState::Running {
            self.state = PlayerState::Paused;
            true
        } else {
            false
        }
    }

    /// Return to idle at position 0. No-op when already at position 0.
    pub fn reset(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position = 0;
        self.state = PlayerState::Idle;
        true
    }

    /// Clamp and apply a new rate. Never alters the position; the caller
    /// picks up the new interval on its next `tick_interval` query.
    pub fn set_wpm(&mut self, wpm: u16) -> u16 {
        self.wpm = wpm.clamp(MIN_WPM, MAX_WPM);
        self.wpm
    }

    /// Advance one word. Reaching the last index transitions to finished,
    /// reported as [`Tick::Finished`] exactly once.
    pub fn tick(&mut self) -> Tick {
        if self.state != PlayerState::Running {
            return Tick::Ignored;
        }
        let last = self.words.len().saturating_sub(1);
        if self.position < last {
            self.position += 1;
        }
        if self.position >= last {
            self.state = PlayerState::Finished;
            return Tick::Finished;
        }
        Tick::Advanced
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(60_000 / u64::from(self.wpm.max(1)))
    }

    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.position).map(String::as_str)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn wpm(&self) -> u16 {
        self.wpm
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(count: usize) -> Player {
        let mut player = Player::new(300);
        player.load((0..count).map(|i| format!("w{i}")).collect());
        player
    }

    #[test]
    fn new_player_clamps_rate_to_bounds() {
        assert_eq!(Player::new(50).wpm(), MIN_WPM);
        assert_eq!(Player::new(5000).wpm(), MAX_WPM);
        assert_eq!(Player::new(300).wpm(), 300);
    }

    #[test]
    fn start_is_refused_on_empty_sequence() {
        let mut player = Player::new(300);
        assert!(!player.start());
        assert_eq!(player.state(), PlayerState::Idle);
    }

    #[test]
    fn start_while_running_is_a_no_op() {
        let mut player = loaded(5);
        assert!(player.start());
        assert!(!player.start());
        assert_eq!(player.state(), PlayerState::Running);
    }

    #[test]
    fn n_minus_one_ticks_finish_a_sequence_of_n() {
        let mut player = loaded(5);
        player.start();
        assert_eq!(player.tick(), Tick::Advanced);
        assert_eq!(player.tick(), Tick::Advanced);
        assert_eq!(player.tick(), Tick::Advanced);
        assert_eq!(player.tick(), Tick::Finished);
        assert_eq!(player.position(), 4);
        assert_eq!(player.state(), PlayerState::Finished);
    }

    #[test]
    fn tick_after_finish_is_ignored_and_holds_position() {
        let mut player = loaded(5);
        player.start();
        for _ in 0..4 {
            player.tick();
        }
        assert_eq!(player.tick(), Tick::Ignored);
        assert_eq!(player.position(), 4);
        assert_eq!(player.state(), PlayerState::Finished);
    }

    #[test]
    fn finished_is_reported_exactly_once_per_pass() {
        let mut player = loaded(3);
        player.start();
        let finishes = (0..10).filter(|_| player.tick() == Tick::Finished).count();
        assert_eq!(finishes, 1);
    }

    #[test]
    fn single_word_sequence_finishes_on_first_tick() {
        let mut player = loaded(1);
        assert!(player.start());
        assert_eq!(player.tick(), Tick::Finished);
        assert_eq!(player.position(), 0);
    }

    #[test]
    fn tick_while_paused_is_ignored() {
        let mut player = loaded(5);
        player.start();
        player.tick();
        assert!(player.pause());
        assert_eq!(player.tick(), Tick::Ignored);
        assert_eq!(player.position(), 1);
    }

    #[test]
    fn paused_playback_resumes_where_it_stopped() {
        let mut player = loaded(5);
        player.start();
        player.tick();
        player.pause();
        assert!(player.start());
        assert_eq!(player.tick(), Tick::Advanced);
        assert_eq!(player.position(), 2);
    }

    #[test]
    fn reset_at_position_zero_is_a_no_op() {
        let mut player = loaded(5);
        player.start();
        let state_before = player.state();
        assert!(!player.reset());
        assert_eq!(player.state(), state_before);
    }

    #[test]
    fn reset_mid_read_returns_to_idle() {
        let mut player = loaded(5);
        player.start();
        player.tick();
        assert!(player.reset());
        assert_eq!(player.position(), 0);
        assert_eq!(player.state(), PlayerState::Idle);
    }

    #[test]
    fn reset_after_finish_allows_a_new_pass() {
        let mut player = loaded(3);
        player.start();
        while player.tick() != Tick::Finished {}
        assert!(player.reset());
        assert!(player.start());
        assert_eq!(player.tick(), Tick::Advanced);
    }

    #[test]
    fn rate_change_while_running_keeps_position() {
        let mut player = loaded(10);
        player.start();
        player.tick();
        player.tick();
        assert_eq!(player.set_wpm(600), 600);
        assert_eq!(player.position(), 2);
        assert_eq!(player.state(), PlayerState::Running);
        assert_eq!(player.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn tick_interval_is_floor_of_60000_over_wpm() {
        let mut player = Player::new(300);
        assert_eq!(player.tick_interval(), Duration::from_millis(200));
        player.set_wpm(130);
        // 60000 / 130 = 461.53..., truncated
        assert_eq!(player.tick_interval(), Duration::from_millis(461));
    }

    #[test]
    fn loading_replaces_sequence_and_resets_state() {
        let mut player = loaded(5);
        player.start();
        player.tick();
        player.load(vec!["again".into()]);
        assert_eq!(player.position(), 0);
        assert_eq!(player.state(), PlayerState::Idle);
        assert_eq!(player.current_word(), Some("again"));
    }
}
