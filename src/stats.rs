use crate::player::Player;

/// Percentage of the sequence read so far. A sequence of one word (or none)
/// has nothing to progress through, so it reports 0.
pub fn progress_percent(position: usize, total_words: usize) -> f64 {
    if total_words <= 1 {
        return 0.0;
    }
    position as f64 / (total_words - 1) as f64 * 100.0
}

/// Whole minutes left at the given rate, rounded up.
pub fn minutes_remaining(position: usize, total_words: usize, wpm: u16) -> u64 {
    if total_words == 0 {
        return 0;
    }
    let words_left = (total_words - 1).saturating_sub(position) as u64;
    words_left.div_ceil(u64::from(wpm.max(1)))
}

/// Point-in-time reading statistics derived from the player. Holds no state
/// of its own; take a fresh snapshot after every transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadingStats {
    pub total_words: usize,
    /// 1-based position for display, 0 when nothing is loaded.
    pub current_word: usize,
    pub progress_percent: f64,
    pub minutes_remaining: u64,
}

impl ReadingStats {
    pub fn snapshot(player: &Player) -> Self {
        let total = player.word_count();
        Self {
            total_words: total,
            current_word: if total > 0 { player.position() + 1 } else { 0 },
            progress_percent: progress_percent(player.position(), total),
            minutes_remaining: minutes_remaining(player.position(), total, player.wpm()),
        }
    }
}
