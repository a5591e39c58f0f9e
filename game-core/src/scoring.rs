/// Points for a flawless round.
pub const WIN_SCORE_MAX: i32 = 100;

/// Every wrong guess costs this much of the reward.
pub const WRONG_GUESS_PENALTY: i32 = 10;

/// Completing the word is always worth something.
pub const WIN_SCORE_FLOOR: i32 = 10;

/// Reward for completing the word with `wrong_guesses` misses.
pub fn win_score(wrong_guesses: u32) -> i32 {
    (WIN_SCORE_MAX - wrong_guesses as i32 * WRONG_GUESS_PENALTY).max(WIN_SCORE_FLOOR)
}
