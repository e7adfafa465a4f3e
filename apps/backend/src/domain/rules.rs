pub const PLAYERS: usize = 4;
/// Each of the 24 distinct cards appears twice.
pub const DECK_SIZE: usize = 48;
pub const HAND_SIZE: usize = 12;
pub const PASS_SIZE: usize = 4;
pub const TRICKS_PER_ROUND: u8 = 12;
pub const MIN_OPENING_BID: u16 = 24;

/// Rotation position of the player seated opposite `seat`.
#[inline]
pub fn partner_seat(seat: usize) -> usize {
    (seat + 2) % PLAYERS
}

#[inline]
pub fn next_seat(seat: usize) -> usize {
    (seat + 1) % PLAYERS
}
