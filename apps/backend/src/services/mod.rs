pub mod rounds;

pub use rounds::{RoundId, RoundService};
