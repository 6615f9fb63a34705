pub mod session;

pub use session::{Advance, QuizPhase, QuizSession};
