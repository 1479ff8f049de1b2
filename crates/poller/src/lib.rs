pub mod poll_loop;
pub mod source;

pub use poll_loop::{CycleOutcome, PollLoop, PollState};
pub use source::{HomeworkSource, PracticumClient};
