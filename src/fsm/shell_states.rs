use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellState {
    AwaitingInput,
    Terminated,
}

impl fmt::Display for ShellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShellState::AwaitingInput => write!(f, "Awaiting Input"),
            ShellState::Terminated => write!(f, "Terminated"),
        }
    }
}
