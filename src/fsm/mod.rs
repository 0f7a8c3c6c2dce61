pub mod shell_states;
pub mod state_machine;
