pub mod clock;
pub mod logger;
pub mod state_machine;
