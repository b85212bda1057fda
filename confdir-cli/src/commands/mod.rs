pub mod export;
pub mod participants;
pub mod posters;
pub mod program;
pub mod talk;
