//! Skillcheck rule engine
//!
//! Walks a skill directory and evaluates each structural and content rule
//! independently. Every rule emits findings (a Pass finding when satisfied);
//! no rule's outcome feeds into another's evaluation. One call, one pass,
//! nothing retained between runs.

pub mod checker;
pub mod discover;
pub mod fix;
pub mod limits;
pub mod skill_dir;
pub mod stats;

pub use checker::Checker;
pub use limits::Limits;
pub use skill_dir::SkillDirectory;
