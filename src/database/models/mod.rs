pub mod mentor;
pub mod skill;

pub use mentor::{Mentor, MentorsData};
pub use skill::Skill;
