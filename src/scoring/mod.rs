pub mod engine;
pub mod tables;

pub use engine::{calculate_score, Classification, Dedication, ScoreBreakdown};
pub use tables::{
    color_points, combo_bonus, hours_points, personalization_bonus, school_points, sign_points,
};
