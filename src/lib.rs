//! Game of Life background engine for an analog clock face

pub mod face;
pub mod life;
pub mod scheduler;
pub mod seeder;
pub mod settings;

pub use life::{Cell, LifeError, LifeGrid};
