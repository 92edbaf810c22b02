//! Profile builder: folds questionnaire answers into a lifestyle profile.
//!
//! [`build_profile`] is a pure function of the answer set and the question
//! catalog. There is no hidden state, so the same answers always produce the
//! same profile.

mod answers;
mod builder;
mod describe;
mod error;

pub use answers::AnswerSet;
pub use builder::build_profile;
pub use describe::describe;
pub use error::{Result, ValidationError};
