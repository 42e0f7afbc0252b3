//! Judge evaluation: result value object, response decoding, and the prompt
//! sent to the judge.

pub mod parsing;
pub mod prompt;
pub mod result;
