pub mod session;
pub mod literal;
pub mod directive;

#[cfg(test)]
mod tests;

pub use directive::parse_directive;
pub use literal::{parse_literal, Literal, LiteralError};
