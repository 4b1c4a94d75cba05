pub mod kind;
pub mod rational;
pub mod value;


pub use kind::Kind;
pub use rational::{Rational, RationalError};
pub use value::{LiteralError, Value};
