//! The three rule families, each parameterized by a level `k`: [`naked`],
//! [`hidden`], and [`linked`]. [`crate::deducer`] drives them in order across
//! increasing `k` to build the lazy step stream.

pub mod hidden;
pub mod linked;
pub mod naked;
