//! Cloneable entity graphs
//!
//! Two small hierarchies exercising the [`DeepClone`](crate::clone::DeepClone)
//! capability: a commerce order owning its products, and a game character
//! owning optional equipment and an ordered skill list.

pub mod character;
pub mod order;

pub use character::{Armor, Character, Skill, SkillKind, Weapon};
pub use order::{Order, Product};
