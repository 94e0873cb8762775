pub mod condition;
pub mod grid;
pub mod history;
pub mod initial;
pub mod scheme;
