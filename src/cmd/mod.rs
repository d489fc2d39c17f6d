pub mod check;
pub mod collect;
