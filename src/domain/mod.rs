pub mod failure;
pub mod pointer;
