pub mod compare;
pub mod sort;
pub mod value;
