pub mod completion;
pub mod key;
pub mod pets;
