mod rbenv;
mod uru;

pub use rbenv::RbenvProvider;
pub use uru::UruProvider;
