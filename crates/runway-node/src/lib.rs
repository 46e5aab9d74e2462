mod fnm;
mod nvm;

pub use fnm::FnmProvider;
pub use nvm::NvmProvider;
