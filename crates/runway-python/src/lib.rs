mod pyenv;

pub use pyenv::PyenvProvider;
