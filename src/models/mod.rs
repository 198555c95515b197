pub mod disk;
pub mod locate;
pub mod pool;
