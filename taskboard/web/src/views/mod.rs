mod not_found;
mod tasks;

pub use not_found::NotFound;
pub use tasks::Tasks;
