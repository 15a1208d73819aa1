pub mod length;
pub mod time;


pub use length::Length;
pub use time::Time;
