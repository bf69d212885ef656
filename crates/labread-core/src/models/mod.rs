pub mod interpretation;
pub mod item;
pub mod level;
pub mod request;
