pub mod hello;
pub mod motivate;
pub mod ping;
