pub mod cooldown;
pub mod flow;
