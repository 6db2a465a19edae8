pub mod battle;
pub mod confrontation;
pub mod login;
pub mod map;
pub mod puzzle;
