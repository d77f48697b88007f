#![no_std]

pub mod env;
pub mod paths;
pub mod tool;
