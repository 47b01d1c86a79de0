pub mod barrier;
pub mod mc_engine;
pub mod option;
pub mod path_generator;
pub mod payoffs;
