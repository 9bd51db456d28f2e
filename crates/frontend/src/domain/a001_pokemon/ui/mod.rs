pub mod fragments;
pub mod randomizer;
