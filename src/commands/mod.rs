pub mod generate;
pub mod sample;
pub mod turbulence;
pub mod yplus;
