pub mod adapter;
pub mod solsim_vis2d;
