pub mod home;
pub mod predict;
