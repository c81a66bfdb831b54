pub mod engagement;
pub mod user;
pub mod video;
