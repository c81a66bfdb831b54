pub mod channels;
pub mod engagement;
pub mod sessions;
pub mod users;
pub mod videos;
