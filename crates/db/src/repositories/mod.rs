//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod channel_repo;
pub mod dislike_repo;
pub mod like_repo;
pub mod subscription_repo;
pub mod user_repo;
pub mod video_repo;

pub use channel_repo::ChannelRepo;
pub use dislike_repo::DislikeRepo;
pub use like_repo::LikeRepo;
pub use subscription_repo::SubscriptionRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;
