pub mod convert;
pub mod model;
pub mod sign;
pub mod source;

pub use source::QQMusic;
