pub mod action;
pub mod camera;
pub mod notice;
pub mod page;
pub mod patient;
pub mod query;
pub mod routine;
pub mod settings;

pub use action::*;
pub use camera::*;
pub use notice::*;
pub use page::*;
pub use patient::*;
pub use query::*;
pub use routine::*;
pub use settings::*;
