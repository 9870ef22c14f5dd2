pub mod blend;
pub mod pipeline;
pub mod resize;
