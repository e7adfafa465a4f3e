pub mod json_body;
pub mod round_id;

pub use json_body::JsonBody;
pub use round_id::RoundIdPath;
