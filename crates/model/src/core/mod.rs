pub mod data_type;
pub mod decode;
pub mod default_value;
pub mod registry;
pub mod value;
