pub mod codec;
pub mod encoder;
pub mod runner;

pub use encoder::{decode_data_url, ResultEncoder};
pub use runner::{FilterRunner, ResultSet};
