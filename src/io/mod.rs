// Purpose - external interfaces, format conversions

pub mod wav;

pub use wav::{bounce, write_wav};
