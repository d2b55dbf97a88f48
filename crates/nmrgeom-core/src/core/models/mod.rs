pub mod atom;
pub mod error;
pub mod frame;
pub mod system;
pub mod tensor;
