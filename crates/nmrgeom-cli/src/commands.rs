pub mod dipolar;
pub mod euler;
pub mod jcoupling;
