pub use campaign::*;

mod campaign;
