pub mod constants;
pub mod id;
pub mod isa;
pub mod map;
pub mod value;

pub use id::{IdAllocator, IdRef};
pub use isa::Isa;
pub use map::{MapEntry, PMap};
pub use value::Value;
