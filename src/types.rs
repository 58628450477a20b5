pub mod list_multimap;
pub mod multimap;
pub mod pair;
pub mod set_multimap;


pub use list_multimap::*;
pub use multimap::*;
pub use pair::*;
pub use set_multimap::*;
