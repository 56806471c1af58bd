mod icon_ref;

pub use icon_ref::*;
