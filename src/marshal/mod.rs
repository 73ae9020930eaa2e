//! Boundary marshaling between a dynamically typed host and the kernels.
//!
//! ## Components
//!
//! - [`HostValue`]: crate-side model of one host value
//! - [`buffer`]: checked conversions to and from `u32` / `u64` / `f64`
//!   buffers and string lists
//! - [`ElementArena`]: slab-backed storage for opaque elements the generic
//!   sort engine orders by handle
//!
//! Conversions are all-or-nothing. A sequence with one bad element fails
//! with a `Conversion` error naming that element, and no partial buffer
//! is returned.

pub mod arena;
pub mod buffer;
pub mod value;

pub use arena::ElementArena;
pub use buffer::{
    from_f64_buffer, from_strings, from_u32_buffer, from_u64_buffer, to_f64, to_f64_buffer,
    to_string_vec, to_u32, to_u32_buffer, to_u64, to_u64_buffer,
};
pub use value::{HostValue, MAX_SAFE_INTEGER};
