mod blocking_container;
mod container_mode;
mod element_buffer;
mod queue;
mod stack;

pub use self::{blocking_container::*, container_mode::*, element_buffer::*, queue::*, stack::*};
