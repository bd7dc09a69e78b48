pub mod collections;

pub use collections::{
  BlockingContainer, ContainerConfig, ContainerMode, ElementBuffer, QueueBuffer, QueueError, StackBuffer,
};

pub mod prelude {
  pub use super::{
    BlockingContainer, ContainerConfig, ContainerMode, ElementBuffer, QueueBuffer, QueueError, StackBuffer,
  };
}
