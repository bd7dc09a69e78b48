use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::collections::BlockingContainer;


/// The removal discipline of a [`BlockingContainer`].<br/>
/// [`BlockingContainer`] の取り出し規律。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ContainerMode {
  /// First in, first out (queue order).<br/>
  /// 先入れ先出し。
  #[default]
  Fifo,
  /// Last in, first out (stack order).<br/>
  /// 後入れ先出し。
  Lifo,
}

impl ContainerMode {
  pub fn is_stack(&self) -> bool {
    matches!(self, ContainerMode::Lifo)
  }
}

impl From<bool> for ContainerMode {
  /// `true` selects stack order.
  fn from(use_stack: bool) -> Self {
    if use_stack {
      ContainerMode::Lifo
    } else {
      ContainerMode::Fifo
    }
  }
}

/// Settings for building a [`BlockingContainer`], readable from any serde format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
  pub mode: ContainerMode,
  /// Pre-allocated slots. Not an upper bound.
  pub initial_capacity: Option<usize>,
}

impl ContainerConfig {
  pub fn new(mode: ContainerMode) -> Self {
    Self {
      mode,
      initial_capacity: None,
    }
  }

  pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
    self.initial_capacity = Some(capacity);
    self
  }

  pub fn build<E>(&self) -> BlockingContainer<E> {
    match self.initial_capacity {
      Some(capacity) => BlockingContainer::with_capacity(self.mode, capacity),
      None => BlockingContainer::new(self.mode),
    }
  }
}
