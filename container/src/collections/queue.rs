use std::collections::VecDeque;
use std::time::Duration;

use thiserror::Error;

use crate::collections::ElementBuffer;


/// An error that occurs when a queue operation fails.<br/>
/// キューの操作に失敗した場合に発生するエラー。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
  #[error("Timed out waiting for an element after {0:?}")]
  TimeoutError(Duration),
}

/// A first-in-first-out buffer.<br/>
/// 先入れ先出しのバッファ。
#[derive(Debug, Clone)]
pub struct QueueBuffer<E> {
  items: VecDeque<E>,
}

impl<E> QueueBuffer<E> {
  pub fn new() -> Self {
    QueueBuffer { items: VecDeque::new() }
  }

  pub fn with_capacity(capacity: usize) -> Self {
    QueueBuffer {
      items: VecDeque::with_capacity(capacity),
    }
  }
}

impl<E> Default for QueueBuffer<E> {
  fn default() -> Self {
    QueueBuffer::new()
  }
}

impl<E> ElementBuffer<E> for QueueBuffer<E> {
  fn push(&mut self, element: E) {
    self.items.push_back(element);
  }

  fn pop_next(&mut self) -> Option<E> {
    self.items.pop_front()
  }

  fn len(&self) -> usize {
    self.items.len()
  }
}
