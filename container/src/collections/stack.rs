use crate::collections::ElementBuffer;


/// A last-in-first-out buffer.<br/>
/// 後入れ先出しのバッファ。
#[derive(Debug, Clone)]
pub struct StackBuffer<E> {
  items: Vec<E>,
}

impl<E> StackBuffer<E> {
  pub fn new() -> Self {
    StackBuffer { items: Vec::new() }
  }

  pub fn with_capacity(capacity: usize) -> Self {
    StackBuffer {
      items: Vec::with_capacity(capacity),
    }
  }
}

impl<E> Default for StackBuffer<E> {
  fn default() -> Self {
    StackBuffer::new()
  }
}

impl<E> ElementBuffer<E> for StackBuffer<E> {
  fn push(&mut self, element: E) {
    self.items.push(element);
  }

  fn pop_next(&mut self) -> Option<E> {
    self.items.pop()
  }

  fn len(&self) -> usize {
    self.items.len()
  }
}
