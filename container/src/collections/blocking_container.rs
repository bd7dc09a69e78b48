use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::collections::{ContainerMode, ElementBuffer, QueueBuffer, QueueError, StackBuffer};


enum ModeBuffer<E> {
  Queue(QueueBuffer<E>),
  Stack(StackBuffer<E>),
}

impl<E> ModeBuffer<E> {
  fn new(mode: ContainerMode, capacity: usize) -> Self {
    match mode {
      ContainerMode::Fifo => ModeBuffer::Queue(QueueBuffer::with_capacity(capacity)),
      ContainerMode::Lifo => ModeBuffer::Stack(StackBuffer::with_capacity(capacity)),
    }
  }
}

impl<E> ElementBuffer<E> for ModeBuffer<E> {
  fn push(&mut self, element: E) {
    match self {
      ModeBuffer::Queue(buffer) => buffer.push(element),
      ModeBuffer::Stack(buffer) => buffer.push(element),
    }
  }

  fn pop_next(&mut self) -> Option<E> {
    match self {
      ModeBuffer::Queue(buffer) => buffer.pop_next(),
      ModeBuffer::Stack(buffer) => buffer.pop_next(),
    }
  }

  fn len(&self) -> usize {
    match self {
      ModeBuffer::Queue(buffer) => buffer.len(),
      ModeBuffer::Stack(buffer) => buffer.len(),
    }
  }
}

struct Inner<E> {
  buffer: Mutex<ModeBuffer<E>>,
  available: Condvar,
  mode: ContainerMode,
}

/// A container that hands elements from producer threads to consumer threads.<br/>
/// 生産者スレッドから消費者スレッドへ要素を受け渡すコンテナ。
///
/// The removal discipline is fixed at construction: FIFO pops the oldest element, LIFO the newest.
/// Consumers block in [`take`](Self::take) or [`poll_timeout`](Self::poll_timeout) until an element is offered.
/// Clones share the same storage; the elements are dropped with the last clone.
pub struct BlockingContainer<E> {
  inner: Arc<Inner<E>>,
}

static_assertions::assert_impl_all!(BlockingContainer<u8>: Send, Sync, Clone);

impl<E> BlockingContainer<E> {
  /// Creates an empty container with the specified removal discipline.<br/>
  /// 指定された取り出し規律で空のコンテナを生成します。
  ///
  /// # Arguments / 引数
  /// - `mode` - The removal discipline. / 取り出し規律。
  pub fn new(mode: ContainerMode) -> Self {
    Self::with_capacity(mode, 0)
  }

  /// Creates an empty container in queue order.<br/>
  /// 先入れ先出しの空のコンテナを生成します。
  pub fn fifo() -> Self {
    Self::new(ContainerMode::Fifo)
  }

  /// Creates an empty container in stack order.<br/>
  /// 後入れ先出しの空のコンテナを生成します。
  pub fn lifo() -> Self {
    Self::new(ContainerMode::Lifo)
  }

  /// Creates an empty container with room for `capacity` elements before reallocating.<br/>
  /// 再確保なしで `capacity` 個の要素を格納できる空のコンテナを生成します。
  ///
  /// The container stays unbounded.
  pub fn with_capacity(mode: ContainerMode, capacity: usize) -> Self {
    Self {
      inner: Arc::new(Inner {
        buffer: Mutex::new(ModeBuffer::new(mode, capacity)),
        available: Condvar::new(),
        mode,
      }),
    }
  }

  /// Returns the removal discipline fixed at construction.<br/>
  /// 生成時に固定された取り出し規律を返します。
  pub fn mode(&self) -> ContainerMode {
    self.inner.mode
  }

  // Buffer operations never leave the buffer half-modified, so a poisoned lock is still consistent.
  fn lock(&self) -> MutexGuard<'_, ModeBuffer<E>> {
    self.inner.buffer.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Inserts the specified element and wakes one waiting consumer.<br/>
  /// 指定された要素を挿入し、待機中の消費者を一つ起こします。
  ///
  /// # Arguments / 引数
  /// - `element` - The element to be inserted. / 挿入する要素。
  pub fn offer(&self, element: E) {
    let mut buffer = self.lock();
    buffer.push(element);
    tracing::trace!(mode = %self.inner.mode, len = buffer.len(), "BlockingContainer::offer");
    self.inner.available.notify_one();
  }

  /// Inserts the specified elements in iteration order, waking one consumer per element.<br/>
  /// 指定された複数の要素を順に挿入し、要素ごとに消費者を一つ起こします。
  pub fn offer_all<I>(&self, elements: I)
  where
    I: IntoIterator<Item = E>, {
    let elements: Vec<E> = elements.into_iter().collect();
    let count = elements.len();
    let mut buffer = self.lock();
    for element in elements {
      buffer.push(element);
    }
    tracing::trace!(mode = %self.inner.mode, count, len = buffer.len(), "BlockingContainer::offer_all");
    for _ in 0..count {
      self.inner.available.notify_one();
    }
  }

  /// Retrieves and removes the next element, waiting until one becomes available.<br/>
  /// 次の要素を取得して削除します。要素が利用可能になるまで待機します。
  ///
  /// There is no timeout: the call blocks until some thread offers an element.
  pub fn take(&self) -> E {
    let mut buffer = self.lock();
    loop {
      if let Some(element) = buffer.pop_next() {
        return element;
      }
      buffer = self.inner.available.wait(buffer).unwrap_or_else(PoisonError::into_inner);
      tracing::trace!(mode = %self.inner.mode, len = buffer.len(), "BlockingContainer::take: woken");
    }
  }

  /// Retrieves and removes the next element, waiting at most `timeout`.<br/>
  /// 次の要素を取得して削除します。最大で `timeout` の間待機します。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(element)` - If an element became available in time. / 時間内に要素が利用可能になった場合。
  /// - `Err(QueueError::TimeoutError(timeout))` - If the container stayed empty. / コンテナが空のままだった場合。
  pub fn poll_timeout(&self, timeout: Duration) -> Result<E, QueueError> {
    let buffer = self.lock();
    let (mut buffer, _) = self
      .inner
      .available
      .wait_timeout_while(buffer, timeout, |buffer| buffer.is_empty())
      .unwrap_or_else(PoisonError::into_inner);
    match buffer.pop_next() {
      Some(element) => Ok(element),
      None => {
        tracing::debug!(mode = %self.inner.mode, ?timeout, "BlockingContainer::poll_timeout: timed out");
        Err(QueueError::TimeoutError(timeout))
      }
    }
  }

  /// Retrieves and removes the next element, waiting at most `timeout_secs` seconds.<br/>
  /// 次の要素を取得して削除します。最大で `timeout_secs` 秒の間待機します。
  ///
  /// The timeout is truncated to whole milliseconds. Negative and NaN values do not wait.
  ///
  /// # Arguments / 引数
  /// - `timeout_secs` - The timeout in fractional seconds. / 小数の秒で表したタイムアウト。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(element)` - If an element became available in time. / 時間内に要素が利用可能になった場合。
  /// - `Err(QueueError::TimeoutError(timeout))` - If the container stayed empty. / コンテナが空のままだった場合。
  pub fn poll_timeout_secs(&self, timeout_secs: f64) -> Result<E, QueueError> {
    self.poll_timeout(millis_from_secs(timeout_secs))
  }

  /// Retrieves and removes the next element without waiting.<br/>
  /// 待機せずに次の要素を取得して削除します。
  ///
  /// # Return Value / 戻り値
  /// - `Some(element)` - If an element is available. / 要素が存在する場合。
  /// - `None` - If the container is empty. / コンテナが空の場合。
  pub fn poll(&self) -> Option<E> {
    self.lock().pop_next()
  }

  /// Returns the number of elements.<br/>
  /// 要素数を返します。
  pub fn len(&self) -> usize {
    self.lock().len()
  }

  /// Returns whether this container is empty.<br/>
  /// このコンテナが空かどうかを返します。
  ///
  /// # Return Value / 戻り値
  /// - `true` - If the container is empty. / コンテナが空の場合。
  /// - `false` - If the container is not empty. / コンテナが空でない場合。
  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }

  /// Removes every element in removal order.<br/>
  /// すべての要素を取り出し順に削除します。
  ///
  /// Waiting consumers are not woken.
  pub fn clear(&self) {
    let mut buffer = self.lock();
    let cleared = buffer.len();
    buffer.clear();
    tracing::debug!(mode = %self.inner.mode, cleared, "BlockingContainer::clear");
  }
}

pub(crate) fn millis_from_secs(secs: f64) -> Duration {
  // `as` saturates: NaN and negatives become 0.
  Duration::from_millis((secs * 1000.0) as u64)
}

impl<E> Clone for BlockingContainer<E> {
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<E> Default for BlockingContainer<E> {
  fn default() -> Self {
    Self::new(ContainerMode::default())
  }
}

impl<E> From<ContainerMode> for BlockingContainer<E> {
  fn from(mode: ContainerMode) -> Self {
    Self::new(mode)
  }
}

impl<E> Debug for BlockingContainer<E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BlockingContainer")
      .field("mode", &self.inner.mode)
      .field("len", &self.len())
      .finish()
  }
}

impl<E> PartialEq for BlockingContainer<E> {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }
}

impl<E> Eq for BlockingContainer<E> {}
