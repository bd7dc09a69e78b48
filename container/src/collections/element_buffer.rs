/// A trait that defines the push / pop-next capability of a backing sequence.<br/>
/// 背後のシーケンスが持つ追加・次要素取り出しの振る舞いを定義するトレイト。
///
/// The removal discipline (FIFO or LIFO) is decided by the implementation.
/// Callers are expected to serialize access, e.g. by holding a mutex.
pub trait ElementBuffer<E> {
  /// Inserts the specified element.<br/>
  /// 指定された要素を挿入します。
  ///
  /// # Arguments / 引数
  /// - `element` - The element to be inserted. / 挿入する要素。
  fn push(&mut self, element: E);

  /// Removes and returns the next element according to the discipline.<br/>
  /// 規律に従って次の要素を取り出して返します。
  ///
  /// # Return Value / 戻り値
  /// - `Some(element)` - If an element is available. / 要素が存在する場合。
  /// - `None` - If the buffer is empty. / バッファが空の場合。
  fn pop_next(&mut self) -> Option<E>;

  /// Returns the number of elements.<br/>
  /// 要素数を返します。
  fn len(&self) -> usize;

  /// Returns whether this buffer is empty.<br/>
  /// このバッファが空かどうかを返します。
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Removes every element, dropping them in removal order.<br/>
  /// すべての要素を取り出し順に破棄します。
  fn clear(&mut self) {
    while self.pop_next().is_some() {}
  }
}
