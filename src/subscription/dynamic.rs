use smallvec::SmallVec;

use super::Subscription;

/// Id-keyed storage for a changing set of items.
///
/// Both the subject's subscriber list and the composite subscription keep
/// their entries here. Ids are handed out monotonically and never reused,
/// so a stale id can never remove somebody else's entry. Insertion order is
/// preserved.
///
/// ```rust
/// use rxsubjects::subscription::DynamicSubscriptions;
///
/// let mut subs: DynamicSubscriptions<&str> = DynamicSubscriptions::default();
/// let a = subs.add("a");
/// let b = subs.add("b");
/// assert_eq!(subs.remove(a), Some("a"));
/// assert_eq!(subs.remove(a), None);
/// assert!(subs.contains(b));
/// assert_eq!(subs.len(), 1);
/// ```
pub struct DynamicSubscriptions<U> {
  next_id: usize,
  items: SmallVec<[(usize, U); 2]>,
}

impl<U> Default for DynamicSubscriptions<U> {
  fn default() -> Self { Self { next_id: 0, items: SmallVec::new() } }
}

impl<U> DynamicSubscriptions<U> {
  #[inline]
  pub fn new() -> Self { Self::default() }

  /// Add an item and return its unique id.
  #[inline]
  pub fn add(&mut self, item: U) -> usize {
    let id = self.next_id;
    self.next_id += 1;
    self.items.push((id, item));
    id
  }

  pub fn remove(&mut self, id: usize) -> Option<U> {
    self
      .items
      .iter()
      .position(|(i, _)| *i == id)
      .map(|pos| self.items.remove(pos).1)
  }

  #[inline]
  pub fn contains(&self, id: usize) -> bool { self.items.iter().any(|(i, _)| *i == id) }

  #[inline]
  pub fn len(&self) -> usize { self.items.len() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.items.is_empty() }

  /// Keep only the items for which `keep` returns `true`.
  #[inline]
  pub fn retain(&mut self, mut keep: impl FnMut(&mut U) -> bool) {
    self.items.retain(|(_, item)| keep(item));
  }

  #[inline]
  pub fn drain(&mut self) -> impl Iterator<Item = U> + '_ {
    self.items.drain(..).map(|(_, item)| item)
  }

  #[inline]
  pub fn iter(&self) -> impl Iterator<Item = &U> { self.items.iter().map(|(_, item)| item) }

  #[inline]
  pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut U> {
    self.items.iter_mut().map(|(_, item)| item)
  }
}

impl<U: Subscription> DynamicSubscriptions<U> {
  /// Unsubscribe all items and clear the container.
  pub fn unsubscribe_all(&mut self) {
    for item in self.drain() {
      item.unsubscribe();
    }
  }

  #[inline]
  pub fn all_closed(&self) -> bool { self.iter().all(Subscription::is_closed) }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn ids_are_not_reused() {
    let mut subs = DynamicSubscriptions::new();
    let first = subs.add(1);
    subs.remove(first);
    let second = subs.add(2);
    assert_ne!(first, second);
    assert_eq!(subs.remove(first), None);
    assert_eq!(subs.iter().copied().collect::<Vec<_>>(), [2]);
  }

  #[test]
  fn retain_keeps_order() {
    let mut subs = DynamicSubscriptions::new();
    for i in 0..5 {
      subs.add(i);
    }
    subs.retain(|v| *v % 2 == 0);
    assert_eq!(subs.drain().collect::<Vec<_>>(), [0, 2, 4]);
    assert!(subs.is_empty());
  }

  #[test]
  fn unsubscribe_all_clears() {
    let mut subs = DynamicSubscriptions::new();
    subs.add(());
    subs.add(());
    assert!(subs.all_closed());
    subs.unsubscribe_all();
    assert!(subs.is_empty());
  }
}
