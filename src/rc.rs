//! Shared mutable pointers used by subjects and stateful operators.
//!
//! `MutRc` is the single-threaded flavour (`Rc<RefCell<T>>`), `MutArc` the
//! thread-safe one (`Arc<Mutex<T>>`). Both are accessed through the
//! [`RcDeref`] / [`RcDerefMut`] traits so the subject code is written once.
use std::{
  cell::{Cell, Ref, RefCell, RefMut},
  ops::{Deref, DerefMut},
  rc::Rc,
  sync::{Arc, Mutex, MutexGuard, TryLockError},
};

pub trait RcDeref {
  type Target;
  type Ref<'a>: Deref<Target = Self::Target>
  where
    Self: 'a;

  fn rc_deref(&self) -> Self::Ref<'_>;
}

pub trait RcDerefMut: RcDeref {
  type RefMut<'a>: DerefMut<Target = Self::Target>
  where
    Self: 'a;

  /// Borrow mutably, blocking on a lock held by another thread.
  fn rc_deref_mut(&self) -> Self::RefMut<'_>;

  /// Borrow mutably only if nobody holds the pointer right now.
  fn try_rc_deref_mut(&self) -> Option<Self::RefMut<'_>>;
}

#[derive(Default)]
pub struct MutRc<T>(Rc<RefCell<T>>);

#[derive(Default)]
pub struct MutArc<T>(Arc<Mutex<T>>);

impl<T> MutRc<T> {
  pub fn own(t: T) -> Self { Self(Rc::new(RefCell::new(t))) }

  #[inline]
  pub fn ptr_eq(&self, other: &Self) -> bool { Rc::ptr_eq(&self.0, &other.0) }
}

impl<T> MutArc<T> {
  pub fn own(t: T) -> Self { Self(Arc::new(Mutex::new(t))) }

  #[inline]
  pub fn ptr_eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.0, &other.0) }

  // A panic inside an observer must not wedge every other holder of the
  // pointer, so poisoning is ignored.
  fn lock(&self) -> MutexGuard<'_, T> {
    self
      .0
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

impl<T> RcDeref for MutRc<T> {
  type Target = T;
  type Ref<'a>
    = Ref<'a, T>
  where
    Self: 'a;

  #[inline]
  fn rc_deref(&self) -> Self::Ref<'_> { self.0.borrow() }
}

impl<T> RcDerefMut for MutRc<T> {
  type RefMut<'a>
    = RefMut<'a, T>
  where
    Self: 'a;

  #[inline]
  fn rc_deref_mut(&self) -> Self::RefMut<'_> { self.0.borrow_mut() }

  #[inline]
  fn try_rc_deref_mut(&self) -> Option<Self::RefMut<'_>> { self.0.try_borrow_mut().ok() }
}

impl<T> RcDeref for MutArc<T> {
  type Target = T;
  type Ref<'a>
    = MutexGuard<'a, T>
  where
    Self: 'a;

  #[inline]
  fn rc_deref(&self) -> Self::Ref<'_> { self.lock() }
}

impl<T> RcDerefMut for MutArc<T> {
  type RefMut<'a>
    = MutexGuard<'a, T>
  where
    Self: 'a;

  #[inline]
  fn rc_deref_mut(&self) -> Self::RefMut<'_> { self.lock() }

  fn try_rc_deref_mut(&self) -> Option<Self::RefMut<'_>> {
    match self.0.try_lock() {
      Ok(guard) => Some(guard),
      Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
      Err(TryLockError::WouldBlock) => None,
    }
  }
}

impl<T> Clone for MutRc<T> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> Clone for MutArc<T> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> From<T> for MutRc<T> {
  fn from(t: T) -> Self { Self::own(t) }
}

impl<T> From<T> for MutArc<T> {
  fn from(t: T) -> Self { Self::own(t) }
}

/// A small copyable value shared between clones, e.g. a "cancelled" flag.
pub trait SharedCell<T: Copy>: Clone + From<T> {
  fn get(&self) -> T;
  fn set(&self, value: T);
}

#[derive(Default)]
pub struct CellRc<T>(Rc<Cell<T>>);

#[derive(Default)]
pub struct CellArc<T>(Arc<Mutex<T>>);

impl<T> Clone for CellRc<T> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> Clone for CellArc<T> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> From<T> for CellRc<T> {
  fn from(t: T) -> Self { Self(Rc::new(Cell::new(t))) }
}

impl<T> From<T> for CellArc<T> {
  fn from(t: T) -> Self { Self(Arc::new(Mutex::new(t))) }
}

impl<T: Copy> SharedCell<T> for CellRc<T> {
  #[inline]
  fn get(&self) -> T { self.0.get() }

  #[inline]
  fn set(&self, value: T) { self.0.set(value) }
}

impl<T: Copy> SharedCell<T> for CellArc<T> {
  fn get(&self) -> T {
    *self
      .0
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  fn set(&self, value: T) {
    *self
      .0
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner()) = value;
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn try_borrow_fails_while_borrowed() {
    let rc = MutRc::own(1);
    let guard = rc.rc_deref_mut();
    assert!(rc.try_rc_deref_mut().is_none());
    drop(guard);
    *rc.try_rc_deref_mut().unwrap() += 1;
    assert_eq!(*rc.rc_deref(), 2);
  }

  #[test]
  fn arc_survives_poisoning() {
    let arc = MutArc::own(vec![1]);
    let c_arc = arc.clone();
    let _ = std::thread::spawn(move || {
      let _guard = c_arc.rc_deref_mut();
      panic!("poison the lock");
    })
    .join();
    arc.rc_deref_mut().push(2);
    assert_eq!(*arc.rc_deref(), vec![1, 2]);
    assert!(arc.try_rc_deref_mut().is_some());
  }

  #[test]
  fn cells_are_shared_between_clones() {
    let local = CellRc::from(false);
    local.clone().set(true);
    assert!(local.get());

    let shared = CellArc::from(0);
    let c_shared = shared.clone();
    std::thread::spawn(move || c_shared.set(7))
      .join()
      .unwrap();
    assert_eq!(shared.get(), 7);
  }
}
