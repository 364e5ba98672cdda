use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::ListError;
use crate::interface::counting::CountingIntList;
use crate::interface::int_list::IntList;

/// 複数スレッドから共有できるリストのハンドル
///
/// リストとカウンタを1つのMutexで守るので、`add`によるカウンタの増加と
/// リストの変更は、`total_added()`や`size()`を読む側から見て同時に起こる
#[derive(Debug, Default)]
pub struct SharedList<L> {
    inner: Arc<Mutex<L>>,
}

impl<L> Clone for SharedList<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: IntList> SharedList<L> {
    pub fn new(list: L) -> Self {
        Self {
            inner: Arc::new(Mutex::new(list)),
        }
    }

    pub fn add(&self, x: i32) -> bool {
        self.inner.lock().add(x)
    }

    /// xsの要素をロックを1回だけ取って順に`add`する
    pub fn add_all(&self, xs: &[i32]) -> bool {
        let mut list = self.inner.lock();
        let mut changed = false;
        for &x in xs {
            changed |= list.add(x);
        }
        changed
    }

    pub fn remove(&self, x: i32) -> bool {
        self.inner.lock().remove(x)
    }

    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    pub fn get(&self, i: usize) -> Result<i32, ListError> {
        self.inner.lock().get(i)
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.inner.lock().to_vec()
    }

    /// ロックを保持したまま読み取り専用でfを呼ぶ
    pub fn with<R>(&self, f: impl FnOnce(&L) -> R) -> R {
        let list = self.inner.lock();
        f(&*list)
    }

    /// ロックを保持したままfを呼ぶ。複数の操作をまとめて行うときに使う
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut L) -> R) -> R {
        let mut list = self.inner.lock();
        f(&mut *list)
    }
}

impl<L: CountingIntList> SharedList<L> {
    pub fn total_added(&self) -> usize {
        self.inner.lock().total_added()
    }

    /// (size, total_added)を同じロックの下で読む
    pub fn snapshot(&self) -> (usize, usize) {
        let list = self.inner.lock();
        (list.size(), list.total_added())
    }
}
