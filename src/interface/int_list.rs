use crate::error::ListError;

/// 整数の列x(0)..x(n-1)とその列に対する操作からなる
///
/// `add_all`と`remove_all`はデフォルト実装を持ち、要素ごとに`add`/`remove`を呼び出す。
/// そのため`add`だけを上書きした実装でも、`add_all`は上書きした`add`を経由する
pub trait IntList {
    /// xを追加する。リストが変化した場合にtrueを返す
    fn add(&mut self, x: i32) -> bool;

    /// 最初に現れるxを削除する。削除した場合にtrueを返す
    fn remove(&mut self, x: i32) -> bool;

    /// リストの長さnを返す
    fn size(&self) -> usize;

    /// x(i)の値を返す
    fn get(&self, i: usize) -> Result<i32, ListError>;

    /// otherの要素をx(0)から順にすべて`add`する
    ///
    /// いずれかの`add`がtrueを返した場合にtrueを返す
    fn add_all(&mut self, other: &dyn IntList) -> bool {
        let mut changed = false;
        for i in 0..other.size() {
            if let Ok(x) = other.get(i) {
                changed |= self.add(x);
            }
        }
        changed
    }

    /// otherの各要素について`remove`を1回ずつ呼び出す
    fn remove_all(&mut self, other: &dyn IntList) -> bool {
        let mut changed = false;
        for i in 0..other.size() {
            if let Ok(x) = other.get(i) {
                changed |= self.remove(x);
            }
        }
        changed
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// x(0)..x(n-1)をVecにして返す
    fn to_vec(&self) -> Vec<i32> {
        (0..self.size()).filter_map(|i| self.get(i).ok()).collect()
    }
}
