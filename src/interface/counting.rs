use super::int_list::IntList;

/// `add`が呼ばれた回数を記録するリスト
///
/// 回数は追加に成功したかどうかに関係なく、`remove`でも減らない
pub trait CountingIntList: IntList {
    /// 生成されてから`add`が試みられた要素の総数を返す
    fn total_added(&self) -> usize;
}
