mod sort;

use crate::err::PipeErr;
use crate::pipe::Pipe;

/// 终结操作，拉取部分或全部剩余元素，流水线此后仍可继续使用。
impl<'a, T: 'a> Pipe<'a, T> {
    /// 拉取元素并保存为列表。
    ///
    /// `n`为`None`时拉取全部剩余元素；否则最多拉取`n`个，剩余不足时返回已获取的元素。
    pub fn take(&mut self, n: Option<usize>) -> Vec<T> {
        let items: Vec<T> = match n {
            None => self.iter.by_ref().collect(),
            Some(n) => self.iter.by_ref().take(n).collect(),
        };
        tracing::trace!(requested = ?n, taken = items.len(), "take");
        items
    }

    /// 按需从流水线拉取至多`n`个元素，提前耗尽时直接结束。
    pub fn take_lazy(&mut self, n: usize) -> impl Iterator<Item = T> + '_ {
        self.iter.by_ref().take(n)
    }

    /// 以第一个元素为初始值，从左到右累积。
    pub fn reduce(&mut self, f: impl FnMut(T, T) -> T) -> Result<T, PipeErr> {
        self.iter.by_ref().reduce(f).ok_or_else(|| PipeErr::empty("reduce"))
    }

    /// 以`initial`为初始值，从左到右累积全部元素。
    pub fn reduce_from<B>(&mut self, initial: B, f: impl FnMut(B, T) -> B) -> B {
        self.iter.by_ref().fold(initial, f)
    }
}

impl<'a, T: 'a, E: 'a> Pipe<'a, Result<T, E>> {
    /// 同[`Pipe::take`]，遇到第一个`Err`时停止并原样返回该错误。
    pub fn try_take(&mut self, n: Option<usize>) -> Result<Vec<T>, E> {
        match n {
            None => self.iter.by_ref().collect(),
            Some(n) => self.iter.by_ref().take(n).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::ops::Add;

    #[test]
    fn test_take_all() {
        let mut pipe = Pipe::of(vec![1, 2, 3]);
        assert_eq!(pipe.take(None), vec![1, 2, 3]);
        assert!(pipe.take(None).is_empty());
    }

    #[test]
    fn test_take_n() {
        let mut pipe = Pipe::of(vec![1, 2, 3]);
        assert_eq!(pipe.take(Some(2)), vec![1, 2]);
        assert_eq!(pipe.take(Some(2)), vec![3]);
        assert!(pipe.take(Some(2)).is_empty());
        assert!(Pipe::of(vec![1]).take(Some(0)).is_empty());
    }

    #[test]
    fn test_take_n_from_infinite() {
        assert_eq!(Pipe::of(1..).map(|x| x * 10).take(Some(3)), vec![10, 20, 30]);
    }

    #[test]
    fn test_take_lazy() {
        let calls = Cell::new(0);
        let mut pipe = Pipe::of(vec![1, 2, 3]).map(|x| {
            calls.set(calls.get() + 1);
            x
        });
        let mut lazy = pipe.take_lazy(5);
        assert_eq!(calls.get(), 0);
        assert_eq!(lazy.next(), Some(1));
        assert_eq!(calls.get(), 1);
        assert_eq!(lazy.collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(pipe.next(), None);
    }

    #[test]
    fn test_take_lazy_leaves_rest() {
        let mut pipe = Pipe::of(vec![1, 2, 3, 4]);
        assert_eq!(pipe.take_lazy(2).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(pipe.take(None), vec![3, 4]);
    }

    #[test]
    fn test_reduce() {
        assert_eq!(Pipe::of(vec![1, 2, 3, 4, 5]).reduce(i32::add), Ok(15));
        assert_eq!(Pipe::of(vec![7]).reduce(i32::add), Ok(7));
        assert_eq!(Pipe::<i32>::empty().reduce(i32::add), Err(PipeErr::EmptySequence { op: "reduce" }));
    }

    #[test]
    fn test_reduce_from() {
        assert_eq!(Pipe::of(vec![1, 2, 3, 4, 5]).reduce_from(10, i32::add), 25);
        assert_eq!(Pipe::<i32>::empty().reduce_from(10, i32::add), 10);
        let joined = Pipe::of(vec!['a', 'b']).reduce_from(String::new(), |mut acc, c| {
            acc.push(c);
            acc
        });
        assert_eq!(joined, "ab");
    }

    #[test]
    fn test_reduce_is_left_fold() {
        assert_eq!(Pipe::of(vec![10, 2, 3]).reduce(|acc, x| acc - x), Ok(5));
    }

    #[test]
    fn test_try_take() {
        let mut pipe = Pipe::of(vec!["1", "2", "x", "4"]).map(|s| s.parse::<i32>());
        assert_eq!(pipe.try_take(Some(2)), Ok(vec![1, 2]));
        assert!(pipe.try_take(None).is_err());
        assert_eq!(pipe.try_take(None), Ok(vec![4]));
    }

    #[test]
    fn test_second_terminal_after_exhaustion() {
        let mut pipe = Pipe::of(vec![1, 2]);
        assert_eq!(pipe.reduce(i32::add), Ok(3));
        assert!(pipe.take(None).is_empty());
        assert_eq!(pipe.reduce_from(0, i32::add), 0);
    }
}
