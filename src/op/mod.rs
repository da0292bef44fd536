mod zip;

use crate::err::PipeErr;
use crate::pipe::Pipe;
use crate::{Integer, PipeRes};

/// 中间操作，除`skip`外均不会触发计算。
impl<'a, T: 'a> Pipe<'a, T> {
    /* **************************************** 拼接 **************************************** */
    /// 在剩余元素之后拼接`other`的全部元素。
    pub fn concat<I>(self, other: I) -> Pipe<'a, T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Pipe::wrap(self.iter.chain(other))
    }

    /// 在剩余元素之前拼接`other`的全部元素。
    pub fn prepend<I>(self, other: I) -> Pipe<'a, T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Pipe::wrap(other.into_iter().chain(self.iter))
    }

    /* **************************************** 转换 **************************************** */
    /// 为元素编号，从`start`开始连续递增。
    pub fn enumerate(self, start: Integer) -> Pipe<'a, (Integer, T)> {
        Pipe::wrap((start..).zip(self.iter))
    }

    /// 对每个元素应用`f`，仅在元素被拉取时调用。
    pub fn map<U: 'a>(self, f: impl FnMut(T) -> U + 'a) -> Pipe<'a, U> {
        Pipe::wrap(self.iter.map(f))
    }

    /// 将每个元素展开为零个或多个元素，保持上游顺序及展开后的内部顺序。
    pub fn flat_map<U, I, F>(self, f: F) -> Pipe<'a, U>
    where
        U: 'a,
        I: IntoIterator<Item = U> + 'a,
        I::IntoIter: 'a,
        F: FnMut(T) -> I + 'a,
    {
        Pipe::wrap(self.iter.flat_map(f))
    }

    /* **************************************** 减少 **************************************** */
    /// 保留满足条件的元素。
    pub fn filter(self, f: impl FnMut(&T) -> bool + 'a) -> Pipe<'a, T> {
        Pipe::wrap(self.iter.filter(f))
    }

    /// 丢弃满足条件的元素，与`filter`互补。
    pub fn drop(self, mut f: impl FnMut(&T) -> bool + 'a) -> Pipe<'a, T> {
        Pipe::wrap(self.iter.filter(move |item| !f(item)))
    }

    /// 立即拉取并丢弃接下来的`n`个元素。
    ///
    /// 剩余元素不足`n`个时返回[`PipeErr::Exhausted`]，此时流水线已被耗尽。
    pub fn skip(mut self, n: usize) -> PipeRes<'a, T> {
        for skipped in 0..n {
            if self.iter.next().is_none() {
                tracing::trace!(expected = n, skipped, "skip exhausted pipe");
                return Err(PipeErr::Exhausted { expected: n, skipped });
            }
        }
        tracing::trace!(skipped = n, "skip");
        Ok(self)
    }
}
