use std::fmt::{Debug, Formatter};
use std::ops::Add;

/// 惰性流水线，仅可遍历一次。
///
/// 中间操作消耗当前流水线并返回包装了原数据源的新流水线，不会触发计算；
/// 终结操作以`&mut self`调用，拉取部分或全部剩余元素。
///
/// `Pipe`本身实现`IntoIterator`，`&mut Pipe`实现`Iterator`，
/// 因此既可以`for item in pipe`整体消费，也可以`for item in &mut pipe`部分消费后继续使用。
pub struct Pipe<'a, T> {
    pub(crate) iter: Box<dyn Iterator<Item = T> + 'a>,
}

impl<'a, T: 'a> Pipe<'a, T> {
    /// 包装任意可迭代的数据源。
    pub fn of<I>(source: I) -> Pipe<'a, T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Pipe::wrap(source.into_iter())
    }

    /// 不产生任何元素的流水线。
    pub fn empty() -> Pipe<'a, T> {
        Pipe::wrap(std::iter::empty())
    }

    /// 所有阶段都经过`fuse`，耗尽后的每次拉取都返回`None`。
    pub(crate) fn wrap(iter: impl Iterator<Item = T> + 'a) -> Pipe<'a, T> {
        Pipe { iter: Box::new(iter.fuse()) }
    }

    /// 手动拉取下一个元素。
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    /// 取出内部迭代器，之后不应再通过流水线访问。
    pub fn into_inner(self) -> Box<dyn Iterator<Item = T> + 'a> {
        self.iter
    }
}

impl<T> Iterator for &mut Pipe<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> IntoIterator for Pipe<'a, T> {
    type Item = T;
    type IntoIter = Box<dyn Iterator<Item = T> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter
    }
}

impl<'a, T: 'a> From<Vec<T>> for Pipe<'a, T> {
    fn from(value: Vec<T>) -> Self {
        Pipe::of(value)
    }
}

impl<'a, T: 'a> FromIterator<T> for Pipe<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Pipe::of(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Debug for Pipe<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipe").field("size_hint", &self.iter.size_hint()).finish_non_exhaustive()
    }
}

/// `pipe + other`：先产生自身剩余元素，再产生`other`的元素。
impl<'a, T: 'a, I> Add<I> for Pipe<'a, T>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
{
    type Output = Pipe<'a, T>;

    fn add(self, other: I) -> Self::Output {
        self.concat(other)
    }
}

/// `vec + pipe`：先产生`vec`的元素，再产生流水线剩余元素。
impl<'a, T: 'a> Add<Pipe<'a, T>> for Vec<T> {
    type Output = Pipe<'a, T>;

    fn add(self, other: Pipe<'a, T>) -> Self::Output {
        other.prepend(self)
    }
}
