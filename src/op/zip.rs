use crate::pipe::Pipe;
use itertools::Itertools;

type BoxIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

impl<'a, T: 'a> Pipe<'a, T> {
    /// 按位置与`other`组合为二元组，长度为两者中较短者，任一耗尽即停止。
    pub fn zip<U, I>(self, other: I) -> Pipe<'a, (T, U)>
    where
        U: 'a,
        I: IntoIterator<Item = U>,
        I::IntoIter: 'a,
    {
        Pipe::wrap(self.iter.zip(other))
    }

    /// 与多个同类型数据源按位置组合，每行依次为自身及`others`中各数据源的元素。
    pub fn zip_many<S, I>(self, others: S) -> Pipe<'a, Vec<T>>
    where
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Pipe::wrap(ZipMany::new(self.iter, others))
    }

    /// 按位置与`other`组合为二元组，长度为两者中较长者，缺失的位置以`fill`补齐。
    pub fn zip_longest<I>(self, other: I, fill: T) -> Pipe<'a, (T, T)>
    where
        T: Clone,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        self.zip_longest_with(other, fill.clone(), fill)
    }

    /// 同[`Pipe::zip_longest`]，两侧元素类型可以不同，分别使用各自的补齐值。
    pub fn zip_longest_with<U, I>(self, other: I, fill_self: T, fill_other: U) -> Pipe<'a, (T, U)>
    where
        T: Clone,
        U: Clone + 'a,
        I: IntoIterator<Item = U>,
        I::IntoIter: 'a,
    {
        Pipe::wrap(self.iter.zip_longest(other).map(move |pair| pair.or_else(|| fill_self.clone(), || fill_other.clone())))
    }

    /// 与多个同类型数据源按位置组合，长度为所有数据源中最长者，缺失的位置以`fill`补齐。
    pub fn zip_longest_many<S, I>(self, others: S, fill: T) -> Pipe<'a, Vec<T>>
    where
        T: Clone,
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Pipe::wrap(ZipLongestMany::new(self.iter, others, fill))
    }
}

fn collect_sources<'a, T, S, I>(first: BoxIter<'a, T>, others: S) -> Vec<BoxIter<'a, T>>
where
    S: IntoIterator<Item = I>,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
{
    let mut sources = vec![first];
    sources.extend(others.into_iter().map(|other| Box::new(other.into_iter()) as BoxIter<'a, T>));
    sources
}

struct ZipMany<'a, T> {
    sources: Vec<BoxIter<'a, T>>,
    done: bool,
}

impl<'a, T> ZipMany<'a, T> {
    fn new<S, I>(first: BoxIter<'a, T>, others: S) -> Self
    where
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self { sources: collect_sources(first, others), done: false }
    }
}

impl<T> Iterator for ZipMany<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut row = Vec::with_capacity(self.sources.len());
        for source in self.sources.iter_mut() {
            match source.next() {
                Some(item) => row.push(item),
                None => {
                    // 已拉取的同行元素随之丢弃
                    self.done = true;
                    return None;
                }
            }
        }
        Some(row)
    }
}

struct ZipLongestMany<'a, T> {
    /// 耗尽的数据源置为`None`，不再拉取
    sources: Vec<Option<BoxIter<'a, T>>>,
    fill: T,
}

impl<'a, T> ZipLongestMany<'a, T> {
    fn new<S, I>(first: BoxIter<'a, T>, others: S, fill: T) -> Self
    where
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self { sources: collect_sources(first, others).into_iter().map(Some).collect(), fill }
    }
}

impl<T: Clone> Iterator for ZipLongestMany<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut row = Vec::with_capacity(self.sources.len());
        let mut produced = false;
        for slot in self.sources.iter_mut() {
            let item = slot.as_mut().and_then(|source| source.next());
            match item {
                Some(item) => {
                    produced = true;
                    row.push(item);
                }
                None => {
                    *slot = None;
                    row.push(self.fill.clone());
                }
            }
        }
        if produced { Some(row) } else { None }
    }
}
