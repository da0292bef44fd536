use crate::config::{Order, is_desc};
use crate::err::PipeErr;
use crate::pipe::Pipe;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::{Ordering, Reverse};
use unicase::UniCase;

/* **************************************** 排序 **************************************** */
impl<'a, T: 'a> Pipe<'a, T> {
    /// 拉取全部剩余元素并排序。
    ///
    /// 排序是稳定的：无论正序还是逆序，相等的元素都保持原有的相对顺序。
    pub fn sorted(&mut self, order: Order) -> Vec<T>
    where
        T: Ord,
    {
        let sorted: Vec<T> = if is_desc(order) {
            self.iter.by_ref().sorted_by(|a, b| b.cmp(a)).collect()
        } else {
            self.iter.by_ref().sorted().collect()
        };
        tracing::trace!(?order, count = sorted.len(), "sorted");
        sorted
    }

    /// 按照`key`排序，每个元素只计算一次`key`。
    pub fn sorted_by_key<K: Ord>(&mut self, mut key: impl FnMut(&T) -> K, order: Order) -> Vec<T> {
        if is_desc(order) {
            self.iter.by_ref().sorted_by_cached_key(|item| Reverse(key(item))).collect()
        } else {
            self.iter.by_ref().sorted_by_cached_key(key).collect()
        }
    }

    /// 按照比较函数稳定排序，逆序由比较函数自行处理。
    pub fn sorted_by(&mut self, cmp: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
        self.iter.by_ref().sorted_by(cmp).collect()
    }

    /// 按照浮点数`key`排序，`NaN`大于所有其他值。
    pub fn sorted_by_float_key(&mut self, mut key: impl FnMut(&T) -> f64, order: Order) -> Vec<T> {
        self.sorted_by_key(move |item| OrderedFloat(key(item)), order)
    }

    /// 按照文本忽略大小写排序。
    pub fn sorted_nocase(&mut self, order: Order) -> Vec<T>
    where
        T: AsRef<str>,
    {
        self.sorted_by_key(|item| UniCase::new(item.as_ref().to_owned()), order)
    }
}

/* **************************************** 极值 **************************************** */
/// 保留第一个与当前结果比较为`want`的元素，相等时保留先出现的元素。
fn pick<T>(iter: impl Iterator<Item = T>, mut cmp: impl FnMut(&T, &T) -> Ordering, want: Ordering) -> Option<T> {
    iter.reduce(|best, item| if cmp(&item, &best) == want { item } else { best })
}

impl<'a, T: 'a> Pipe<'a, T> {
    fn pick_by_key<K: Ord>(&mut self, mut key: impl FnMut(&T) -> K, want: Ordering) -> Option<T> {
        let keyed = self.iter.by_ref().map(|item| (key(&item), item));
        pick(keyed, |(a, _), (b, _)| a.cmp(b), want).map(|(_, item)| item)
    }

    /// 最大元素，有多个时返回第一个。
    pub fn max(&mut self) -> Result<T, PipeErr>
    where
        T: Ord,
    {
        pick(self.iter.by_ref(), T::cmp, Ordering::Greater).ok_or_else(|| PipeErr::empty("max"))
    }

    /// 最小元素，有多个时返回第一个。
    pub fn min(&mut self) -> Result<T, PipeErr>
    where
        T: Ord,
    {
        pick(self.iter.by_ref(), T::cmp, Ordering::Less).ok_or_else(|| PipeErr::empty("min"))
    }

    pub fn max_or(&mut self, default: T) -> T
    where
        T: Ord,
    {
        pick(self.iter.by_ref(), T::cmp, Ordering::Greater).unwrap_or(default)
    }

    pub fn min_or(&mut self, default: T) -> T
    where
        T: Ord,
    {
        pick(self.iter.by_ref(), T::cmp, Ordering::Less).unwrap_or(default)
    }

    /// `key`最大的元素，每个元素只计算一次`key`。
    pub fn max_by_key<K: Ord>(&mut self, key: impl FnMut(&T) -> K) -> Result<T, PipeErr> {
        self.pick_by_key(key, Ordering::Greater).ok_or_else(|| PipeErr::empty("max"))
    }

    /// `key`最小的元素，每个元素只计算一次`key`。
    pub fn min_by_key<K: Ord>(&mut self, key: impl FnMut(&T) -> K) -> Result<T, PipeErr> {
        self.pick_by_key(key, Ordering::Less).ok_or_else(|| PipeErr::empty("min"))
    }

    pub fn max_by_float_key(&mut self, mut key: impl FnMut(&T) -> f64) -> Result<T, PipeErr> {
        self.max_by_key(move |item| OrderedFloat(key(item)))
    }

    pub fn min_by_float_key(&mut self, mut key: impl FnMut(&T) -> f64) -> Result<T, PipeErr> {
        self.min_by_key(move |item| OrderedFloat(key(item)))
    }
}
