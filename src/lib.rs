//! 流式处理任意序列的惰性流水线。
//!
//! 用[`Pipe::of`]（或[`stream`]、[`pipe`]）包装任意可迭代的数据源后，即可链式调用`map`、`filter`、
//! `flat_map`、`zip`、`enumerate`、`drop`等中间操作；中间操作只组合迭代器，不会触发计算，
//! 直到`take`、`reduce`、`sorted`、`min`、`max`等终结操作拉取元素。
//!
//! 流水线仅能遍历一次，已产生的元素不会再次产生。
//!
//! ```
//! use streamer::{Order, Pipe};
//!
//! let odd_squares = Pipe::of(vec![1, 2, 3, 4, 5]).map(|x| x * x).filter(|x| x % 2 == 1).take(None);
//! assert_eq!(odd_squares, vec![1, 9, 25]);
//!
//! let padded = Pipe::of(vec![1, 2, 3]).zip_longest(Pipe::of(vec![1]), 0).take(None);
//! assert_eq!(padded, vec![(1, 1), (2, 0), (3, 0)]);
//!
//! let mut rest = (vec![0] + Pipe::of(vec![3, 1, 2])).skip(1).unwrap();
//! assert_eq!(rest.sorted(Order::Desc), vec![3, 2, 1]);
//! ```

mod config;
mod err;
mod op;
mod pipe;
mod terminal;

pub use config::Order;
pub use err::PipeErr;
pub use pipe::Pipe;

/// 整数类型
pub type Integer = i64;

pub type PipeRes<'a, T> = Result<Pipe<'a, T>, PipeErr>;

/// 同[`Pipe::of`]。
pub fn stream<'a, I>(source: I) -> Pipe<'a, I::Item>
where
    I: IntoIterator,
    I::Item: 'a,
    I::IntoIter: 'a,
{
    Pipe::of(source)
}

/// 同[`Pipe::of`]。
pub fn pipe<'a, I>(source: I) -> Pipe<'a, I::Item>
where
    I: IntoIterator,
    I::Item: 'a,
    I::IntoIter: 'a,
{
    Pipe::of(source)
}
