/// 排序方向
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Order {
    /// 正序 `asc`
    #[default]
    Asc,
    /// 逆序 `desc`
    Desc,
}

impl Order {
    /// 根据`reverse`标记创建排序方向。
    pub fn from_reverse(reverse: bool) -> Order {
        if reverse { Order::Desc } else { Order::Asc }
    }
}

#[inline]
pub(crate) fn is_desc(order: Order) -> bool {
    order == Order::Desc
}
