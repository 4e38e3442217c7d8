//! 加载凭据
//!
//! 封装"第几次请求、加载哪个分组的第几篇"这一信息

use std::fmt::Display;

use crate::models::descriptor::{DocumentDescriptor, GroupTag};

/// 加载凭据
///
/// 序号单调递增，只有最新序号的结果会被采用
#[derive(Debug, Clone)]
pub struct LoadTicket {
    /// 请求序号
    pub seq: u64,

    /// 分组标签
    pub group: GroupTag,

    /// 文档在分组中的索引（从 0 开始）
    pub index: usize,

    /// 文档描述符
    pub descriptor: DocumentDescriptor,
}

impl LoadTicket {
    pub fn new(seq: u64, group: GroupTag, index: usize, descriptor: DocumentDescriptor) -> Self {
        Self {
            seq,
            group,
            index,
            descriptor,
        }
    }
}

impl Display for LoadTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[加载 #{} 分组#{} 文档#{} {}]",
            self.seq, self.group, self.index, self.descriptor.locator
        )
    }
}
