use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::models::Element;

/// 剧本：有序的元素序列
///
/// 顺序就是阅读顺序，解析过程中必须原样保持。序列支持按下标寻址和
/// 中间插入，双对话的回溯插入依赖这一点。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Screenplay {
    elements: Vec<Element>,
}

impl Screenplay {
    pub fn new() -> Self {
        Screenplay {
            elements: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// 在指定位置插入元素，其后的元素整体后移
    pub fn insert(&mut self, index: usize, element: Element) {
        self.elements.insert(index, element);
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut Element> {
        self.elements.last_mut()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl From<Vec<Element>> for Screenplay {
    fn from(elements: Vec<Element>) -> Self {
        Screenplay { elements }
    }
}

impl Index<usize> for Screenplay {
    type Output = Element;

    fn index(&self, index: usize) -> &Element {
        &self.elements[index]
    }
}

impl IndexMut<usize> for Screenplay {
    fn index_mut(&mut self, index: usize) -> &mut Element {
        &mut self.elements[index]
    }
}

impl<'a> IntoIterator for &'a Screenplay {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
